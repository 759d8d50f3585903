//! Page State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::GreetingPayload;
use crate::state::{Counter, CounterWrite, GreetingState, RequestId};

/// State owned by the demo page
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Counter panel
    pub counter: Counter,
    /// Greeting panel
    pub greeting: GreetingState,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Create the store owned by the page; panels receive derived signals
pub fn create_page_store() -> PageStore {
    Store::new(PageState::default())
}

// ========================
// Store Helper Functions
// ========================

pub fn store_load_counter(store: &PageStore, remote: Option<i64>) {
    store.counter().write().load(remote);
}

pub fn store_increment(store: &PageStore) -> CounterWrite {
    store.counter().write().increment()
}

pub fn store_decrement(store: &PageStore) -> CounterWrite {
    store.counter().write().decrement()
}

pub fn store_confirm_counter(store: &PageStore, write: CounterWrite, server_count: Option<i64>) {
    store.counter().write().confirm(write.seq, server_count);
}

pub fn store_begin_greeting(store: &PageStore) -> Option<RequestId> {
    store.greeting().write().begin()
}

pub fn store_greeting_succeeded(store: &PageStore, id: RequestId, payload: GreetingPayload) {
    store.greeting().write().succeed(id, payload);
}

pub fn store_greeting_failed(store: &PageStore, id: RequestId, message: String) {
    store.greeting().write().fail(id, message);
}

pub fn store_reset_badge(store: &PageStore, id: RequestId) {
    store.greeting().write().reset_badge(id);
}
