//! Basic Demo Page
//!
//! Owns the page store, talks to the backend and wires both panels.

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{CounterPanel, GreetingPanel};
use crate::config::PageConfig;
use crate::models::GreetingPayload;
use crate::state::{CounterWrite, RequestId};
use crate::store::{
    create_page_store, store_begin_greeting, store_confirm_counter, store_decrement,
    store_greeting_failed, store_greeting_succeeded, store_increment, store_load_counter,
    store_reset_badge, PageStateStoreFields, PageStore,
};

/// Apply the outcome of a greeting request. On success the badge reverts to
/// Ready once `sleep(delay)` resolves, unless a newer request took over.
pub async fn settle_greeting<S, F>(
    store: PageStore,
    request: RequestId,
    outcome: Result<GreetingPayload, ApiError>,
    delay: Duration,
    sleep: S,
) where
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    match outcome {
        Ok(payload) => {
            store_greeting_succeeded(&store, request, payload);
            sleep(delay).await;
            store_reset_badge(&store, request);
        }
        Err(e) => {
            log::warn!("[Greeting] {}", e);
            store_greeting_failed(&store, request, e.to_string());
        }
    }
}

#[component]
pub fn BasicPage() -> impl IntoView {
    let store = create_page_store();
    let config = StoredValue::new(PageConfig::from_location_or_relative());

    // Fetch current count on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let config = config.get_value();
            match api::fetch_counter(&config).await {
                Ok(remote) => {
                    log::debug!("[Counter] Loaded {:?}", remote);
                    store_load_counter(&store, remote);
                }
                // No record yet, or backend unreachable: stay at zero
                Err(e) => log::debug!("[Counter] Initial load failed: {}", e),
            }
        });
    });

    // Best-effort write after an optimistic update
    let sync_counter = move |write: CounterWrite| {
        spawn_local(async move {
            let config = config.get_value();
            match api::update_counter(&config, write.count).await {
                Ok(echo) => store_confirm_counter(&store, write, echo),
                Err(e) => log::error!("[Counter] Failed to update counter: {}", e),
            }
        });
    };

    let on_increment = move |_: ()| sync_counter(store_increment(&store));
    let on_decrement = move |_: ()| sync_counter(store_decrement(&store));

    let on_fetch = move |_: ()| {
        let Some(request) = store_begin_greeting(&store) else {
            return;
        };
        spawn_local(async move {
            let config = config.get_value();
            let outcome = api::fetch_greeting(&config).await;
            settle_greeting(store, request, outcome, config.badge_reset, gloo_timers::future::sleep).await;
        });
    };

    let count = Signal::derive(move || store.counter().with(|c| c.value()));
    let result = Signal::derive(move || store.greeting().with(|g| g.view()));
    let loading = Signal::derive(move || store.greeting().with(|g| g.loading));
    let badge = Signal::derive(move || store.greeting().with(|g| g.badge));

    view! {
        <CounterPanel
            count=count
            on_increment=on_increment
            on_decrement=on_decrement
        />

        <GreetingPanel
            result=result
            loading=loading
            badge=badge
            on_fetch=on_fetch
        />
    }
}
