//! Demo App
//!
//! Page shell hosting the basic demo.

use leptos::prelude::*;

use crate::page::BasicPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="demo-layout">
            <BasicPage />
        </main>
    }
}
