//! Greeting Panel Component
//!
//! Calls `/greeting` on demand and shows the result, the error, or a hint.

use leptos::prelude::*;

use crate::components::{CodePane, EmptyState, PanelHeader};
use crate::highlight::highlight_json;
use crate::snippets::GREETING_RS;
use crate::state::{Badge, GreetingView};

#[component]
pub fn GreetingPanel(
    #[prop(into)] result: Signal<GreetingView>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] badge: Signal<Badge>,
    #[prop(into)] on_fetch: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="panel">
            <PanelHeader
                title="Greeting API"
                badge=Signal::derive(move || badge.get().label())
                badge_class=Signal::derive(move || badge.get().class())
            />
            <div class="panel-content">
                <button
                    class="btn btn-primary"
                    disabled=move || loading.get()
                    on:click=move |_| on_fetch.run(())
                >
                    {move || if loading.get() { "Loading..." } else { "Call /greeting" }}
                </button>

                <div class="results-container">
                    {move || match result.get() {
                        GreetingView::Empty => view! {
                            <EmptyState message="Click the button to fetch greeting" />
                        }.into_any(),
                        GreetingView::Failed(message) => view! {
                            <pre class="results-pre error-text">{message}</pre>
                        }.into_any(),
                        GreetingView::Loaded(payload) => view! {
                            <pre class="results-pre" inner_html=highlight_json(&payload)></pre>
                        }.into_any(),
                    }}
                </div>
            </div>
            <PanelHeader title="greeting.rs" badge="Rust" />
            <CodePane language="rust" code=Signal::stored(GREETING_RS.to_string()) />
        </div>
    }
}
