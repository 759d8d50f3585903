//! Counter Panel Component

use leptos::prelude::*;

use crate::components::{CodePane, PanelHeader};
use crate::snippets::SCHEMA_GRAPHQL;

/// Counter display with −/+ buttons and the backing table schema
#[component]
pub fn CounterPanel(
    #[prop(into)] count: Signal<i64>,
    #[prop(into)] on_increment: Callback<()>,
    #[prop(into)] on_decrement: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="panel">
            <PanelHeader title="Counter" badge="State" />
            <div class="panel-content">
                <div class="counter-display">{move || count.get()}</div>
                <div class="counter-buttons">
                    <button
                        class="btn btn-lg btn-decrement"
                        title="Decrement"
                        on:click=move |_| on_decrement.run(())
                    >
                        "−"
                    </button>
                    <button
                        class="btn btn-lg btn-increment"
                        title="Increment"
                        on:click=move |_| on_increment.run(())
                    >
                        "+"
                    </button>
                </div>
            </div>
            <PanelHeader title="schema.graphql" badge="GraphQL" />
            <CodePane language="graphql" code=Signal::stored(SCHEMA_GRAPHQL.to_string()) />
        </div>
    }
}
