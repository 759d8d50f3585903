//! Code Pane Component
//!
//! Highlighted source block used as the bottom section of a panel.

use leptos::prelude::*;

use crate::highlight::highlight_code;

/// Re-highlights whenever `code` changes
#[component]
pub fn CodePane(
    language: &'static str,
    #[prop(into)] code: Signal<String>,
) -> impl IntoView {
    let highlighted = Memo::new(move |_| highlight_code(&code.get(), language));

    view! {
        <pre class="code-pane">
            <code class=format!("language-{}", language) inner_html=move || highlighted.get()></code>
        </pre>
    }
}
