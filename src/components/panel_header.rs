//! Panel Header Component
//!
//! Title on the left, short status badge on the right.

use leptos::prelude::*;

#[component]
pub fn PanelHeader(
    #[prop(into)] title: String,
    #[prop(into)] badge: Signal<&'static str>,
    #[prop(into, default = Signal::stored("panel-badge"))] badge_class: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="panel-header">
            <span class="panel-title">{title}</span>
            <span class=move || badge_class.get()>{move || badge.get()}</span>
        </div>
    }
}
