//! UI Components
//!
//! Panels and building blocks of the demo page.

mod code_pane;
mod counter_panel;
mod empty_state;
mod greeting_panel;
mod panel_header;

pub use code_pane::CodePane;
pub use counter_panel::CounterPanel;
pub use empty_state::EmptyState;
pub use greeting_panel::GreetingPanel;
pub use panel_header::PanelHeader;
