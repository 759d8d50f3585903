//! Demo Basic Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod highlight;
mod models;
mod page;
mod snippets;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialised".into());
    }
    mount_to_body(App);
}
