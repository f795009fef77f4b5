//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod logger;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(AppConfig::default().log_level) {
        web_sys::console::error_1(&format!("failed to init logger: {}", e).into());
    }
    mount_to_body(App);
}
