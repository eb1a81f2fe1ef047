//! Lern-App Frontend Entry Point

mod app;
mod components;
mod css;
mod markdown;
mod models;
mod pages;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

/// Console log level: verbose for debug builds only
const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(LOG_LEVEL);
    log::info!("[APP] mounting {}", app::APP_NAME);
    mount_to_body(App);
}
