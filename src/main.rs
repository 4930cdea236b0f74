//! Tracalorie Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod storage;
mod store;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);
    log::info!("starting, storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
