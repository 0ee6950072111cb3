#![allow(warnings)]
//! Insight DM Frontend Entry Point

mod models;
mod config;
mod api;
mod form;
mod context;
mod store;
mod clipboard;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("Insight DM starting, API at {}", config::ApiConfig::from_env().base_url);

    mount_to_body(App);
}
