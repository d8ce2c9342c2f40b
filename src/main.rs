#![allow(warnings)]
//! Todo Client Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod logging;
mod models;
mod route;
mod store;
mod validation;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let config = ApiConfig::from_env().with_origin(&origin);
    log::info!("[Main] Todo API at {}", config.api_url());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
