pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod utils;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::Config;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = Config::from_env();
    logging::init(config.log_level);
    if let Some(e) = config_error {
        log::warn!("invalid configuration, using defaults: {}", e);
    }
    log::info!(
        "starting household helper (helper api {}, admin api {})",
        config.helper_api_root,
        config.admin_api_root
    );

    mount_to_body(move || view! { <App config=config /> });
}
