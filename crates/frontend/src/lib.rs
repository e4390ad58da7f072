pub mod app;
pub mod shared;
pub mod usecases;

use app::App;
use leptos::prelude::*;
use shared::config::{load_config, Config};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::error!("Embedded configuration is invalid, using defaults: {}", e);
    }
    if config.parsed_log_level().is_none() {
        log::warn!(
            "Unknown log level '{}', using debug",
            config.logging.level
        );
    }
    log::info!("Using shop API at {}", config.api.base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
