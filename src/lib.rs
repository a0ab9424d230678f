//! Browser client for the hotel review pages: the paginated review list with
//! likes and owner controls, and live username/password validation.
//!
//! The host page loads the wasm bundle and calls [`start_hotel_page`] once its
//! DOM is ready.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod page;
pub mod services;
pub mod utils;

use wasm_bindgen::prelude::*;

use crate::config::ClientConfig;

/// Explicit initialization entry point for the host page. `base_url` prefixes
/// every endpoint; omit it for same-origin requests.
#[wasm_bindgen]
pub fn start_hotel_page(base_url: Option<String>) -> Result<(), JsValue> {
    utils::panic_hook::init();
    let config = match base_url {
        Some(base_url) => ClientConfig::default().with_base_url(base_url),
        None => ClientConfig::default(),
    };
    app::start(config).map_err(|err| js_sys::Error::new(&err.to_string()).into())
}
