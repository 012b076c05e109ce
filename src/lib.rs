//! # sketchboard
//!
//! Browser host for the sketchboard whiteboard. Looks up the board's DOM
//! elements, hands the canvas to [`canvas::engine::Engine`], and forwards
//! pointer, wheel, resize, toolbar and reset events to it. Everything the
//! engine reports back as an [`canvas::engine::Action`] is applied here.

pub mod config;
mod dom;
mod host;

use wasm_bindgen::prelude::*;

use crate::config::HostConfig;

/// WASM entry point.
///
/// # Errors
///
/// Returns `Err` if the page is missing the board canvas, its 2D context, or
/// any of the controls named by [`HostConfig`].
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let search = window.location().search().unwrap_or_default();
    let config = HostConfig::from_query(&search);

    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
    }
    log::info!("sketchboard starting (log level {})", config.log_level);

    host::start(&window, &config)
}
