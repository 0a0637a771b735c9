//! Browser host for the landing page effects
//!
//! Exposes the spark button and the tachometer to JavaScript. The page owns
//! the animation loop and calls `frame` on each widget once per
//! `requestAnimationFrame`; dropping a widget (`free()`) is the only teardown.
//!
//! Note: only builds for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod canvas;
mod logger;
mod spark_button;
mod tachometer;

pub use spark_button::SparkButton;
pub use tachometer::WebTachometer;

use fx_core::Config;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Parse the optional JSON config handed over by the page
fn load_config(json: Option<&str>) -> Result<Config, JsValue> {
    match json {
        Some(json) if !json.trim().is_empty() => Config::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e))),
        _ => Ok(Config::default()),
    }
}
