//! WASM content script that augments the host chat UI with a prompt-list
//! dropdown, a bulk section-collapse/expand control, and a plain-text
//! paste interceptor.
//!
//! The host page is foreign and mutates continuously; every DOM lookup in
//! this crate treats "not found" as an expected outcome and degrades
//! rather than failing. See `app::launch` for the wiring.

pub mod app;
pub mod buttons;
pub mod dom;
pub mod dropdown;
pub mod editor;
pub mod lifecycle;
pub mod messages;
pub mod paste;
pub mod scroll;
pub mod theme;
pub mod tooltip;

use wasm_bindgen::prelude::*;

/// Module-load hook: logging and readable panics before anything else
/// runs. A panic here would mean a bug in this crate, never expected host
/// drift, which is handled as soft "not found" everywhere.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Entry point called by the extension loader. `config_json` is a JSON
/// settings document; missing fields fall back to the current host-page
/// contract. Calling more than once is a no-op.
#[wasm_bindgen]
pub fn launch(config_json: &str) -> Result<(), JsValue> {
    let settings = promptlist_core::Settings::from_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    app::launch(settings);
    Ok(())
}
