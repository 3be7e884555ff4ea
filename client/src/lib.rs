extern crate alloc;

pub mod battle;
pub mod economy;
pub mod quests;
pub mod settlement;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "browser_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Engine version, for the front end to check it loaded the build it expects
#[wasm_bindgen]
pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

/// Report a rejected input on the browser console and hand the message back.
pub(crate) fn console_error(message: String) -> String {
    web_sys::console::error_1(&JsValue::from_str(&message));
    message
}

pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, String> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| console_error(format!("Failed to parse {what}: {e:?}")))
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| format!("Failed to serialize result: {e:?}"))
}
