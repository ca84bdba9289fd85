//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod event;
mod preferences;
mod subscription;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejected commands come back as `Err` carrying the backend's message
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend errors are plain strings; anything else is stringified
fn js_error(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("{:?}", err))
}

async fn call<T: serde::de::DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn to_args<T: serde::Serialize>(args: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

// Re-export all public items
pub use event::*;
pub use preferences::*;
pub use subscription::*;
