//! Backend Event Subscriptions
//!
//! The backend pushes `events-changed` after every write and
//! `db-initialized` once the database is open.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::js_error;

pub const EVENTS_CHANGED: &str = "events-changed";
pub const DB_INITIALIZED: &str = "db-initialized";

#[wasm_bindgen]
extern "C" {
    /// Resolves to the unlisten function
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
struct TauriEvent<T> {
    payload: T,
}

/// A live listener; call `unsubscribe` on teardown
pub struct BackendSubscription {
    event: &'static str,
    unlisten: js_sys::Function,
    // Must outlive the JS listener
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl BackendSubscription {
    pub async fn listen<T, F>(event: &'static str, on_payload: F) -> Result<Self, String>
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + 'static,
    {
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
            match serde_wasm_bindgen::from_value::<TauriEvent<T>>(raw) {
                Ok(ev) => on_payload(ev.payload),
                Err(e) => web_sys::console::warn_1(&format!("[CAL] Bad {} payload: {}", event, e).into()),
            }
        });
        let unlisten = listen(event, &handler).await.map_err(js_error)?;
        let unlisten = unlisten
            .dyn_into::<js_sys::Function>()
            .map_err(|_| format!("listen({}) did not return an unlisten function", event))?;
        Ok(Self {
            event,
            unlisten,
            _handler: handler,
        })
    }

    pub fn unsubscribe(self) {
        if let Err(e) = self.unlisten.call0(&JsValue::NULL) {
            web_sys::console::warn_1(&format!("[CAL] Unlisten {} failed: {}", self.event, js_error(e)).into());
        }
    }
}
