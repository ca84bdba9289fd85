//! Preference Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, invoke, js_error, to_args};
use crate::models::CalendarPreferences;

#[derive(Serialize)]
struct SaveArgs {
    preferences: CalendarPreferences,
}

pub async fn load_preferences() -> Result<CalendarPreferences, String> {
    call("load_preferences", JsValue::NULL).await
}

pub async fn save_preferences(preferences: CalendarPreferences) -> Result<(), String> {
    invoke("save_preferences", to_args(&SaveArgs { preferences })?)
        .await
        .map(|_| ())
        .map_err(js_error)
}
