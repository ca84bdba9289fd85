//! Event Commands
//!
//! Frontend bindings for the five event operations.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, invoke, js_error, to_args};
use crate::calendar::intents::{CreateEventArgs, RescheduleArgs};
use crate::models::CalendarEvent;

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_user_events() -> Result<Vec<CalendarEvent>, String> {
    call("list_user_events", JsValue::NULL).await
}

pub async fn create_event(args: &CreateEventArgs) -> Result<CalendarEvent, String> {
    call("create_event", to_args(args)?).await
}

pub async fn toggle_event_completion(id: u32) -> Result<CalendarEvent, String> {
    call("toggle_event_completion", to_args(&IdArgs { id })?).await
}

pub async fn delete_event(id: u32) -> Result<(), String> {
    invoke("delete_event", to_args(&IdArgs { id })?)
        .await
        .map(|_| ())
        .map_err(js_error)
}

pub async fn update_event_date(args: &RescheduleArgs) -> Result<CalendarEvent, String> {
    call("update_event_date", to_args(args)?).await
}
