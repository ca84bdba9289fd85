//! Tauri Commands for Calendar Events
//!
//! Exposes the event store to the frontend via Tauri IPC. Argument names
//! arrive camelCase from the webview (`allDay`).

use event_store::{Event, EventTime};
use tauri::State;

use crate::AppState;

fn parse_time(field: &str, raw: &str) -> Result<EventTime, String> {
    EventTime::parse(raw).map_err(|e| format!("Invalid {}: {}", field, e))
}

/// Blank end strings count as missing
fn parse_end(raw: Option<String>) -> Result<Option<EventTime>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(end) => parse_time("end", end).map(Some),
    }
}

/// List all events, ordered by start
#[tauri::command]
pub async fn list_user_events(state: State<'_, AppState>) -> Result<Vec<Event>, String> {
    state.events.list_user_events().await.map_err(|e| e.to_string())
}

/// Create a new pending event
#[tauri::command]
pub async fn create_event(
    state: State<'_, AppState>,
    title: String,
    start: String,
    end: Option<String>,
    all_day: bool,
) -> Result<Event, String> {
    let start = parse_time("start", &start)?;
    let end = parse_end(end)?;
    state
        .events
        .create_event(&title, start, end, all_day)
        .await
        .map_err(|e| e.to_string())
}

/// Flip an event between pending and completed
#[tauri::command]
pub async fn toggle_event_completion(state: State<'_, AppState>, id: u32) -> Result<Event, String> {
    state.events.toggle_event_completion(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_event(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.events.delete_event(id).await.map_err(|e| e.to_string())
}

/// Move an event to a new start (and end)
#[tauri::command]
pub async fn update_event_date(
    state: State<'_, AppState>,
    id: u32,
    start: String,
    end: Option<String>,
) -> Result<Event, String> {
    let start = parse_time("start", &start)?;
    let end = parse_end(end)?;
    state
        .events
        .update_event_date(id, start, end)
        .await
        .map_err(|e| e.to_string())
}
