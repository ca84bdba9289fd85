//! Tauri Commands for Calendar Preferences

use event_store::{CalendarPreferences, PreferencesRepository};
use tauri::State;

use crate::AppState;

#[tauri::command]
pub async fn load_preferences(state: State<'_, AppState>) -> Result<CalendarPreferences, String> {
    let repo = PreferencesRepository::new(state.db_state.conn.clone());
    repo.load().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_preferences(
    state: State<'_, AppState>,
    preferences: CalendarPreferences,
) -> Result<(), String> {
    let repo = PreferencesRepository::new(state.db_state.conn.clone());
    repo.save(&preferences).await.map_err(|e| e.to_string())?;
    log::info!("Saved initial view: {}", preferences.initial_view.as_str());
    Ok(())
}
