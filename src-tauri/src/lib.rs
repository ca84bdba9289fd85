//! Task Calendar Backend
//!
//! Hosts the event store behind Tauri IPC:
//! - commands: Tauri command handlers
//! - the store itself lives in the `event-store` crate

use std::path::PathBuf;

use event_store::{DbState, EventRepository, EventService};
use tauri::{Emitter, Manager};

mod commands;

/// Pushed to the webview after every successful write
const EVENTS_CHANGED: &str = "events-changed";
/// Pushed once the database has been opened
const DB_INITIALIZED: &str = "db-initialized";

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub events: EventService<EventRepository>,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    Ok(app_dir.join("task_calendar.db"))
}

/// Forward the store's change feed to the webview until the store goes away
fn forward_changes(app_handle: tauri::AppHandle, mut subscription: event_store::Subscription) {
    tauri::async_runtime::spawn(async move {
        while let Some(notice) = subscription.next().await {
            if let Err(e) = app_handle.emit(EVENTS_CHANGED, notice) {
                log::error!("Failed to emit {}: {}", EVENTS_CHANGED, e);
            }
        }
        log::info!("Change feed closed");
    });
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "TaskCalendar")?;

            let db_path = get_db_path(&app_handle)?;
            log::info!("App setup starting, database at {}", db_path.display());

            // Empty slot now, connection later
            let db_state = DbState::new(db_path);
            let events = EventService::new(EventRepository::new(db_state.conn.clone()));
            forward_changes(app_handle.clone(), events.subscribe());

            // Manage state IMMEDIATELY
            app.manage(AppState {
                db_state: db_state.clone(),
                events,
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                match db_state.open().await {
                    Ok(()) => {
                        let _ = rolling_logger::info("Async DB init success");
                        if let Err(e) = app_handle.emit(DB_INITIALIZED, ()) {
                            log::error!("Failed to emit {}: {}", DB_INITIALIZED, e);
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_user_events,
            commands::create_event,
            commands::toggle_event_completion,
            commands::delete_event,
            commands::update_event_date,
            commands::load_preferences,
            commands::save_preferences,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
