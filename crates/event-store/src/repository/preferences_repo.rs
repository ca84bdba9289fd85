//! Preferences Repository
//!
//! Single-row persistence for calendar UI settings.

use rusqlite::{params, OptionalExtension};

use crate::domain::{CalendarPreferences, CalendarView, DomainResult};
use super::db::{db_err, with_conn, SharedConnection};

pub struct PreferencesRepository {
    conn: SharedConnection,
}

impl PreferencesRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    pub async fn save(&self, prefs: &CalendarPreferences) -> DomainResult<()> {
        with_conn(&self.conn, |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO preferences (id, initial_view) VALUES (1, ?1)",
                params![prefs.initial_view.as_str()],
            )
            .map_err(db_err)?;
            Ok(())
        })
        .await
    }

    /// Stored preferences, or defaults when nothing was saved yet
    pub async fn load(&self) -> DomainResult<CalendarPreferences> {
        with_conn(&self.conn, |conn| {
            let view = conn
                .query_row("SELECT initial_view FROM preferences WHERE id = 1", [], |row| {
                    row.get::<_, String>(0)
                })
                .optional()
                .map_err(db_err)?;

            Ok(view
                .map(|v| CalendarPreferences {
                    initial_view: CalendarView::parse_lossy(&v),
                })
                .unwrap_or_default())
        })
        .await
    }
}
