//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations. The connection slot starts
//! empty so the app can come up before the database is opened.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Connection slot shared by all repositories
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
    path: PathBuf,
}

impl DbState {
    pub fn new(path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            path,
        }
    }

    /// Fresh in-memory database with migrations applied
    pub async fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        run_migrations(&conn)?;
        let state = Self::new(PathBuf::from(":memory:"));
        *state.conn.lock().await = Some(conn);
        Ok(state)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the database file and run migrations off the async runtime
    pub async fn open(&self) -> DomainResult<()> {
        let path = self.path.clone();
        let conn = tokio::task::spawn_blocking(move || open_connection(&path))
            .await
            .map_err(|e| DomainError::Internal(format!("Database open task failed: {}", e)))??;

        *self.conn.lock().await = Some(conn);
        log::info!("Database ready at {}", self.path.display());
        Ok(())
    }

    pub async fn is_ready(&self) -> bool {
        self.conn.lock().await.is_some()
    }
}

/// Run `f` against the open connection
pub(crate) async fn with_conn<R, F>(shared: &SharedConnection, f: F) -> DomainResult<R>
where
    F: FnOnce(&Connection) -> DomainResult<R> + Send,
    R: Send,
{
    let guard = shared.lock().await;
    let conn = guard
        .as_ref()
        .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))?;
    f(conn)
}

pub(crate) fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

/// Open a database file with migrations applied
pub fn open_connection(path: &Path) -> DomainResult<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DomainError::Internal(format!("Failed to create {}: {}", parent.display(), e)))?;
    }
    let conn = Connection::open(path).map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))
        .map_err(db_err)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(names) = stmt.query_map([], |row| row.get::<_, String>(1)) else {
        return false;
    };
    let found = names.flatten().any(|name| name == column);
    found
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            start_at TEXT NOT NULL,
            end_at TEXT,
            all_day INTEGER NOT NULL DEFAULT 1,
            completed INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )
    .map_err(db_err)?;

    // Timestamps arrived after the first schema
    if !column_exists(conn, "events", "created_at") {
        conn.execute("ALTER TABLE events ADD COLUMN created_at INTEGER", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add created_at: {}", e)))?;
    }

    if !column_exists(conn, "events", "updated_at") {
        conn.execute("ALTER TABLE events ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add updated_at: {}", e)))?;
    }

    conn.execute("CREATE INDEX IF NOT EXISTS idx_events_start ON events(start_at)", [])
        .map_err(db_err)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            initial_view TEXT NOT NULL DEFAULT 'month'
        )",
        [],
    )
    .map_err(db_err)?;

    Ok(())
}
