//! Event Repository
//!
//! SQLite-backed implementation of `Repository<Event>`.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{DomainError, DomainResult, Event, EventTime};
use super::db::{db_err, with_conn, SharedConnection};
use super::traits::Repository;

const SELECT_COLUMNS: &str =
    "SELECT id, title, start_at, end_at, all_day, completed, created_at, updated_at FROM events";

/// SQLite implementation of the Event repository
#[derive(Clone)]
pub struct EventRepository {
    conn: SharedConnection,
}

impl EventRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Event> for EventRepository {
    async fn create(&self, entity: &Event) -> DomainResult<Event> {
        with_conn(&self.conn, |conn| {
            let now = chrono::Utc::now().timestamp();
            conn.execute(
                "INSERT INTO events (title, start_at, end_at, all_day, completed, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    entity.title,
                    entity.start.to_string(),
                    entity.end.map(|end| end.to_string()),
                    entity.all_day,
                    entity.completed,
                    now,
                ],
            )
            .map_err(db_err)?;

            let id = u32::try_from(conn.last_insert_rowid())
                .map_err(|e| DomainError::Internal(format!("Row id out of range: {}", e)))?;
            select_by_id(conn, id)?
                .ok_or_else(|| DomainError::Internal(format!("Event {} vanished after insert", id)))
        })
        .await
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Event>> {
        with_conn(&self.conn, |conn| select_by_id(conn, id)).await
    }

    async fn list(&self) -> DomainResult<Vec<Event>> {
        with_conn(&self.conn, |conn| {
            let mut stmt = conn
                .prepare(&format!("{} ORDER BY start_at ASC, id ASC", SELECT_COLUMNS))
                .map_err(db_err)?;
            let rows = stmt.query_map([], read_row).map_err(db_err)?;

            let mut events = Vec::new();
            for row in rows {
                events.push(row.map_err(db_err)?.into_event()?);
            }
            Ok(events)
        })
        .await
    }

    async fn update(&self, entity: &Event) -> DomainResult<Event> {
        with_conn(&self.conn, |conn| {
            let changed = conn
                .execute(
                    "UPDATE events SET title = ?1, start_at = ?2, end_at = ?3, all_day = ?4, completed = ?5,
                     updated_at = ?6 WHERE id = ?7",
                    params![
                        entity.title,
                        entity.start.to_string(),
                        entity.end.map(|end| end.to_string()),
                        entity.all_day,
                        entity.completed,
                        chrono::Utc::now().timestamp(),
                        entity.id,
                    ],
                )
                .map_err(db_err)?;

            if changed == 0 {
                return Err(DomainError::NotFound(format!("Event {}", entity.id)));
            }
            select_by_id(conn, entity.id)?
                .ok_or_else(|| DomainError::NotFound(format!("Event {}", entity.id)))
        })
        .await
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        with_conn(&self.conn, |conn| {
            let changed = conn
                .execute("DELETE FROM events WHERE id = ?1", params![id])
                .map_err(db_err)?;
            if changed == 0 {
                return Err(DomainError::NotFound(format!("Event {}", id)));
            }
            Ok(())
        })
        .await
    }
}

/// Raw column values; date parsing happens outside the rusqlite row closure
struct EventRow {
    id: u32,
    title: String,
    start: String,
    end: Option<String>,
    all_day: bool,
    completed: bool,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

impl EventRow {
    fn into_event(self) -> DomainResult<Event> {
        let corrupt = |e: DomainError| DomainError::Internal(format!("Event {} has a bad date: {}", self.id, e));
        Ok(Event {
            id: self.id,
            title: self.title.clone(),
            start: EventTime::parse(&self.start).map_err(corrupt)?,
            end: self.end.as_deref().map(EventTime::parse).transpose().map_err(corrupt)?,
            all_day: self.all_day,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EventRow> {
    Ok(EventRow {
        id: row.get(0)?,
        title: row.get(1)?,
        start: row.get(2)?,
        end: row.get(3)?,
        all_day: row.get(4)?,
        completed: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn select_by_id(conn: &Connection, id: u32) -> DomainResult<Option<Event>> {
    let row = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![id], read_row)
        .optional()
        .map_err(db_err)?;
    row.map(EventRow::into_event).transpose()
}
