//! Event Entity
//!
//! A user task placed on the calendar.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::event_time::EventTime;

/// A task/appointment with a time span and a completion flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (assigned by the database)
    pub id: u32,
    pub title: String,
    pub start: EventTime,
    /// Missing end means the event ends where it starts
    pub end: Option<EventTime>,
    pub all_day: bool,
    /// pending (false) or completed (true)
    pub completed: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Event {
    /// Create a new pending event
    pub fn new(id: u32, title: String, start: EventTime, end: Option<EventTime>, all_day: bool) -> Self {
        Self {
            id,
            title,
            start,
            end,
            all_day,
            completed: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn effective_end(&self) -> EventTime {
        self.end.unwrap_or(self.start)
    }

    /// Check title and span before a write
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("title must not be empty".to_string()));
        }
        if let Some(end) = &self.end {
            if !end.not_before(&self.start) {
                return Err(DomainError::InvalidInput(format!(
                    "end {} is earlier than start {}",
                    end, self.start
                )));
            }
        }
        Ok(())
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Move the event. A missing end collapses to the new start, and the
    /// all-day flag follows the kind of the new start.
    pub fn reschedule(&mut self, start: EventTime, end: Option<EventTime>) -> DomainResult<()> {
        let end = end.unwrap_or(start);
        if !end.not_before(&start) {
            return Err(DomainError::InvalidInput(format!(
                "end {} is earlier than start {}",
                end, start
            )));
        }
        self.start = start;
        self.end = Some(end);
        self.all_day = start.is_date();
        Ok(())
    }
}

impl Entity for Event {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
