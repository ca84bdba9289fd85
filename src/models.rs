//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

use crate::calendar::dates::Stamp;
use crate::calendar::ViewMode;

/// Event data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub all_day: bool,
    pub completed: bool,
}

impl CalendarEvent {
    pub fn start_stamp(&self) -> Option<Stamp> {
        Stamp::parse(&self.start)
    }

    /// Explicit end only; an empty string counts as missing
    pub fn end_stamp(&self) -> Option<Stamp> {
        self.end.as_deref().and_then(Stamp::parse)
    }

    /// Placed by time of day in the time grid
    pub fn is_timed(&self) -> bool {
        !self.all_day && self.start_stamp().and_then(|s| s.time()).is_some()
    }
}

/// Change pushed by the backend after every write (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeNotice {
    pub kind: String,
    pub event_id: Option<u32>,
}

/// Persisted UI settings (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CalendarPreferences {
    pub initial_view: ViewMode,
}
