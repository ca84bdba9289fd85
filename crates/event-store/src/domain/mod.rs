//! Domain Layer
//!
//! Entities and core abstractions. No storage concerns live here.

mod entity;
mod event;
mod event_time;
mod preferences;

pub use entity::{DomainError, DomainResult, Entity};
pub use event::Event;
pub use event_time::EventTime;
pub use preferences::{CalendarPreferences, CalendarView};
