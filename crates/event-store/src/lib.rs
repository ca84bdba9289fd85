//! Event Store
//!
//! Authoritative storage for calendar task events.
//!
//! Layered architecture:
//! - domain: Event, EventTime, preferences, errors
//! - repository: SQLite data access
//! - service: the operations the calendar calls, plus the change feed

pub mod domain;
pub mod repository;
mod changes;
mod service;

pub use changes::{ChangeKind, ChangeNotice, Subscription};
pub use domain::{CalendarPreferences, CalendarView, DomainError, DomainResult, Event, EventTime};
pub use repository::{DbState, EventRepository, PreferencesRepository, Repository};
pub use service::EventService;
