//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod event_repo;
mod preferences_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{open_connection, DbState, SharedConnection};
pub use event_repo::EventRepository;
pub use preferences_repo::PreferencesRepository;
