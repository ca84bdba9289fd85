//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the event store.

mod event_cmd;
mod preferences_cmd;

pub use event_cmd::*;
pub use preferences_cmd::*;
