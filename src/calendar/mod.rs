//! Calendar logic shared by the grid components

pub mod dates;
pub mod grid;
pub mod intents;
pub mod locale;
mod view_mode;

pub use view_mode::ViewMode;
