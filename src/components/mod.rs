//! UI Components
//!
//! Reusable Leptos components.

mod alert_banner;
mod calendar_toolbar;
mod delete_confirm_button;
mod event_content;
mod month_grid;
mod task_calendar;
mod time_grid;
mod title_prompt;

pub use alert_banner::AlertBanner;
pub use calendar_toolbar::CalendarToolbar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use event_content::{CalendarHandlers, EventChip};
pub use month_grid::MonthGrid;
pub use task_calendar::TaskCalendar;
pub use time_grid::TimeGrid;
pub use title_prompt::TitlePrompt;
