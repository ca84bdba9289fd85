//! Grid Layout
//!
//! Which days a view shows and which events land in each cell.
//! Weeks start on Monday.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::calendar::ViewMode;
use crate::models::CalendarEvent;

/// Six full weeks, as in every month grid
pub const MONTH_CELLS: i64 = 42;

pub const HOURS: std::ops::Range<u32> = 0..24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// 42 days starting at the Monday on or before the 1st
pub fn month_cells(focus: NaiveDate) -> Vec<NaiveDate> {
    let grid_start = start_of_week(first_day_of_month(focus));
    (0..MONTH_CELLS).map(|offset| grid_start + Duration::days(offset)).collect()
}

/// Monday..Sunday around `focus`
pub fn week_days(focus: NaiveDate) -> Vec<NaiveDate> {
    let monday = start_of_week(focus);
    (0..7).map(|offset| monday + Duration::days(offset)).collect()
}

/// Day columns of the time grid
pub fn time_grid_days(mode: ViewMode, focus: NaiveDate) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![focus],
        ViewMode::Week | ViewMode::Month => week_days(focus),
    }
}

/// First day of the current range; the toolbar title is built from it
pub fn range_start(mode: ViewMode, focus: NaiveDate) -> NaiveDate {
    match mode {
        ViewMode::Month => first_day_of_month(focus),
        ViewMode::Week => start_of_week(focus),
        ViewMode::Day => focus,
    }
}

/// Move the focus by one unit of the current view
pub fn step(mode: ViewMode, focus: NaiveDate, direction: Direction) -> NaiveDate {
    let moved = match (mode, direction) {
        (ViewMode::Month, Direction::Prev) => first_day_of_month(focus).checked_sub_months(Months::new(1)),
        (ViewMode::Month, Direction::Next) => first_day_of_month(focus).checked_add_months(Months::new(1)),
        (ViewMode::Week, Direction::Prev) => focus.checked_sub_signed(Duration::days(7)),
        (ViewMode::Week, Direction::Next) => focus.checked_add_signed(Duration::days(7)),
        (ViewMode::Day, Direction::Prev) => focus.pred_opt(),
        (ViewMode::Day, Direction::Next) => focus.succ_opt(),
    };
    moved.unwrap_or(focus)
}

/// Start and end dates, end inclusive; unparseable events cover nothing
fn date_span(event: &CalendarEvent) -> Option<(NaiveDate, NaiveDate)> {
    let start = event.start_stamp()?.date();
    let end = event.end_stamp().map(|s| s.date()).unwrap_or(start).max(start);
    Some((start, end))
}

/// Events shown in a month cell: every event covering the day
pub fn events_on_day(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| matches!(date_span(event), Some((start, end)) if start <= day && day <= end))
        .cloned()
        .collect()
}

/// Events for the all-day row of the time grid
pub fn all_day_events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<CalendarEvent> {
    events_on_day(events, day).into_iter().filter(|event| !event.is_timed()).collect()
}

/// Timed events whose start falls in the given hour slot
pub fn timed_events_at(events: &[CalendarEvent], day: NaiveDate, hour: u32) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.is_timed())
        .filter(|event| {
            event
                .start_stamp()
                .map(|s| s.date() == day && s.as_datetime().hour() == hour)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

pub fn slot_start(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN))
}

pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}
