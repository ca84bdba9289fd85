//! Calendar Preferences
//!
//! UI settings persisted next to the events.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::DomainError;

/// Grid layout shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        }
    }

    /// Unknown stored values fall back to the month view
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for CalendarView {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "day" => Ok(CalendarView::Day),
            other => Err(DomainError::InvalidInput(format!("unknown view '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarPreferences {
    /// View opened at startup
    pub initial_view: CalendarView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_round_trips_through_str() {
        for view in [CalendarView::Month, CalendarView::Week, CalendarView::Day] {
            assert_eq!(view.as_str().parse::<CalendarView>(), Ok(view));
        }
        assert!("agenda".parse::<CalendarView>().is_err());
        assert_eq!(CalendarView::parse_lossy("agenda"), CalendarView::Month);
    }
}
