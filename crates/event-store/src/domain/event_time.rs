//! Event Time
//!
//! An event boundary is either a whole calendar day or a local wall-clock
//! date-time. Both travel as strings (`2024-05-01`, `2024-05-01T09:30:00`).

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Start or end of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventTime {
    /// All-day boundary
    Date(NaiveDate),
    /// Timed boundary, local wall-clock time
    DateTime(NaiveDateTime),
}

impl EventTime {
    /// Parse a date or date-time string.
    ///
    /// RFC 3339 input with an offset keeps its wall-clock time and drops the
    /// offset.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Ok(EventTime::Date(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(EventTime::DateTime(dt.naive_local()));
        }
        for format in [DATE_TIME_FORMAT, "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(EventTime::DateTime(dt));
            }
        }
        Err(DomainError::InvalidInput(format!("unrecognised date '{}'", raw)))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(date) => *date,
            EventTime::DateTime(dt) => dt.date(),
        }
    }

    /// Dates compare as their midnight
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            EventTime::Date(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            EventTime::DateTime(dt) => *dt,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, EventTime::Date(_))
    }

    /// Whether `self` used as an end is valid for `start`.
    ///
    /// When either side is a whole day only the dates are compared, so an
    /// all-day end on the same day as a timed start is accepted.
    pub fn not_before(&self, start: &EventTime) -> bool {
        if self.is_date() || start.is_date() {
            self.date() >= start.date()
        } else {
            self.as_datetime() >= start.as_datetime()
        }
    }
}

impl Ord for EventTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_datetime()
            .cmp(&other.as_datetime())
            .then_with(|| other.is_date().cmp(&self.is_date()))
    }
}

impl PartialOrd for EventTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            EventTime::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_FORMAT)),
        }
    }
}

impl TryFrom<String> for EventTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EventTime::parse(&value)
    }
}

impl From<EventTime> for String {
    fn from(value: EventTime) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_and_datetime() {
        assert_eq!(EventTime::parse("2024-05-01").unwrap(), EventTime::Date(date(2024, 5, 1)));
        assert_eq!(
            EventTime::parse("2024-05-01T09:30").unwrap(),
            EventTime::DateTime(date(2024, 5, 1).and_hms_opt(9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        let parsed = EventTime::parse("2024-05-01T09:30:00+02:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-05-01T09:30:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(EventTime::parse(""), Err(DomainError::InvalidInput(_))));
        assert!(EventTime::parse("mañana").is_err());
    }

    #[test]
    fn test_not_before_mixed_kinds() {
        let start = EventTime::parse("2024-05-01T10:00:00").unwrap();
        let same_day = EventTime::parse("2024-05-01").unwrap();
        let earlier = EventTime::parse("2024-05-01T09:00:00").unwrap();
        assert!(same_day.not_before(&start));
        assert!(!earlier.not_before(&start));
        assert!(!EventTime::parse("2024-04-30").unwrap().not_before(&start));
    }

    #[test]
    fn test_ordering_puts_date_before_midnight() {
        let day = EventTime::parse("2024-05-01").unwrap();
        let midnight = EventTime::parse("2024-05-01T00:00:00").unwrap();
        assert!(day < midnight);
        assert_ne!(day, midnight);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&EventTime::parse("2024-12-31").unwrap()).unwrap();
        assert_eq!(json, "\"2024-12-31\"");
        let back: EventTime = serde_json::from_str("\"2024-12-31T23:15:00\"").unwrap();
        assert!(!back.is_date());
    }
}
