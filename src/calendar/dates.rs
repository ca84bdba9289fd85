//! Date Strings
//!
//! Events arrive with `start`/`end` as strings: a whole day (`2024-05-01`)
//! or a local date-time (`2024-05-01T09:30:00`). `Stamp` is the parsed form.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Stamp {
    /// Parse a backend date string; empty or malformed input gives `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Stamp::Date(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Stamp::DateTime(dt.naive_local()));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(Stamp::DateTime)
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Stamp::Date(date) => *date,
            Stamp::DateTime(dt) => dt.date(),
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Stamp::Date(_) => None,
            Stamp::DateTime(dt) => Some(dt.time()),
        }
    }

    /// Days count from midnight
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            Stamp::Date(date) => date.and_time(NaiveTime::MIN),
            Stamp::DateTime(dt) => *dt,
        }
    }

    pub fn shift_days(&self, days: i64) -> Self {
        match self {
            Stamp::Date(date) => Stamp::Date(*date + Duration::days(days)),
            Stamp::DateTime(dt) => Stamp::DateTime(*dt + Duration::days(days)),
        }
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Stamp::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
