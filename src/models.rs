//! Frontend Models
//!
//! Data structures matching the form field and toggle endpoint contracts.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One start/end pair as stored in the schedule field, optionally limited to
/// some weekdays (1 = Monday .. 7 = Sunday)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredInterval")]
pub struct Interval {
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<u8>>,
}

/// Interval as older schedules may store it: `startTime`/`endTime` take
/// precedence over `start`/`end` when non-empty
#[derive(Deserialize)]
struct StoredInterval {
    start: Option<String>,
    #[serde(rename = "startTime")]
    start_time: Option<String>,
    end: Option<String>,
    #[serde(rename = "endTime")]
    end_time: Option<String>,
    #[serde(default)]
    days: Option<Vec<u8>>,
}

impl TryFrom<StoredInterval> for Interval {
    type Error = String;

    fn try_from(stored: StoredInterval) -> Result<Self, String> {
        fn pick(preferred: Option<String>, plain: Option<String>, name: &str) -> Result<String, String> {
            preferred
                .filter(|value| !value.is_empty())
                .or(plain)
                .ok_or_else(|| format!("missing field `{name}`"))
        }
        Ok(Self {
            start: pick(stored.start_time, stored.start, "start")?,
            end: pick(stored.end_time, stored.end, "end")?,
            days: stored.days,
        })
    }
}

impl Interval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            days: None,
        }
    }

    /// Both bounds filled in; only complete intervals are serialized
    pub fn is_complete(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    /// Whether the interval applies on `weekday`. A missing or empty day
    /// list means every day.
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        let day = weekday.number_from_monday() as u8;
        self.days
            .as_ref()
            .map_or(true, |days| days.is_empty() || days.contains(&day))
    }

    /// Whether `at` on `weekday` falls inside `[start, end)`, wrapping past
    /// midnight when `start > end`. Unparsable bounds cover nothing.
    pub fn covers(&self, at: TimeOfDay, weekday: Weekday) -> bool {
        if !self.runs_on(weekday) {
            return false;
        }
        let (Some(start), Some(end)) = (TimeOfDay::parse(&self.start), TimeOfDay::parse(&self.end)) else {
            return false;
        };
        if start <= end {
            start <= at && at < end
        } else {
            at >= start || at < end
        }
    }
}

/// Wall-clock time with minute granularity (`HH:MM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn parse(text: &str) -> Option<Self> {
        NaiveTime::parse_from_str(text.trim(), "%H:%M").ok().map(TimeOfDay)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Body of a successful `POST /task/{id}/toggle/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ToggleResponse {
    pub is_active: bool,
}
