use chrono::{DateTime, Days, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A local calendar day. Completion history is stored at this granularity so
/// two timestamps from the same day always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NaiveDate);

impl Day {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The previous calendar day, `None` only at the start of chrono's range.
    pub fn pred(self) -> Option<Day> {
        self.0.checked_sub_days(Days::new(1)).map(Day)
    }

    /// Accepts a plain `YYYY-MM-DD` date, or a full RFC 3339 timestamp which is
    /// truncated to the local day it falls on.
    pub fn parse(value: &str) -> Option<Day> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(Day(date));
        }
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|instant| normalize(instant.with_timezone(&Local)))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Day::parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }
}

pub fn normalize(instant: DateTime<Local>) -> Day {
    Day(instant.date_naive())
}

pub fn today() -> Day {
    normalize(Local::now())
}
