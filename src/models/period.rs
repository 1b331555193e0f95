//! Calendar month representation
//!
//! Every record is filed under a year-month. Periods are stored as `YYYY-MM`
//! and compared chronologically; they never carry a day.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month, e.g. `2025-01`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the current calendar month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // year/month are validated on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Whether this period is inside the trailing window of `months` calendar
    /// months ending at `today`.
    ///
    /// The cutoff is `today` minus `months` months; a period qualifies when its
    /// first day is on or after the cutoff. Later periods always qualify.
    pub fn within_trailing(&self, today: NaiveDate, months: u32) -> bool {
        match today.checked_sub_months(Months::new(months)) {
            Some(cutoff) => self.start_date() >= cutoff,
            None => true,
        }
    }

    /// Parse and normalize a period
    ///
    /// Accepted forms:
    /// - `2025-01`, `2025-1`
    /// - `2025-01-15`
    /// - `2025-01-15 00:00:00`, `2025-01-15T00:00:00`
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let trimmed = s.trim();
        let date_part = trimmed
            .split(|c: char| c == 'T' || c == ' ')
            .next()
            .unwrap_or_default();

        let parts: Vec<&str> = date_part.split('-').collect();
        let invalid = || PeriodParseError::InvalidFormat(trimmed.to_string());

        match parts.as_slice() {
            [year, month] => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                Self::new(year, month)
            }
            [_, _, _] => NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Self::from_date)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

impl From<PeriodParseError> for crate::error::LedgerError {
    fn from(err: PeriodParseError) -> Self {
        Self::InvalidPeriod(err.to_string())
    }
}
