use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use thiserror::Error;

use crate::time::Timestamp;

/// Calendar-date key of a day's tree, rendered as `YYYY-MM-DD`.
///
/// The date is always the calendar date in the app's reference timezone,
/// so every viewer shares the same key for the same tree no matter where
/// they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(from: NaiveDate) -> Self {
        Self(from)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DayKeyParseError {
    #[error("A day key must have the form YYYY-MM-DD")]
    Format,
    #[error("No such calendar date")]
    Date,
}

impl FromStr for DayKey {
    type Err = DayKeyParseError;

    // Strict: exactly four digits, dash, two digits, dash, two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(DayKeyParseError::Format);
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if !digits_ok {
            return Err(DayKeyParseError::Format);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DayKeyParseError::Date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A day bucket: the key plus the instant its tree locks.
///
/// `open_until` is derivable from the key alone; it is persisted anyway
/// because the provisioning tool writes it next to the key.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub key        : DayKey,
    pub open_until : Timestamp,
}
