use std::fmt;

use chrono::{DateTime, Utc};

/// An instant with millisecond precision.
///
/// Milliseconds since the Unix epoch, the precision the backing store
/// reports for server-assigned creation timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Utc::now().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(from: DateTime<Utc>) -> Self {
        Self(from.timestamp_millis())
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(from: Timestamp) -> Self {
        DateTime::from_timestamp_millis(from.0).expect("timestamp within datetime range")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", DateTime::<Utc>::from(*self))
    }
}
