//! Millisecond timestamps and calendar offsets.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// An absolute instant: milliseconds since 1970-01-01T00:00:00Z.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The instant as a UTC datetime.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::OutOfRange`] when the value lies outside chrono's
    /// representable range (roughly ±262,000 years).
    pub fn to_utc(self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
            .ok_or_else(|| UtilError::OutOfRange(format!("timestamp {} ms", self.0)))
    }

    /// The instant seen from `tz`.
    pub fn in_zone<Z: TimeZone>(self, tz: &Z) -> Result<DateTime<Z>> {
        Ok(self.to_utc()?.with_timezone(tz))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for i64 {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for Timestamp {
    fn from(value: DateTime<Z>) -> Self {
        Self(value.timestamp_millis())
    }
}

/// Signed deltas applied by [`adjust_date`](crate::adjust_date).
///
/// Fields left at zero are skipped. Non-zero fields apply in declaration
/// order: minutes, hours, days, months, years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Offset {
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
    pub months: i64,
    pub years: i64,
}

impl Offset {
    pub fn minutes(minutes: i64) -> Self {
        Self {
            minutes,
            ..Default::default()
        }
    }

    pub fn hours(hours: i64) -> Self {
        Self {
            hours,
            ..Default::default()
        }
    }

    pub fn days(days: i64) -> Self {
        Self {
            days,
            ..Default::default()
        }
    }

    pub fn months(months: i64) -> Self {
        Self {
            months,
            ..Default::default()
        }
    }

    pub fn years(years: i64) -> Self {
        Self {
            years,
            ..Default::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
