//! Where "now" comes from.
//!
//! The calendar functions never read the wall clock themselves. Callers that
//! want a default of "now" go through a [`Clock`], which tests replace with a
//! [`FixedClock`].

use chrono::Utc;

use crate::timestamp::Timestamp;

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the OS clock through `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(Utc::now().timestamp_millis())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
