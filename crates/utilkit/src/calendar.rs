//! A zone, a clock and a locale bundled together.
//!
//! The free functions in this crate take every input explicitly. [`Calendar`]
//! holds the ambient ones (which zone, what time it is, which locale) so that
//! callers can omit a timestamp and get "now", the way the helpers are
//! usually called from application code.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, UtilError};
use crate::format::{self, FormatOptions};
use crate::locale::{
    chrono_locale, get_user_locale, normalize_locale, HostLocale, LocaleSource, DEFAULT_LOCALE,
};
use crate::timestamp::{Offset, Timestamp};
use crate::timestring;
use crate::zone::Zone;

/// Overrides for the host zone and locale. Unset fields fall back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// `"local"`, an IANA name or a fixed offset such as `"+05:30"`.
    pub timezone: Option<String>,
    /// `"en-US"` or POSIX style `"en_US.UTF-8"`.
    pub locale: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Calendar<C: Clock = SystemClock> {
    zone: Zone,
    clock: C,
    locale: String,
}

impl Calendar {
    /// Host zone, system clock, host locale.
    pub fn host() -> Self {
        Self::new(Zone::Host, SystemClock, supported_user_locale(&HostLocale))
    }
}

/// The source's locale when chrono has tables for it, otherwise
/// [`DEFAULT_LOCALE`].
fn supported_user_locale<L: LocaleSource + ?Sized>(source: &L) -> String {
    let locale = get_user_locale(source);
    if chrono_locale(&locale).is_ok() {
        return locale;
    }
    tracing::debug!(%locale, fallback = DEFAULT_LOCALE, "no formatting tables for host locale");
    DEFAULT_LOCALE.to_string()
}

impl<C: Clock> Calendar<C> {
    pub fn new(zone: Zone, clock: C, locale: impl Into<String>) -> Self {
        Self {
            zone,
            clock,
            locale: locale.into(),
        }
    }

    /// Build from configuration, reading unset fields from `locale_source`
    /// and the host zone. A source locale without formatting tables falls
    /// back to [`DEFAULT_LOCALE`]; a configured one is an error.
    ///
    /// # Errors
    ///
    /// [`UtilError::InvalidTimezone`] or [`UtilError::InvalidLocale`] when a
    /// configured value is unusable.
    pub fn from_config<L: LocaleSource + ?Sized>(
        config: &CalendarConfig,
        clock: C,
        locale_source: &L,
    ) -> Result<Self> {
        let zone = match &config.timezone {
            Some(name) => Zone::parse(name)?,
            None => Zone::Host,
        };
        let locale = match &config.locale {
            Some(raw) => {
                let locale = normalize_locale(raw)
                    .ok_or_else(|| UtilError::InvalidLocale(format!("'{}'", raw)))?;
                chrono_locale(&locale)?;
                locale
            }
            None => supported_user_locale(locale_source),
        };
        tracing::debug!(%zone, %locale, "calendar configured");
        Ok(Self::new(zone, clock, locale))
    }

    /// Swap the clock, keeping zone and locale.
    pub fn with_clock<D: Clock>(self, clock: D) -> Calendar<D> {
        Calendar {
            zone: self.zone,
            clock,
            locale: self.locale,
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The resolved locale identifier, e.g. `"en-US"`.
    pub fn user_locale(&self) -> &str {
        &self.locale
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn or_now(&self, timestamp: Option<Timestamp>) -> Timestamp {
        timestamp.unwrap_or_else(|| self.clock.now())
    }

    pub fn adjust_date(&self, timestamp: Option<Timestamp>, offset: &Offset) -> Result<Timestamp> {
        arithmetic::adjust_date(self.or_now(timestamp), offset, &self.zone)
    }

    pub fn readable_date(&self, timestamp: Option<Timestamp>) -> Result<String> {
        format::readable_date(self.or_now(timestamp), &self.zone, &self.locale)
    }

    pub fn format_date(
        &self,
        timestamp: Option<Timestamp>,
        options: &FormatOptions,
    ) -> Result<String> {
        format::format_date(self.or_now(timestamp), &self.zone, &self.locale, options)
    }

    pub fn start_of_day(&self, timestamp: Option<Timestamp>) -> Result<Timestamp> {
        arithmetic::start_of_day(self.or_now(timestamp), &self.zone)
    }

    pub fn end_of_day(&self, timestamp: Option<Timestamp>) -> Result<Timestamp> {
        arithmetic::end_of_day(self.or_now(timestamp), &self.zone)
    }

    pub fn start_of_week(
        &self,
        timestamp: Option<Timestamp>,
        week_starts_on: Weekday,
    ) -> Result<Timestamp> {
        arithmetic::start_of_week(self.or_now(timestamp), week_starts_on, &self.zone)
    }

    pub fn end_of_week(
        &self,
        timestamp: Option<Timestamp>,
        week_starts_on: Weekday,
    ) -> Result<Timestamp> {
        arithmetic::end_of_week(self.or_now(timestamp), week_starts_on, &self.zone)
    }

    pub fn start_of_month(&self, timestamp: Option<Timestamp>) -> Result<Timestamp> {
        arithmetic::start_of_month(self.or_now(timestamp), &self.zone)
    }

    pub fn end_of_month(&self, timestamp: Option<Timestamp>) -> Result<Timestamp> {
        arithmetic::end_of_month(self.or_now(timestamp), &self.zone)
    }

    /// Same as [`arithmetic::diff_in_days`]; kept so the facade covers every
    /// calendar operation.
    pub fn diff_in_days(&self, first: Timestamp, second: Timestamp) -> u64 {
        arithmetic::diff_in_days(first, second)
    }

    /// Same as [`arithmetic::diff_in_hours`].
    pub fn diff_in_hours(&self, first: Timestamp, second: Timestamp) -> f64 {
        arithmetic::diff_in_hours(first, second)
    }

    /// `"11:23 PM"` on today's local date.
    pub fn time_string_to_timestamp(&self, input: &str) -> Result<Timestamp> {
        timestring::time_string_to_timestamp(input, self.clock.now(), &self.zone)
    }
}
