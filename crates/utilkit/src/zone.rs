//! Runtime choice of timezone.
//!
//! The calendar functions are generic over [`chrono::TimeZone`]. [`Zone`] is
//! the concrete zone used when the choice is only known at runtime (from
//! configuration or a command-line flag): the host zone, a named IANA zone,
//! or a fixed UTC offset.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, UtilError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's configured zone (`TZ`, `/etc/localtime`, ...).
    #[default]
    Host,
    Named(Tz),
    Fixed(FixedOffset),
}

/// Parse an IANA timezone name into a [`Tz`].
///
/// # Errors
///
/// Returns [`UtilError::InvalidTimezone`] if the name is not in the database.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| UtilError::InvalidTimezone(format!("'{}'", name)))
}

impl Zone {
    /// Accepts `"local"`/`"host"`, an IANA name (`"America/Chicago"`, `"UTC"`)
    /// or a fixed offset (`"+05:30"`).
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("local") || trimmed.eq_ignore_ascii_case("host") {
            return Ok(Zone::Host);
        }
        if let Ok(tz) = parse_timezone(trimmed) {
            return Ok(Zone::Named(tz));
        }
        trimmed
            .parse::<FixedOffset>()
            .map(Zone::Fixed)
            .map_err(|_| UtilError::InvalidTimezone(format!("'{}'", name)))
    }
}

impl FromStr for Zone {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        Zone::parse(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Host => f.write_str("local"),
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl TimeZone for Zone {
    type Offset = FixedOffset;

    fn from_offset(offset: &FixedOffset) -> Self {
        Zone::Fixed(*offset)
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        match self {
            Zone::Host => Local.offset_from_local_date(local),
            Zone::Named(tz) => tz.offset_from_local_date(local).map(|o| o.fix()),
            Zone::Fixed(offset) => LocalResult::Single(*offset),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        match self {
            Zone::Host => Local.offset_from_local_datetime(local),
            Zone::Named(tz) => tz.offset_from_local_datetime(local).map(|o| o.fix()),
            Zone::Fixed(offset) => LocalResult::Single(*offset),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        match self {
            Zone::Host => Local.offset_from_utc_date(utc),
            Zone::Named(tz) => tz.offset_from_utc_date(utc).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Host => Local.offset_from_utc_datetime(utc),
            Zone::Named(tz) => tz.offset_from_utc_datetime(utc).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::start_of_day;
    use crate::timestamp::Timestamp;

    #[test]
    fn test_parse_named_zone() {
        let zone = Zone::parse("America/Chicago").unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::America::Chicago));
        assert_eq!(zone.to_string(), "America/Chicago");
    }

    #[test]
    fn test_parse_host_zone() {
        assert_eq!(Zone::parse("local").unwrap(), Zone::Host);
        assert_eq!("HOST".parse::<Zone>().unwrap(), Zone::Host);
    }

    #[test]
    fn test_parse_fixed_offset() {
        let zone = Zone::parse("+05:30").unwrap();
        assert_eq!(zone, Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 1800).unwrap()));
    }

    #[test]
    fn test_parse_invalid_zone() {
        let err = Zone::parse("Invalid/Zone").unwrap_err().to_string();
        assert!(err.contains("Invalid timezone"), "got: {err}");
    }

    #[test]
    fn test_named_zone_tracks_dst() {
        let zone = Zone::Named(chrono_tz::America::New_York);
        let winter = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let summer = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
        assert_eq!(zone.offset_from_utc_date(&winter).local_minus_utc(), -5 * 3600);
        assert_eq!(zone.offset_from_utc_date(&summer).local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_zone_drives_calendar_arithmetic() {
        // 2023-02-01T02:00Z is Jan 31 evening in Chicago (UTC-6).
        let zone = Zone::parse("America/Chicago").unwrap();
        let start = start_of_day(Timestamp(1_675_216_800_000), &zone).unwrap();
        // 2023-01-31T06:00Z
        assert_eq!(start, Timestamp(1_675_144_800_000));
    }
}
