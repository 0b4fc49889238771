//! Parsing of `"h:mm A"` clock strings such as `"11:23 PM"`.

use chrono::TimeZone;

use crate::arithmetic::shift;
use crate::error::{Result, UtilError};
use crate::timestamp::{Timestamp, MS_PER_HOUR, MS_PER_MINUTE};

/// Place a `"H:MM AM"` / `"H:MM PM"` clock time on the local date of `now`.
///
/// The string must be exactly two tokens separated by one space: a clock time
/// with one colon, and a meridiem marker (case-insensitive). Hours run 0–12
/// on a 12-hour clock, so `"12:05 AM"` is 00:05 and `"12:05 PM"` is 12:05.
/// Seconds and milliseconds of the result are zero.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use utilkit::{time_string_to_timestamp, Timestamp};
///
/// let now = Timestamp::from(Utc.with_ymd_and_hms(2023, 1, 31, 8, 15, 42).unwrap());
/// let ts = time_string_to_timestamp("11:23 PM", now, &Utc).unwrap();
/// assert_eq!(ts, Timestamp::from(Utc.with_ymd_and_hms(2023, 1, 31, 23, 23, 0).unwrap()));
/// ```
///
/// # Errors
///
/// Returns [`UtilError::MalformedTimeString`] holding the untouched input when
/// the string does not have that shape, and [`UtilError::OutOfRange`] if
/// `now` itself cannot be placed on a calendar.
pub fn time_string_to_timestamp<Z: TimeZone>(
    input: &str,
    now: Timestamp,
    tz: &Z,
) -> Result<Timestamp> {
    let (hour, minute) = parse_clock_time(input).ok_or_else(|| {
        tracing::debug!(input, "not an h:mm A time string");
        UtilError::MalformedTimeString {
            input: input.to_string(),
        }
    })?;
    shift(now, tz, |f| {
        f.time_ms = hour * MS_PER_HOUR + minute * MS_PER_MINUTE;
        Some(())
    })
}

/// Split `"H:MM AM"` into a 24-hour (hour, minute) pair.
fn parse_clock_time(input: &str) -> Option<(i64, i64)> {
    let tokens: Vec<&str> = input.split(' ').collect();
    if tokens.len() != 2 {
        return None;
    }
    let clock: Vec<&str> = tokens[0].split(':').collect();
    if clock.len() != 2 {
        return None;
    }

    let hour = parse_digits(clock[0])?;
    let minute = parse_digits(clock[1])?;
    if hour > 12 || minute > 59 {
        return None;
    }

    let hour = match tokens[1].to_ascii_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return None,
    };
    Some((hour, minute))
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
