//! Local-calendar date arithmetic.
//!
//! Every function takes its inputs explicitly: the instant, the zone whose
//! calendar is used, and (where needed) the "now" anchor. Nothing here reads
//! the system clock, so results are reproducible for a given zone.
//!
//! # How arithmetic works
//!
//! An instant is decomposed into wall-clock fields in the zone (year, month,
//! day, millisecond of day). One field is edited, possibly past its natural
//! range, and the fields are normalized the way the proleptic Gregorian
//! calendar does it: day 0 is the last day of the previous month, month 12 is
//! January of the next year, 25:00 is 01:00 on the next day. The normalized
//! wall-clock value is then mapped back to an instant.
//!
//! This is why adding one month to January 31 yields March 3 (or March 2 in a
//! leap year): February 31 overflows into March.
//!
//! # DST
//!
//! A wall-clock value that falls in a spring-forward gap is read with the
//! offset in force before the gap (02:30 becomes 03:30). An ambiguous value
//! in a fall-back overlap resolves to the earlier instant.

use chrono::{
    Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
    Weekday,
};
// `Offset::fix` only; the name `Offset` belongs to our delta type.
use chrono::Offset as _;
use serde_json::Value;

use crate::error::{Result, UtilError};
use crate::timestamp::{Offset, Timestamp, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Millisecond of day for 23:59:59.999.
const LAST_MS_OF_DAY: i64 = MS_PER_DAY - 1;

// ── Wall-clock fields ───────────────────────────────────────────────────────

/// Wall-clock fields of an instant in a zone.
///
/// Fields may be pushed outside their natural range before [`resolve`]
/// normalizes them.
///
/// [`resolve`]: LocalFields::resolve
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocalFields {
    pub year: i64,
    /// 0 = January.
    pub month0: i64,
    /// 1-based day of month.
    pub day: i64,
    pub time_ms: i64,
    pub weekday: Weekday,
}

impl LocalFields {
    pub fn of<Z: TimeZone>(timestamp: Timestamp, tz: &Z) -> Result<Self> {
        let local = timestamp.in_zone(tz)?.naive_local();
        let time = local.time();
        Ok(Self {
            year: i64::from(local.year()),
            month0: i64::from(local.month0()),
            day: i64::from(local.day()),
            time_ms: i64::from(time.num_seconds_from_midnight()) * MS_PER_SECOND
                + i64::from(time.nanosecond() / 1_000_000),
            weekday: local.weekday(),
        })
    }

    fn to_naive(self) -> Option<NaiveDateTime> {
        let year = self.year.checked_add(self.month0.div_euclid(12))?;
        let month = u32::try_from(self.month0.rem_euclid(12)).ok()? + 1;
        let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
        let date = first.checked_add_signed(Duration::try_days(self.day.checked_sub(1)?)?)?;
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(Duration::try_milliseconds(self.time_ms)?)
    }

    pub fn resolve<Z: TimeZone>(self, tz: &Z) -> Result<Timestamp> {
        let naive = self.to_naive().ok_or_else(|| {
            UtilError::OutOfRange(format!(
                "local date {}-{}-{} +{}ms",
                self.year,
                self.month0 + 1,
                self.day,
                self.time_ms
            ))
        })?;
        resolve_wall_clock(&naive, tz)
    }
}

/// Map a wall-clock value in `tz` to an instant.
fn resolve_wall_clock<Z: TimeZone>(naive: &NaiveDateTime, tz: &Z) -> Result<Timestamp> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt.into()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.into()),
        LocalResult::None => {
            let out_of_range = || UtilError::OutOfRange(format!("local time {naive}"));
            let probe = naive
                .checked_sub_signed(Duration::days(1))
                .ok_or_else(out_of_range)?;
            let before = tz.offset_from_utc_datetime(&probe).fix();
            let utc = naive
                .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
                .ok_or_else(out_of_range)?;
            tracing::trace!(%naive, offset = %before, "wall-clock time falls in a DST gap");
            Ok(Timestamp(utc.and_utc().timestamp_millis()))
        }
    }
}

/// Decompose `timestamp` in `tz`, let `edit` change the fields, and map the
/// result back to an instant. `edit` returns `None` on integer overflow.
pub(crate) fn shift<Z, F>(timestamp: Timestamp, tz: &Z, edit: F) -> Result<Timestamp>
where
    Z: TimeZone,
    F: FnOnce(&mut LocalFields) -> Option<()>,
{
    let mut fields = LocalFields::of(timestamp, tz)?;
    edit(&mut fields)
        .ok_or_else(|| UtilError::OutOfRange(format!("adjusting timestamp {timestamp}")))?;
    fields.resolve(tz)
}

// ── adjust_date ─────────────────────────────────────────────────────────────

/// Shift a timestamp by calendar units in the local calendar of `tz`.
///
/// Non-zero fields of `offset` apply one after another in the order minutes,
/// hours, days, months, years. Each step works on wall-clock fields, so
/// overflowing days roll into the next month:
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use utilkit::{adjust_date, Offset, Timestamp};
///
/// let jan31 = Timestamp::from(Utc.with_ymd_and_hms(2023, 1, 31, 12, 0, 0).unwrap());
/// let result = adjust_date(jan31, &Offset::months(1), &Utc).unwrap();
/// assert_eq!(result, Timestamp::from(Utc.with_ymd_and_hms(2023, 3, 3, 12, 0, 0).unwrap()));
/// ```
///
/// # Errors
///
/// Returns [`UtilError::OutOfRange`] if an intermediate or final value leaves
/// the representable calendar range.
pub fn adjust_date<Z: TimeZone>(
    timestamp: Timestamp,
    offset: &Offset,
    tz: &Z,
) -> Result<Timestamp> {
    let mut current = timestamp;
    if offset.minutes != 0 {
        current = shift(current, tz, |f| {
            f.time_ms = f.time_ms.checked_add(offset.minutes.checked_mul(MS_PER_MINUTE)?)?;
            Some(())
        })?;
    }
    if offset.hours != 0 {
        current = shift(current, tz, |f| {
            f.time_ms = f.time_ms.checked_add(offset.hours.checked_mul(MS_PER_HOUR)?)?;
            Some(())
        })?;
    }
    if offset.days != 0 {
        current = shift(current, tz, |f| {
            f.day = f.day.checked_add(offset.days)?;
            Some(())
        })?;
    }
    if offset.months != 0 {
        current = shift(current, tz, |f| {
            f.month0 = f.month0.checked_add(offset.months)?;
            Some(())
        })?;
    }
    if offset.years != 0 {
        current = shift(current, tz, |f| {
            f.year = f.year.checked_add(offset.years)?;
            Some(())
        })?;
    }
    Ok(current)
}

// ── Day, week and month boundaries ──────────────────────────────────────────

/// Midnight (00:00:00.000) of the local day containing `timestamp`.
pub fn start_of_day<Z: TimeZone>(timestamp: Timestamp, tz: &Z) -> Result<Timestamp> {
    shift(timestamp, tz, |f| {
        f.time_ms = 0;
        Some(())
    })
}

/// 23:59:59.999 of the local day containing `timestamp`.
pub fn end_of_day<Z: TimeZone>(timestamp: Timestamp, tz: &Z) -> Result<Timestamp> {
    shift(timestamp, tz, |f| {
        f.time_ms = LAST_MS_OF_DAY;
        Some(())
    })
}

/// Convert a weekday index (0 = Sunday .. 6 = Saturday) into a [`Weekday`].
///
/// # Errors
///
/// Returns [`UtilError::InvalidWeekStart`] for any index outside `0..=6`.
pub fn week_start_from_index(index: i64) -> Result<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(UtilError::InvalidWeekStart(other)),
    }
}

/// How many days `weekday` is past the first day of its week.
fn days_since_week_start(weekday: Weekday, week_starts_on: Weekday) -> i64 {
    i64::from((weekday.num_days_from_sunday() + 7 - week_starts_on.num_days_from_sunday()) % 7)
}

/// Midnight of the first day of the week containing `timestamp`.
///
/// `week_starts_on` picks the first day of the week; the usual default is
/// [`Weekday::Mon`].
pub fn start_of_week<Z: TimeZone>(
    timestamp: Timestamp,
    week_starts_on: Weekday,
    tz: &Z,
) -> Result<Timestamp> {
    shift(timestamp, tz, |f| {
        f.day -= days_since_week_start(f.weekday, week_starts_on);
        f.time_ms = 0;
        Some(())
    })
}

/// 23:59:59.999 of the last day of the week containing `timestamp`, six days
/// after the day [`start_of_week`] returns.
pub fn end_of_week<Z: TimeZone>(
    timestamp: Timestamp,
    week_starts_on: Weekday,
    tz: &Z,
) -> Result<Timestamp> {
    shift(timestamp, tz, |f| {
        f.day += 6 - days_since_week_start(f.weekday, week_starts_on);
        f.time_ms = LAST_MS_OF_DAY;
        Some(())
    })
}

/// Midnight of day 1 of the local month containing `timestamp`.
pub fn start_of_month<Z: TimeZone>(timestamp: Timestamp, tz: &Z) -> Result<Timestamp> {
    shift(timestamp, tz, |f| {
        f.day = 1;
        f.time_ms = 0;
        Some(())
    })
}

/// 23:59:59.999 of the last day of the local month containing `timestamp`.
pub fn end_of_month<Z: TimeZone>(timestamp: Timestamp, tz: &Z) -> Result<Timestamp> {
    shift(timestamp, tz, |f| {
        // Day 0 of the next month is the last day of this one.
        f.month0 += 1;
        f.day = 0;
        f.time_ms = LAST_MS_OF_DAY;
        Some(())
    })
}

// ── Differences ─────────────────────────────────────────────────────────────

/// Whole days between two instants, rounded up. Symmetric in its arguments.
pub fn diff_in_days(first: Timestamp, second: Timestamp) -> u64 {
    first.0.abs_diff(second.0).div_ceil(MS_PER_DAY.unsigned_abs())
}

/// Hours from `first` to `second` (`second - first`), rounded to two decimals.
pub fn diff_in_hours(first: Timestamp, second: Timestamp) -> f64 {
    let diff = i128::from(second.0) - i128::from(first.0);
    round_hundredths(diff as f64 / MS_PER_HOUR as f64)
}

/// [`diff_in_hours`] over loosely typed values, such as decoded JSON.
///
/// Any JSON number is accepted, including fractional milliseconds.
///
/// # Errors
///
/// Returns [`UtilError::NotATimestamp`] if either value is not a number.
pub fn diff_in_hours_values(first: &Value, second: &Value) -> Result<f64> {
    let first = numeric_timestamp(first)?;
    let second = numeric_timestamp(second)?;
    Ok(round_hundredths((second - first) / MS_PER_HOUR as f64))
}

fn numeric_timestamp(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        tracing::debug!(%value, "rejecting non-numeric timestamp");
        UtilError::NotATimestamp(value.to_string())
    })
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use chrono_tz::America::New_York;
    use proptest::prelude::*;
    use serde_json::json;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    fn at<Z: TimeZone>(tz: &Z, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
        Timestamp::from(tz.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap())
    }

    fn plus_ms(ts: Timestamp, ms: i64) -> Timestamp {
        Timestamp(ts.0 + ms)
    }

    // ── adjust_date tests ───────────────────────────────────────────────

    #[test]
    fn test_adjust_month_rolls_over_february() {
        let result = adjust_date(utc(2023, 1, 31, 12, 0, 0), &Offset::months(1), &Utc).unwrap();
        assert_eq!(result, utc(2023, 3, 3, 12, 0, 0));
    }

    #[test]
    fn test_adjust_month_rolls_over_leap_february() {
        let result = adjust_date(utc(2024, 1, 31, 12, 0, 0), &Offset::months(1), &Utc).unwrap();
        assert_eq!(result, utc(2024, 3, 2, 12, 0, 0));
    }

    #[test]
    fn test_adjust_negative_months_cross_year() {
        let result = adjust_date(utc(2023, 2, 15, 8, 0, 0), &Offset::months(-3), &Utc).unwrap();
        assert_eq!(result, utc(2022, 11, 15, 8, 0, 0));
    }

    #[test]
    fn test_adjust_year_from_leap_day() {
        let result = adjust_date(utc(2024, 2, 29, 0, 0, 0), &Offset::years(1), &Utc).unwrap();
        assert_eq!(result, utc(2025, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_adjust_minutes_roll_into_next_day() {
        let result = adjust_date(utc(2023, 12, 31, 23, 50, 0), &Offset::minutes(15), &Utc).unwrap();
        assert_eq!(result, utc(2024, 1, 1, 0, 5, 0));
    }

    #[test]
    fn test_adjust_applies_fields_in_order() {
        // Days first (Jan 30 -> Jan 31), then months (Jan 31 -> Feb 31 -> Mar 3).
        let offset = Offset {
            days: 1,
            months: 1,
            ..Default::default()
        };
        let result = adjust_date(utc(2023, 1, 30, 0, 0, 0), &offset, &Utc).unwrap();
        assert_eq!(result, utc(2023, 3, 3, 0, 0, 0));
    }

    #[test]
    fn test_adjust_combined_offset() {
        let offset = Offset {
            minutes: 30,
            hours: -2,
            days: 3,
            months: 0,
            years: 1,
        };
        let result = adjust_date(utc(2023, 6, 10, 12, 0, 0), &offset, &Utc).unwrap();
        assert_eq!(result, utc(2024, 6, 13, 10, 30, 0));
    }

    #[test]
    fn test_adjust_zero_offset_is_identity() {
        let ts = Timestamp(1_675_166_400_123);
        assert_eq!(adjust_date(ts, &Offset::default(), &Utc).unwrap(), ts);
    }

    #[test]
    fn test_adjust_uses_local_calendar() {
        // 23:00 on Jan 31 at UTC+05:00 is still January locally; one month later
        // lands on local Mar 3.
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let start = at(&tz, 2023, 1, 31, 23, 0, 0);
        let result = adjust_date(start, &Offset::months(1), &tz).unwrap();
        assert_eq!(result, at(&tz, 2023, 3, 3, 23, 0, 0));
    }

    #[test]
    fn test_adjust_day_across_dst_keeps_wall_clock() {
        // March 8 2026: US spring forward. +1 day keeps 10:00 local.
        let start = at(&New_York, 2026, 3, 7, 10, 0, 0);
        let result = adjust_date(start, &Offset::days(1), &New_York).unwrap();
        assert_eq!(result, at(&New_York, 2026, 3, 8, 10, 0, 0));
        assert_eq!(result.0 - start.0, 23 * MS_PER_HOUR);
    }

    #[test]
    fn test_adjust_into_dst_gap_moves_forward() {
        // 01:30 EST + 1h wall-clock = 02:30, which does not exist; read as 03:30 EDT.
        let start = at(&New_York, 2026, 3, 8, 1, 30, 0);
        let result = adjust_date(start, &Offset::hours(1), &New_York).unwrap();
        assert_eq!(result, at(&New_York, 2026, 3, 8, 3, 30, 0));
        assert_eq!(result.0 - start.0, MS_PER_HOUR);
    }

    #[test]
    fn test_adjust_into_ambiguous_hour_takes_earlier() {
        // Nov 1 2026: 01:30 happens twice in New York. Day arithmetic from Oct 31
        // lands on the first (EDT) occurrence.
        let start = at(&New_York, 2026, 10, 31, 1, 30, 0);
        let result = adjust_date(start, &Offset::days(1), &New_York).unwrap();
        assert_eq!(result, utc(2026, 11, 1, 5, 30, 0));
    }

    #[test]
    fn test_adjust_out_of_range_is_error() {
        let result = adjust_date(utc(2023, 1, 1, 0, 0, 0), &Offset::years(1_000_000), &Utc);
        assert!(matches!(result, Err(UtilError::OutOfRange(_))), "got: {result:?}");
    }

    #[test]
    fn test_adjust_overflowing_offset_is_error() {
        let result = adjust_date(Timestamp(0), &Offset::minutes(i64::MAX), &Utc);
        assert!(matches!(result, Err(UtilError::OutOfRange(_))), "got: {result:?}");
    }

    // ── Day boundary tests ──────────────────────────────────────────────

    #[test]
    fn test_start_and_end_of_day() {
        let ts = plus_ms(utc(2023, 1, 31, 12, 34, 56), 789);
        assert_eq!(start_of_day(ts, &Utc).unwrap(), utc(2023, 1, 31, 0, 0, 0));
        assert_eq!(
            end_of_day(ts, &Utc).unwrap(),
            plus_ms(utc(2023, 1, 31, 23, 59, 59), 999)
        );
    }

    #[test]
    fn test_start_of_day_in_offset_zone() {
        // 02:00 UTC is still the previous evening in UTC-05:00.
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let ts = utc(2023, 2, 1, 2, 0, 0);
        assert_eq!(start_of_day(ts, &tz).unwrap(), at(&tz, 2023, 1, 31, 0, 0, 0));
    }

    #[test]
    fn test_day_on_spring_forward_is_23_hours() {
        let ts = at(&New_York, 2026, 3, 8, 12, 0, 0);
        let start = start_of_day(ts, &New_York).unwrap();
        let end = end_of_day(ts, &New_York).unwrap();
        assert_eq!(end.0 - start.0, LAST_MS_OF_DAY - MS_PER_HOUR);
    }

    // ── Week boundary tests ─────────────────────────────────────────────

    #[test]
    fn test_start_of_week_monday() {
        // Feb 1 2023 is a Wednesday.
        let wednesday = utc(2023, 2, 1, 15, 0, 0);
        assert_eq!(
            start_of_week(wednesday, Weekday::Mon, &Utc).unwrap(),
            utc(2023, 1, 30, 0, 0, 0)
        );
    }

    #[test]
    fn test_start_of_week_sunday() {
        let wednesday = utc(2023, 2, 1, 15, 0, 0);
        assert_eq!(
            start_of_week(wednesday, Weekday::Sun, &Utc).unwrap(),
            utc(2023, 1, 29, 0, 0, 0)
        );
    }

    #[test]
    fn test_start_of_week_on_sunday_with_monday_start() {
        // Sunday belongs to the week that began the previous Monday.
        let sunday = utc(2023, 2, 5, 9, 0, 0);
        assert_eq!(
            start_of_week(sunday, Weekday::Mon, &Utc).unwrap(),
            utc(2023, 1, 30, 0, 0, 0)
        );
    }

    #[test]
    fn test_start_of_week_on_start_day_is_same_day() {
        let monday = utc(2023, 1, 30, 18, 0, 0);
        assert_eq!(
            start_of_week(monday, Weekday::Mon, &Utc).unwrap(),
            utc(2023, 1, 30, 0, 0, 0)
        );
    }

    #[test]
    fn test_end_of_week_monday() {
        let wednesday = utc(2023, 2, 1, 15, 0, 0);
        assert_eq!(
            end_of_week(wednesday, Weekday::Mon, &Utc).unwrap(),
            plus_ms(utc(2023, 2, 5, 23, 59, 59), 999)
        );
    }

    #[test]
    fn test_end_of_week_saturday_start_crosses_month() {
        let wednesday = utc(2023, 2, 1, 15, 0, 0);
        // Week Sat Jan 28 .. Fri Feb 3.
        assert_eq!(
            start_of_week(wednesday, Weekday::Sat, &Utc).unwrap(),
            utc(2023, 1, 28, 0, 0, 0)
        );
        assert_eq!(
            end_of_week(wednesday, Weekday::Sat, &Utc).unwrap(),
            plus_ms(utc(2023, 2, 3, 23, 59, 59), 999)
        );
    }

    #[test]
    fn test_week_start_from_index() {
        assert_eq!(week_start_from_index(0).unwrap(), Weekday::Sun);
        assert_eq!(week_start_from_index(1).unwrap(), Weekday::Mon);
        assert_eq!(week_start_from_index(6).unwrap(), Weekday::Sat);
        assert_eq!(
            week_start_from_index(7).unwrap_err(),
            UtilError::InvalidWeekStart(7)
        );
        assert!(week_start_from_index(-1).is_err());
    }

    // ── Month boundary tests ────────────────────────────────────────────

    #[test]
    fn test_start_of_month() {
        let ts = utc(2023, 1, 31, 12, 0, 0);
        assert_eq!(start_of_month(ts, &Utc).unwrap(), utc(2023, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_end_of_month_from_31st() {
        let ts = utc(2023, 1, 31, 12, 0, 0);
        assert_eq!(
            end_of_month(ts, &Utc).unwrap(),
            plus_ms(utc(2023, 1, 31, 23, 59, 59), 999)
        );
    }

    #[test]
    fn test_end_of_month_leap_february() {
        let ts = utc(2024, 2, 10, 0, 0, 0);
        assert_eq!(
            end_of_month(ts, &Utc).unwrap(),
            plus_ms(utc(2024, 2, 29, 23, 59, 59), 999)
        );
    }

    #[test]
    fn test_end_of_month_december() {
        let ts = utc(2023, 12, 5, 0, 0, 0);
        assert_eq!(
            end_of_month(ts, &Utc).unwrap(),
            plus_ms(utc(2023, 12, 31, 23, 59, 59), 999)
        );
    }

    // ── Difference tests ────────────────────────────────────────────────

    #[test]
    fn test_diff_in_days_rounds_up() {
        let a = utc(2023, 1, 1, 0, 0, 0);
        assert_eq!(diff_in_days(a, utc(2023, 1, 1, 0, 0, 0)), 0);
        assert_eq!(diff_in_days(a, plus_ms(a, 1)), 1);
        assert_eq!(diff_in_days(a, utc(2023, 1, 3, 0, 0, 0)), 2);
        assert_eq!(diff_in_days(a, utc(2023, 1, 3, 0, 0, 1)), 3);
    }

    #[test]
    fn test_diff_in_days_extreme_values() {
        assert_eq!(
            diff_in_days(Timestamp(i64::MIN), Timestamp(i64::MAX)),
            u64::MAX.div_ceil(MS_PER_DAY as u64)
        );
    }

    #[test]
    fn test_diff_in_hours_signed() {
        let a = utc(2023, 1, 1, 0, 0, 0);
        let b = utc(2023, 1, 1, 1, 30, 0);
        assert_eq!(diff_in_hours(a, b), 1.5);
        assert_eq!(diff_in_hours(b, a), -1.5);
    }

    #[test]
    fn test_diff_in_hours_rounds_to_two_decimals() {
        let a = Timestamp(0);
        // 20 minutes = 0.3333... hours
        assert_eq!(diff_in_hours(a, Timestamp(20 * MS_PER_MINUTE)), 0.33);
        // 40 minutes = 0.6666... hours
        assert_eq!(diff_in_hours(a, Timestamp(40 * MS_PER_MINUTE)), 0.67);
    }

    #[test]
    fn test_diff_in_hours_values_numbers() {
        let result = diff_in_hours_values(&json!(0), &json!(5_400_000)).unwrap();
        assert_eq!(result, 1.5);
        let fractional = diff_in_hours_values(&json!(0.5), &json!(3_600_000.5)).unwrap();
        assert_eq!(fractional, 1.0);
    }

    #[test]
    fn test_diff_in_hours_values_rejects_non_numbers() {
        let err = diff_in_hours_values(&json!("x"), &json!(5)).unwrap_err();
        assert_eq!(err, UtilError::NotATimestamp("\"x\"".to_string()));
        assert!(diff_in_hours_values(&json!(5), &json!(null)).is_err());
        assert!(diff_in_hours_values(&json!([1]), &json!(5)).is_err());
    }

    // ── Properties ──────────────────────────────────────────────────────

    // Roughly years 1653 to 2286.
    const RANGE: std::ops::Range<i64> = -10_000_000_000_000..10_000_000_000_000;

    fn fixed_zone(offset_minutes: i32) -> FixedOffset {
        FixedOffset::east_opt(offset_minutes * 60).unwrap()
    }

    proptest! {
        #[test]
        fn prop_day_bounds_contain_timestamp(ms in RANGE, off in -720i32..=840) {
            let tz = fixed_zone(off);
            let ts = Timestamp(ms);
            let start = start_of_day(ts, &tz).unwrap();
            let end = end_of_day(ts, &tz).unwrap();
            prop_assert!(start <= ts && ts <= end);
            prop_assert_eq!(end.0 - start.0, 86_399_999);
        }

        #[test]
        fn prop_week_spans_seven_days(ms in RANGE, off in -720i32..=840, w in 0i64..7) {
            let tz = fixed_zone(off);
            let ts = Timestamp(ms);
            let week_start = week_start_from_index(w).unwrap();
            let start = start_of_week(ts, week_start, &tz).unwrap();
            let end = end_of_week(ts, week_start, &tz).unwrap();
            prop_assert!(start <= ts && ts <= end);
            prop_assert_eq!(end.0 - start.0, 604_799_999);
            prop_assert_eq!(start.in_zone(&tz).unwrap().weekday(), week_start);
        }

        #[test]
        fn prop_month_bounds(ms in RANGE, off in -720i32..=840) {
            let tz = fixed_zone(off);
            let ts = Timestamp(ms);
            let start = start_of_month(ts, &tz).unwrap().in_zone(&tz).unwrap();
            let end = end_of_month(ts, &tz).unwrap().in_zone(&tz).unwrap();
            let local = ts.in_zone(&tz).unwrap();
            prop_assert_eq!(start.day(), 1);
            prop_assert_eq!(start.month(), local.month());
            prop_assert_eq!(end.month(), local.month());
            prop_assert_eq!(end.date_naive().succ_opt().unwrap().day(), 1);
            prop_assert_eq!(
                (end.hour(), end.minute(), end.second(), end.timestamp_subsec_millis()),
                (23, 59, 59, 999)
            );
        }

        #[test]
        fn prop_diff_in_days_symmetric(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(
                diff_in_days(Timestamp(a), Timestamp(b)),
                diff_in_days(Timestamp(b), Timestamp(a))
            );
        }

        #[test]
        fn prop_diff_in_hours_antisymmetric(a in RANGE, b in RANGE) {
            let forward = diff_in_hours(Timestamp(a), Timestamp(b));
            let backward = diff_in_hours(Timestamp(b), Timestamp(a));
            prop_assert!((forward + backward).abs() < 0.011);
        }
    }
}
