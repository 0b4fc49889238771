use anyhow::{Context, Result};
use tracing::{debug, info};
use utilkit::{
    diff_in_days, diff_in_hours_values, week_start_from_index, Calendar, CalendarConfig, Clock,
    FixedClock, FormatOptions, HostLocale, Offset, SystemClock, Timestamp,
};

use crate::cli::{AdjustArgs, AtArgs, FormatArgs, PairArgs, ParseTimeArgs, WeekArgs};
use crate::value_cmd::loose_json;

/// Global flags that shape the calendar.
pub struct Settings {
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub now: Option<i64>,
}

/// "Now" is read once per invocation so every default in a command agrees.
fn calendar(settings: &Settings) -> Result<Calendar<FixedClock>> {
    let now = match settings.now {
        Some(ms) => Timestamp(ms),
        None => SystemClock.now(),
    };
    let config = CalendarConfig {
        timezone: settings.timezone.clone(),
        locale: settings.locale.clone(),
    };
    let cal = Calendar::from_config(&config, FixedClock(now), &HostLocale)
        .context("invalid calendar settings")?;
    debug!(zone = %cal.zone(), locale = cal.user_locale(), %now, "calendar ready");
    Ok(cal)
}

fn at(args: &AtArgs) -> Option<Timestamp> {
    args.at.map(Timestamp)
}

pub fn adjust(settings: &Settings, args: AdjustArgs) -> Result<()> {
    let offset = Offset {
        minutes: args.minutes,
        hours: args.hours,
        days: args.days,
        months: args.months,
        years: args.years,
    };
    let cal = calendar(settings)?;
    let adjusted = cal.adjust_date(at(&args.at), &offset)?;
    info!(?offset, %adjusted, "adjusted");
    println!("{adjusted}");
    Ok(())
}

pub fn readable(settings: &Settings, args: AtArgs) -> Result<()> {
    println!("{}", calendar(settings)?.readable_date(at(&args))?);
    Ok(())
}

pub fn start_of_day(settings: &Settings, args: AtArgs) -> Result<()> {
    println!("{}", calendar(settings)?.start_of_day(at(&args))?);
    Ok(())
}

pub fn end_of_day(settings: &Settings, args: AtArgs) -> Result<()> {
    println!("{}", calendar(settings)?.end_of_day(at(&args))?);
    Ok(())
}

pub fn start_of_week(settings: &Settings, args: WeekArgs) -> Result<()> {
    let weekday = week_start_from_index(args.week_starts_on)?;
    println!("{}", calendar(settings)?.start_of_week(at(&args.at), weekday)?);
    Ok(())
}

pub fn end_of_week(settings: &Settings, args: WeekArgs) -> Result<()> {
    let weekday = week_start_from_index(args.week_starts_on)?;
    println!("{}", calendar(settings)?.end_of_week(at(&args.at), weekday)?);
    Ok(())
}

pub fn start_of_month(settings: &Settings, args: AtArgs) -> Result<()> {
    println!("{}", calendar(settings)?.start_of_month(at(&args))?);
    Ok(())
}

pub fn end_of_month(settings: &Settings, args: AtArgs) -> Result<()> {
    println!("{}", calendar(settings)?.end_of_month(at(&args))?);
    Ok(())
}

pub fn diff_days(args: PairArgs) -> Result<()> {
    let first = parse_timestamp(&args.first)?;
    let second = parse_timestamp(&args.second)?;
    println!("{}", diff_in_days(first, second));
    Ok(())
}

pub fn diff_hours(args: PairArgs) -> Result<()> {
    let hours = diff_in_hours_values(&loose_json(&args.first), &loose_json(&args.second))?;
    println!("{hours}");
    Ok(())
}

pub fn locale(settings: &Settings) -> Result<()> {
    println!("{}", calendar(settings)?.user_locale());
    Ok(())
}

pub fn format(settings: &Settings, args: FormatArgs) -> Result<()> {
    let options: FormatOptions =
        serde_json::from_str(&args.options).context("invalid --options JSON")?;
    println!("{}", calendar(settings)?.format_date(at(&args.at), &options)?);
    Ok(())
}

pub fn parse_time(settings: &Settings, args: ParseTimeArgs) -> Result<()> {
    println!("{}", calendar(settings)?.time_string_to_timestamp(&args.time)?);
    Ok(())
}

fn parse_timestamp(raw: &str) -> Result<Timestamp> {
    raw.trim()
        .parse::<i64>()
        .map(Timestamp)
        .with_context(|| format!("expected a timestamp in milliseconds, got '{raw}'"))
}
