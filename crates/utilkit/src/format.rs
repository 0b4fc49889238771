//! Locale-aware rendering of timestamps.
//!
//! [`FormatOptions`] mirrors the component options of `Intl.DateTimeFormat`
//! (`weekday`, `year`, `month`, `day`, `hour`, `minute`, `second`,
//! `hour12`, `timeZone`) and deserializes from the same JSON shape. Names of
//! months and weekdays come from chrono's locale tables; field order,
//! separators and the 12/24-hour default come from the locale's conventions.

use std::fmt::{self, Write as _};

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};
use crate::locale::{chrono_locale, conventions, Conventions, DateOrder};
use crate::timestamp::Timestamp;
use crate::zone::parse_timezone;

/// Presentation of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericStyle {
    /// `3`, `2023`
    Numeric,
    /// `03`, `23`
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// Presentation of a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    /// `Thursday`
    Long,
    /// `Thu`
    Short,
    /// `T`
    Narrow,
}

/// Presentation of the month, which can be numeric or named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    Long,
    Short,
    Narrow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatOptions {
    /// IANA zone to render in, overriding the caller's zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NumericStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<NumericStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<NumericStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<NumericStyle>,
    /// Force a 12-hour (`true`) or 24-hour (`false`) clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
}

impl FormatOptions {
    /// Numeric year, month and day.
    pub fn date() -> Self {
        Self {
            year: Some(NumericStyle::Numeric),
            month: Some(MonthStyle::Numeric),
            day: Some(NumericStyle::Numeric),
            ..Default::default()
        }
    }

    /// Numeric date plus hour, minute and second.
    pub fn date_time() -> Self {
        Self {
            hour: Some(NumericStyle::Numeric),
            minute: Some(NumericStyle::Numeric),
            second: Some(NumericStyle::Numeric),
            ..Self::date()
        }
    }

    fn has_components(&self) -> bool {
        self.weekday.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
            || self.hour.is_some()
            || self.minute.is_some()
            || self.second.is_some()
    }
}

/// Render `timestamp` per `options` in locale `locale_id`.
///
/// The instant is shown in `options.time_zone` when set, otherwise in `tz`.
/// With no date or time component selected the output is the numeric date,
/// as `Intl.DateTimeFormat` does.
///
/// ```
/// use chrono::Utc;
/// use utilkit::{format_date, FormatOptions, MonthStyle, NumericStyle, Timestamp};
///
/// let options = FormatOptions {
///     month: Some(MonthStyle::Long),
///     day: Some(NumericStyle::Numeric),
///     year: Some(NumericStyle::Numeric),
///     ..Default::default()
/// };
/// let text = format_date(Timestamp(1_675_166_400_000), &Utc, "en-US", &options).unwrap();
/// assert_eq!(text, "January 31, 2023");
/// ```
///
/// # Errors
///
/// [`UtilError::InvalidTimezone`] for an unknown `time_zone`,
/// [`UtilError::InvalidLocale`] for a locale without tables,
/// [`UtilError::OutOfRange`] for an unrepresentable timestamp and
/// [`UtilError::Formatting`] if rendering itself fails.
pub fn format_date<Z>(
    timestamp: Timestamp,
    tz: &Z,
    locale_id: &str,
    options: &FormatOptions,
) -> Result<String>
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    let locale = chrono_locale(locale_id)?;
    let conventions = conventions(locale_id);
    match &options.time_zone {
        Some(name) => {
            let zone = parse_timezone(name)?;
            Renderer::new(&timestamp.in_zone(&zone)?, locale, conventions).render(options)
        }
        None => Renderer::new(&timestamp.in_zone(tz)?, locale, conventions).render(options),
    }
}

/// Render date and time with numeric fields, like `Date.toLocaleString()`.
///
/// `"1/31/2023, 12:00:00 PM"` for `en-US`.
pub fn readable_date<Z>(timestamp: Timestamp, tz: &Z, locale_id: &str) -> Result<String>
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    format_date(timestamp, tz, locale_id, &FormatOptions::date_time())
}

struct Renderer<'a, T: TimeZone> {
    dt: &'a DateTime<T>,
    locale: chrono::Locale,
    conventions: Conventions,
}

impl<'a, T> Renderer<'a, T>
where
    T: TimeZone,
    T::Offset: fmt::Display,
{
    fn new(dt: &'a DateTime<T>, locale: chrono::Locale, conventions: Conventions) -> Self {
        Self {
            dt,
            locale,
            conventions,
        }
    }

    fn render(&self, options: &FormatOptions) -> Result<String> {
        let defaulted;
        let options = if options.has_components() {
            options
        } else {
            defaulted = FormatOptions::date();
            &defaulted
        };

        let date = self.date_part(options)?;
        let time = self.time_part(options)?;
        Ok(match (date.is_empty(), time.is_empty()) {
            (false, false) => format!("{date}, {time}"),
            (false, true) => date,
            _ => time,
        })
    }

    /// One strftime field in the locale.
    fn field(&self, pattern: &str) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self.dt.format_localized(pattern, self.locale))
            .map_err(|_| UtilError::Formatting(format!("cannot render '{pattern}'")))?;
        Ok(out)
    }

    /// First letter of a named field, upper-cased.
    fn narrow(&self, pattern: &str) -> Result<String> {
        Ok(self
            .field(pattern)?
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default())
    }

    fn date_part(&self, options: &FormatOptions) -> Result<String> {
        let weekday = match options.weekday {
            Some(TextStyle::Long) => Some(self.field("%A")?),
            Some(TextStyle::Short) => Some(self.field("%a")?),
            Some(TextStyle::Narrow) => Some(self.narrow("%A")?),
            None => None,
        };
        let year = match options.year {
            Some(NumericStyle::Numeric) => Some(self.field("%Y")?),
            Some(NumericStyle::TwoDigit) => Some(self.field("%y")?),
            None => None,
        };
        let day = match options.day {
            Some(NumericStyle::Numeric) => Some(self.field("%-d")?),
            Some(NumericStyle::TwoDigit) => Some(self.field("%d")?),
            None => None,
        };
        let (month, named_month) = match options.month {
            Some(MonthStyle::Numeric) => (Some(self.field("%-m")?), false),
            Some(MonthStyle::TwoDigit) => (Some(self.field("%m")?), false),
            Some(MonthStyle::Long) => (Some(self.field("%B")?), true),
            Some(MonthStyle::Short) => (Some(self.field("%b")?), true),
            Some(MonthStyle::Narrow) => (Some(self.narrow("%B")?), true),
            None => (None, false),
        };

        let rest = if named_month {
            self.named_date(month, day, year)
        } else {
            self.numeric_date(month, day, year)
        };
        Ok(match (weekday, rest.is_empty()) {
            (Some(weekday), false) => format!("{weekday}, {rest}"),
            (Some(weekday), true) => weekday,
            (None, _) => rest,
        })
    }

    /// `1/31/2023`, `31.1.2023`, `2023-1-31`.
    fn numeric_date(
        &self,
        month: Option<String>,
        day: Option<String>,
        year: Option<String>,
    ) -> String {
        let ordered = match self.conventions.order {
            DateOrder::MonthDayYear => [month, day, year],
            DateOrder::DayMonthYear => [day, month, year],
            DateOrder::YearMonthDay => [year, month, day],
        };
        ordered
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(self.conventions.separator)
    }

    /// `January 31, 2023`, `31 janvier 2023`, `31. Januar 2023`,
    /// `2023 January 31`.
    fn named_date(
        &self,
        month: Option<String>,
        day: Option<String>,
        year: Option<String>,
    ) -> String {
        match self.conventions.order {
            DateOrder::MonthDayYear => {
                let month_day = [month, day].into_iter().flatten().collect::<Vec<_>>().join(" ");
                match year {
                    Some(year) if month_day.is_empty() => year,
                    Some(year) => format!("{month_day}, {year}"),
                    None => month_day,
                }
            }
            DateOrder::DayMonthYear => {
                let day = day.map(|d| d + self.conventions.day_suffix);
                [day, month, year]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            DateOrder::YearMonthDay => [year, month, day]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    fn time_part(&self, options: &FormatOptions) -> Result<String> {
        let hour12 = options.hour12.unwrap_or(self.conventions.hour12);
        let mut fields = Vec::new();

        if let Some(style) = options.hour {
            let pattern = match (hour12, style) {
                (true, NumericStyle::Numeric) => "%-I",
                (true, NumericStyle::TwoDigit) => "%I",
                (false, NumericStyle::Numeric) => "%-H",
                (false, NumericStyle::TwoDigit) => "%H",
            };
            fields.push(self.field(pattern)?);
        }
        // Minutes and seconds following another clock field are always padded.
        if let Some(style) = options.minute {
            let padded = !fields.is_empty() || style == NumericStyle::TwoDigit;
            fields.push(self.field(if padded { "%M" } else { "%-M" })?);
        }
        if let Some(style) = options.second {
            let padded = !fields.is_empty() || style == NumericStyle::TwoDigit;
            fields.push(self.field(if padded { "%S" } else { "%-S" })?);
        }
        if fields.is_empty() {
            return Ok(String::new());
        }

        let mut time = fields.join(":");
        if hour12 && options.hour.is_some() {
            time.push(' ');
            time.push_str(&self.meridiem()?);
        }
        Ok(time)
    }

    /// The locale's AM/PM marker, falling back to `AM`/`PM` for locales
    /// whose tables leave it empty.
    fn meridiem(&self) -> Result<String> {
        let marker = self.field("%p")?;
        if !marker.is_empty() {
            return Ok(marker);
        }
        Ok(if self.dt.hour() < 12 { "AM" } else { "PM" }.to_string())
    }
}
