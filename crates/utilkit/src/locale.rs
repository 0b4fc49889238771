//! Locale resolution and per-locale date conventions.
//!
//! The host locale is read from the POSIX environment variables, normalized
//! to a BCP 47 style identifier (`en_US.UTF-8` becomes `en-US`) and mapped to
//! chrono's locale tables for month and weekday names.

use std::env;

use crate::error::{Result, UtilError};

pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment variables consulted by [`HostLocale`], highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Something that knows the user's preferred locale.
pub trait LocaleSource {
    /// A normalized identifier such as `"en-US"`, or `None` if unknown.
    fn resolved_locale(&self) -> Option<String>;
}

/// Reads `LC_ALL`, `LC_TIME` and `LANG`, in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostLocale;

impl LocaleSource for HostLocale {
    fn resolved_locale(&self) -> Option<String> {
        let raw = LOCALE_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())?;
        normalize_locale(&raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub String);

impl LocaleSource for FixedLocale {
    fn resolved_locale(&self) -> Option<String> {
        normalize_locale(&self.0)
    }
}

impl<L: LocaleSource + ?Sized> LocaleSource for &L {
    fn resolved_locale(&self) -> Option<String> {
        (**self).resolved_locale()
    }
}

/// The user's locale, or [`DEFAULT_LOCALE`] when the source has none.
pub fn get_user_locale<L: LocaleSource + ?Sized>(source: &L) -> String {
    source.resolved_locale().unwrap_or_else(|| {
        tracing::debug!(default = DEFAULT_LOCALE, "no usable locale, using default");
        DEFAULT_LOCALE.to_string()
    })
}

/// Normalize `en_US.UTF-8`, `en-us`, `de_DE@euro` and friends to `en-US`
/// style. `C` and `POSIX` carry no language and yield `None`.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }

    let mut subtags = base.split(['_', '-']);
    let language = subtags.next()?;
    if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut normalized = language.to_ascii_lowercase();
    for subtag in subtags {
        if subtag.is_empty() || !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        normalized.push('-');
        match subtag.len() {
            2 => normalized.push_str(&subtag.to_ascii_uppercase()),
            4 => {
                // Script subtag: title case (Hant, Latn).
                let (head, tail) = subtag.split_at(1);
                normalized.push_str(&head.to_ascii_uppercase());
                normalized.push_str(&tail.to_ascii_lowercase());
            }
            _ => normalized.push_str(subtag),
        }
    }
    Some(normalized)
}

/// Language and region subtags of a normalized identifier.
fn split_locale(id: &str) -> (String, Option<String>) {
    let mut subtags = id.split(['-', '_']);
    let language = subtags.next().unwrap_or_default().to_ascii_lowercase();
    let region = subtags
        .find(|s| s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        .map(|s| s.to_ascii_uppercase());
    (language, region)
}

/// Region used for a bare language when looking up locale tables.
fn default_region(language: &str) -> String {
    match language {
        "en" => "US".to_string(),
        "ja" => "JP".to_string(),
        "ko" => "KR".to_string(),
        "zh" => "CN".to_string(),
        "da" => "DK".to_string(),
        "sv" => "SE".to_string(),
        "cs" => "CZ".to_string(),
        "el" => "GR".to_string(),
        "uk" => "UA".to_string(),
        other => other.to_ascii_uppercase(),
    }
}

/// Look up chrono's locale tables for an identifier.
///
/// # Errors
///
/// Returns [`UtilError::InvalidLocale`] when no table exists.
pub fn chrono_locale(id: &str) -> Result<chrono::Locale> {
    let (language, region) = split_locale(id);
    let region = region.unwrap_or_else(|| default_region(&language));
    let posix = format!("{language}_{region}");
    chrono::Locale::try_from(posix.as_str())
        .map_err(|_| UtilError::InvalidLocale(format!("'{}'", id)))
}

/// Order of the numeric day, month and year fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// How a locale lays out dates and clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Conventions {
    pub order: DateOrder,
    pub separator: &'static str,
    /// Follows the day number when the month is spelled out (`31. Januar`).
    pub day_suffix: &'static str,
    pub hour12: bool,
}

const MONTH_FIRST_REGIONS: &[&str] = &["US", "PH", "PR", "FM", "MH", "PW", "AS", "GU", "VI", "UM"];
const TWELVE_HOUR_REGIONS: &[&str] = &["US", "CA", "AU", "NZ", "IN", "PH", "PK", "EG", "SA"];

pub(crate) fn conventions(id: &str) -> Conventions {
    let (language, region) = split_locale(id);
    let region = region.unwrap_or_else(|| default_region(&language));

    let order = match language.as_str() {
        "zh" | "ja" | "ko" | "hu" | "lt" | "sv" | "mn" => DateOrder::YearMonthDay,
        "en" if MONTH_FIRST_REGIONS.contains(&region.as_str()) => DateOrder::MonthDayYear,
        _ => DateOrder::DayMonthYear,
    };
    let separator = match (order, language.as_str()) {
        (DateOrder::YearMonthDay, "zh" | "ja") => "/",
        (DateOrder::YearMonthDay, _) => "-",
        (
            _,
            "de" | "ru" | "pl" | "cs" | "fi" | "nb" | "no" | "da" | "tr" | "uk" | "ro" | "sk",
        ) => ".",
        (_, "nl") => "-",
        _ => "/",
    };
    let day_suffix = match language.as_str() {
        "de" | "da" | "nb" | "no" | "fi" | "cs" | "sk" => ".",
        _ => "",
    };
    let hour12 = match language.as_str() {
        "en" => TWELVE_HOUR_REGIONS.contains(&region.as_str()),
        "hi" | "ar" | "bn" | "ur" => true,
        _ => false,
    };

    Conventions {
        order,
        separator,
        day_suffix,
        hour12,
    }
}
