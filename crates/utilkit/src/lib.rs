//! # utilkit
//!
//! Stateless helpers gathered into one namespace: local-calendar date
//! arithmetic and formatting, currency rendering, string casing and JSON
//! object diffs.
//!
//! Calendar functions take the instant, the zone and (where needed) the "now"
//! anchor as explicit arguments. [`Calendar`] bundles a zone, a [`Clock`] and
//! a locale for callers that want "now" as the default.
//!
//! ## Modules
//!
//! - [`arithmetic`]: offsets, day/week/month boundaries, differences
//! - [`timestring`]: `"11:23 PM"` → timestamp on today's date
//! - [`format`]: locale-aware rendering with Intl-style options
//! - [`locale`]: host locale resolution
//! - [`zone`]: runtime-selected timezone
//! - [`clock`]: injectable "now"
//! - [`calendar`]: zone + clock + locale facade
//! - [`numbers`], [`strings`], [`objects`]: peer helpers
//! - [`error`]: Error types

pub mod arithmetic;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod locale;
pub mod numbers;
pub mod objects;
pub mod strings;
pub mod timestamp;
pub mod timestring;
pub mod zone;

pub use arithmetic::{
    adjust_date, diff_in_days, diff_in_hours, diff_in_hours_values, end_of_day, end_of_month,
    end_of_week, start_of_day, start_of_month, start_of_week, week_start_from_index,
};
pub use calendar::{Calendar, CalendarConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::UtilError;
pub use format::{format_date, readable_date, FormatOptions, MonthStyle, NumericStyle, TextStyle};
pub use locale::{
    chrono_locale, get_user_locale, normalize_locale, FixedLocale, HostLocale, LocaleSource,
    DEFAULT_LOCALE,
};
pub use numbers::{is_number, to_currency, CurrencyFormat};
pub use objects::{is_empty_object, object_diffs};
pub use strings::{is_string, random_string, random_string_with, to_camel_case, to_title_case};
pub use timestamp::{Offset, Timestamp, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
pub use timestring::time_string_to_timestamp;
pub use zone::{parse_timezone, Zone};
