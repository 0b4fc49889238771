use clap::{Parser, Subcommand};

/// Date arithmetic, formatting and small text/number/object helpers.
#[derive(Parser)]
#[command(
    name = "utilkit",
    version,
    about = "Date, number, string and object helpers",
    args_override_self = true
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Timezone for calendar arithmetic: "local", an IANA name or "+05:30".
    #[arg(long, global = true, env = "UTILKIT_TIMEZONE")]
    pub timezone: Option<String>,

    /// Locale for formatting, e.g. "en-US". Defaults to LC_ALL/LC_TIME/LANG.
    #[arg(long, global = true, env = "UTILKIT_LOCALE")]
    pub locale: Option<String>,

    /// Pin "now" to this timestamp (ms since the epoch).
    #[arg(long, global = true, env = "UTILKIT_NOW", allow_hyphen_values = true)]
    pub now: Option<i64>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Shift a timestamp by minutes, hours, days, months and years.
    Adjust(AdjustArgs),
    /// Render a timestamp as a locale date and time.
    Readable(AtArgs),
    /// Midnight of the local day.
    StartOfDay(AtArgs),
    /// 23:59:59.999 of the local day.
    EndOfDay(AtArgs),
    /// Midnight of the first day of the week.
    StartOfWeek(WeekArgs),
    /// 23:59:59.999 of the last day of the week.
    EndOfWeek(WeekArgs),
    /// Midnight of the first day of the month.
    StartOfMonth(AtArgs),
    /// 23:59:59.999 of the last day of the month.
    EndOfMonth(AtArgs),
    /// Whole days between two timestamps, rounded up.
    DiffDays(PairArgs),
    /// Hours from FIRST to SECOND, two decimals.
    DiffHours(PairArgs),
    /// Print the resolved locale.
    Locale,
    /// Render a timestamp with Intl-style options.
    Format(FormatArgs),
    /// Turn "11:23 PM" into a timestamp on today's date.
    ParseTime(ParseTimeArgs),
    /// Render a number as a currency amount.
    Currency(CurrencyArgs),
    /// Convert text to camelCase.
    Camel(TextArgs),
    /// Capitalize every word.
    Title(TextArgs),
    /// Print a short random token.
    Random,
    /// Print the keys of NEW that differ from BASE (both JSON objects).
    DiffObjects(DiffObjectsArgs),
}

/// A timestamp that defaults to now.
#[derive(clap::Args)]
pub struct AtArgs {
    /// Timestamp in ms since the epoch (default: now).
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<i64>,
}

#[derive(clap::Args)]
pub struct AdjustArgs {
    #[command(flatten)]
    pub at: AtArgs,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub minutes: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub hours: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub days: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub months: i64,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub years: i64,
}

#[derive(clap::Args)]
pub struct WeekArgs {
    #[command(flatten)]
    pub at: AtArgs,

    /// First day of the week: 0 = Sunday .. 6 = Saturday.
    #[arg(long, default_value_t = 1)]
    pub week_starts_on: i64,
}

#[derive(clap::Args)]
pub struct PairArgs {
    /// First timestamp (JSON number).
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// Second timestamp (JSON number).
    #[arg(allow_hyphen_values = true)]
    pub second: String,
}

#[derive(clap::Args)]
pub struct FormatArgs {
    #[command(flatten)]
    pub at: AtArgs,

    /// Options as JSON, e.g. '{"month":"long","day":"numeric"}'.
    #[arg(long, default_value = "{}")]
    pub options: String,
}

#[derive(clap::Args)]
pub struct ParseTimeArgs {
    /// Clock time such as "11:23 PM".
    pub time: String,
}

#[derive(clap::Args)]
pub struct CurrencyArgs {
    /// Amount: a number or numeric string.
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    #[arg(long, default_value = ".")]
    pub decimal: String,

    #[arg(long, default_value = ",")]
    pub separator: String,
}

#[derive(clap::Args)]
pub struct TextArgs {
    pub text: String,
}

#[derive(clap::Args)]
pub struct DiffObjectsArgs {
    /// The newer object, as JSON.
    pub new: String,

    /// The object to compare against, as JSON.
    pub base: String,
}
