mod calendar_cmd;
mod cli;
mod logging;
mod value_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::calendar_cmd::Settings;
use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings {
        timezone: cli.timezone,
        locale: cli.locale,
        now: cli.now,
    };
    if let Err(e) = run(cli.command, &settings) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Adjust(args) => calendar_cmd::adjust(settings, args),
        Command::Readable(args) => calendar_cmd::readable(settings, args),
        Command::StartOfDay(args) => calendar_cmd::start_of_day(settings, args),
        Command::EndOfDay(args) => calendar_cmd::end_of_day(settings, args),
        Command::StartOfWeek(args) => calendar_cmd::start_of_week(settings, args),
        Command::EndOfWeek(args) => calendar_cmd::end_of_week(settings, args),
        Command::StartOfMonth(args) => calendar_cmd::start_of_month(settings, args),
        Command::EndOfMonth(args) => calendar_cmd::end_of_month(settings, args),
        Command::DiffDays(args) => calendar_cmd::diff_days(args),
        Command::DiffHours(args) => calendar_cmd::diff_hours(args),
        Command::Locale => calendar_cmd::locale(settings),
        Command::Format(args) => calendar_cmd::format(settings, args),
        Command::ParseTime(args) => calendar_cmd::parse_time(settings, args),
        Command::Currency(args) => value_cmd::currency(args),
        Command::Camel(args) => value_cmd::camel(args),
        Command::Title(args) => value_cmd::title(args),
        Command::Random => value_cmd::random(),
        Command::DiffObjects(args) => value_cmd::diff_objects(args),
    }
}
