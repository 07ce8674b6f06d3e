use crate::cfg::Cfg;
use clap::Parser;
use gregor::{
  calendar::{Date, DynTz, OffsetClock},
  misc::EnvVars,
};

pub(crate) fn init() -> gregor::Result<()> {
  let args = Cli::parse();
  let cfg = EnvVars::<Cfg>::from_process()?.finish();
  match args.commands {
    Commands::Add(elem) => {
      let date = Date::from_iso_8601(elem.date.as_bytes())?;
      println!("{}", date.add_calendar(elem.years, elem.months, elem.days)?);
    }
    Commands::Between(elem) => {
      let from = Date::from_iso_8601(elem.from.as_bytes())?;
      let to = Date::from_iso_8601(elem.to.as_bytes())?;
      println!("{}", to.days_between(from));
    }
    Commands::Info(elem) => {
      let date = Date::from_iso_8601(elem.date.as_bytes())?;
      println!("date: {date}");
      println!("day number: {}", date.day_number());
      println!("day of year: {}", date.day_of_year());
      println!("leap year: {}", date.is_leap_year());
      println!("weekday: {}", date.weekday().name());
    }
    Commands::Parse(elem) => {
      let layout = elem.layout.unwrap_or(cfg.layout);
      println!("{}", Date::parse(layout.as_bytes(), elem.text.as_bytes())?);
    }
    Commands::Today(elem) => {
      let utc_offset = match elem.utc_offset {
        Some(minutes) => DynTz::new(minutes)?,
        None => cfg.utc_offset,
      };
      println!("{}", Date::today(&OffsetClock(utc_offset))?);
    }
  }
  Ok(())
}

/// Inspects, shifts and parses proleptic Gregorian dates
#[derive(Debug, clap::Parser)]
#[command(author, long_about = None, name = "gregor", version)]
struct Cli {
  #[command(subcommand)]
  commands: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
  Add(Add),
  Between(Between),
  Info(Info),
  Parse(Parse),
  Today(Today),
}

/// Shifts a date by years, months and days. Overflowing days roll into the next month
#[derive(Debug, clap::Args)]
struct Add {
  /// Date formatted as YYYY-MM-DD
  #[arg()]
  date: String,
  /// Number of days
  #[arg(allow_negative_numbers = true, default_value_t = 0, short = 'd')]
  days: i64,
  /// Number of months
  #[arg(allow_negative_numbers = true, default_value_t = 0, short = 'm')]
  months: i64,
  /// Number of years
  #[arg(allow_negative_numbers = true, default_value_t = 0, short = 'y')]
  years: i64,
}

/// Signed number of days from the first date to the second one
#[derive(Debug, clap::Args)]
struct Between {
  /// Date formatted as YYYY-MM-DD
  #[arg()]
  from: String,
  /// Date formatted as YYYY-MM-DD
  #[arg()]
  to: String,
}

/// Prints the day number, the day of the year and the weekday of a date
#[derive(Debug, clap::Args)]
struct Info {
  /// Date formatted as YYYY-MM-DD
  #[arg()]
  date: String,
}

/// Parses a date using a strftime-like layout
#[derive(Debug, clap::Args)]
struct Parse {
  /// Layout such as `%d/%m/%Y`. Defaults to `GREGOR_LAYOUT` or `%Y-%m-%d`
  #[arg(short = 'l', value_name = "LAYOUT")]
  layout: Option<String>,
  /// Text to parse
  #[arg()]
  text: String,
}

/// Current date
#[derive(Debug, clap::Args)]
struct Today {
  /// Offset from UTC in minutes. Defaults to `GREGOR_UTC_OFFSET` or `0`
  #[arg(allow_negative_numbers = true, short = 'o', value_name = "MINUTES")]
  utc_offset: Option<i16>,
}
