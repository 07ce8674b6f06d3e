//! Proleptic Gregorian dates, clock times and the collaborators around them.

mod calendar_error;
mod clock;
mod date;
mod date_time;
pub mod day_number;
mod format;
mod misc;
mod month;
mod time;
mod time_zone;
#[cfg(feature = "_tracing-tree")]
mod tracing_tree_timer;
mod weekday;

pub use calendar_error::CalendarError;
pub use clock::*;
pub use date::Date;
pub use date_time::DateTime;
pub use format::{MAX_TOKENS, calendar_token::CalendarToken, parse_bytes_into_tokens};
pub use month::Month;
pub use time::Time;
pub use time_zone::*;
#[cfg(feature = "_tracing-tree")]
pub use tracing_tree_timer::TracingTreeTimer;
pub use weekday::Weekday;

pub(crate) const DAYS_PER_4_YEARS: u16 = 1_461;
pub(crate) const DAYS_PER_CENTURY: u32 = 36_524;
pub(crate) const DAYS_PER_NON_LEAP_YEAR: u16 = 365;
pub(crate) const DAYS_PER_QUADCENTURY: u32 = 146_097;
/// Day number of the UNIX epoch (1970-01-01).
pub(crate) const EPOCH_DAY_NUMBER: i64 = 719_162;
/// Day number of 9999-12-31.
pub(crate) const MAX_DAY_NUMBER: i64 = 3_652_058;
/// Day number of 0001-01-01.
pub(crate) const MIN_DAY_NUMBER: i64 = 0;
pub(crate) const MINUTES_PER_HOUR: u8 = 60;
pub(crate) const MONTHS_PER_YEAR: u8 = 12;
pub(crate) const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const SECONDS_PER_DAY: u32 = misc::u16u32(SECONDS_PER_HOUR) * 24;
pub(crate) const SECONDS_PER_HOUR: u16 = misc::u8u16(SECONDS_PER_MINUTE) * 60;
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;
pub(crate) const YEARS_PER_CENTURY: u16 = 100;
pub(crate) const YEARS_PER_QUADCENTURY: u16 = 400;

/// Number of days that precede each month, for common and leap years respectively.
pub(crate) static DAYS_OF_MONTHS: [[u16; 12]; 2] = [
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
  [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];
