use crate::calendar::{CalendarError, CalendarToken, Date};
use arrayvec::ArrayString;
use core::fmt::Write as _;

/// Writes the representation of a date `token` or a literal into `string`.
#[inline]
pub(crate) fn push_date_token<const N: usize>(
  date: Date,
  token: CalendarToken,
  string: &mut ArrayString<N>,
) -> crate::Result<()> {
  let (year, month, day) = date.ymd();
  match token {
    CalendarToken::AbbreviatedMonthName => string.try_push_str(month.short_name())?,
    CalendarToken::AbbreviatedWeekdayName => string.try_push_str(date.weekday().short_name())?,
    CalendarToken::Colon => string.try_push(':')?,
    CalendarToken::Comma => string.try_push(',')?,
    CalendarToken::Dash => string.try_push('-')?,
    CalendarToken::FourDigitYear => write!(string, "{year:04}")?,
    CalendarToken::FullWeekdayName => string.try_push_str(date.weekday().name())?,
    CalendarToken::Gmt => string.try_push_str("GMT")?,
    CalendarToken::Separator => string.try_push('T')?,
    CalendarToken::Slash => string.try_push('/')?,
    CalendarToken::Space => string.try_push(' ')?,
    CalendarToken::TwoDigitDay => write!(string, "{day:02}")?,
    CalendarToken::TwoDigitMonth => write!(string, "{:02}", month.num())?,
    CalendarToken::TwoDigitYear => write!(string, "{:02}", year % 100)?,
    CalendarToken::TwoSpaceDay => write!(string, "{day:>2}")?,
    CalendarToken::DotNano
    | CalendarToken::TimeZone
    | CalendarToken::TwoDigitHour
    | CalendarToken::TwoDigitMinute
    | CalendarToken::TwoDigitSecond => return Err(CalendarError::InvalidParsingDate.into()),
  }
  Ok(())
}
