use crate::{
  calendar::{CalendarError, CalendarToken, Date, DateTime, Month, Time, TimeZone, Weekday},
  misc::FromRadix10,
};

/// What a sequence of tokens was able to extract from the input.
pub(crate) enum ParsedData<TZ> {
  Date(Date),
  DateTime(DateTime<TZ>),
  Time(Time),
}

impl<TZ> ParsedData<TZ>
where
  TZ: TimeZone,
{
  #[allow(clippy::too_many_lines, reason = "one arm per token")]
  #[inline]
  pub(crate) fn new(
    mut bytes: &[u8],
    tokens: impl IntoIterator<Item = CalendarToken>,
  ) -> crate::Result<Self> {
    let mut day_opt: Option<u8> = None;
    let mut hour_opt: Option<u8> = None;
    let mut minute_opt: Option<u8> = None;
    let mut month_opt: Option<Month> = None;
    let mut nanos_opt: Option<u32> = None;
    let mut second_opt: Option<u8> = None;
    let mut time_zone_opt: Option<i16> = None;
    let mut weekday_opt: Option<Weekday> = None;
    let mut year_opt: Option<u16> = None;
    for token in tokens {
      bytes = match token {
        CalendarToken::AbbreviatedMonthName => {
          let (lhs, rhs) = split_at(bytes, 3)?;
          set_once(&mut month_opt, Month::from_short_name(lhs)?, || {
            CalendarError::DuplicatedParsingFormatMonth
          })?;
          rhs
        }
        CalendarToken::AbbreviatedWeekdayName => {
          let (lhs, rhs) = split_at(bytes, 3)?;
          set_once(&mut weekday_opt, Weekday::from_short_name(lhs)?, || {
            CalendarError::DuplicatedParsingFormatWeekday
          })?;
          rhs
        }
        CalendarToken::Colon => literal(b":", bytes)?,
        CalendarToken::Comma => literal(b",", bytes)?,
        CalendarToken::Dash => literal(b"-", bytes)?,
        CalendarToken::DotNano => {
          let Ok(rest) = literal(b".", bytes) else {
            continue;
          };
          let len = rest.iter().take_while(|elem| elem.is_ascii_digit()).count();
          let (fraction, rhs) = split_at(rest, len)?;
          nanos_opt = Some(nanoseconds(fraction)?);
          rhs
        }
        CalendarToken::FourDigitYear => {
          let (lhs, rhs) = split_at(bytes, 4)?;
          set_once(&mut year_opt, digits(lhs)?, || CalendarError::DuplicatedParsingFormatYear)?;
          rhs
        }
        CalendarToken::FullWeekdayName => {
          let (weekday, rhs) = Weekday::from_name_relaxed(bytes)?;
          set_once(&mut weekday_opt, weekday, || CalendarError::DuplicatedParsingFormatWeekday)?;
          rhs
        }
        CalendarToken::Gmt => literal(b"GMT", bytes)?,
        CalendarToken::Separator => literal(b"T", bytes)?,
        CalendarToken::Slash => literal(b"/", bytes)?,
        CalendarToken::Space => literal(b" ", bytes)?,
        CalendarToken::TimeZone => time_zone(bytes, &mut time_zone_opt)?,
        CalendarToken::TwoDigitDay => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          set_once(&mut day_opt, digits(lhs)?, || CalendarError::DuplicatedParsingFormatDay)?;
          rhs
        }
        CalendarToken::TwoDigitHour => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          set_once(&mut hour_opt, digits(lhs)?, || CalendarError::DuplicatedParsingFormatHour)?;
          rhs
        }
        CalendarToken::TwoDigitMinute => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          set_once(&mut minute_opt, digits(lhs)?, || CalendarError::DuplicatedParsingFormatMinute)?;
          rhs
        }
        CalendarToken::TwoDigitMonth => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          set_once(&mut month_opt, Month::from_num(digits(lhs)?)?, || {
            CalendarError::DuplicatedParsingFormatMonth
          })?;
          rhs
        }
        CalendarToken::TwoDigitSecond => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          set_once(&mut second_opt, digits(lhs)?, || CalendarError::DuplicatedParsingFormatSecond)?;
          rhs
        }
        CalendarToken::TwoDigitYear => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          let year = digits::<u16>(lhs)?.wrapping_add(2000);
          set_once(&mut year_opt, year, || CalendarError::DuplicatedParsingFormatYear)?;
          rhs
        }
        CalendarToken::TwoSpaceDay => {
          let (lhs, rhs) = split_at(bytes, 2)?;
          let day = match lhs {
            [b' ', b] => digits(&[*b])?,
            _ => digits(lhs)?,
          };
          set_once(&mut day_opt, day, || CalendarError::DuplicatedParsingFormatDay)?;
          rhs
        }
      };
    }
    if !bytes.is_empty() {
      return Err(CalendarError::InvalidParsingBytes.into());
    }
    let nanosecond = nanos_opt.unwrap_or(0);
    match (year_opt, month_opt, day_opt, hour_opt, minute_opt, second_opt) {
      (None, None, None, Some(hour), Some(minute), Some(second)) => {
        Ok(Self::Time(Time::from_hms_ns(hour, minute, second, nanosecond)?))
      }
      (Some(year), Some(month), Some(day), None, None, None) => {
        let date = Date::from_ymd(year, month, day)?;
        check_weekday(date, weekday_opt)?;
        Ok(Self::Date(date))
      }
      (Some(year), Some(month), Some(day), Some(hour), Some(minute), Some(second)) => {
        let date = Date::from_ymd(year, month, day)?;
        check_weekday(date, weekday_opt)?;
        Ok(Self::DateTime(DateTime::new(
          date,
          Time::from_hms_ns(hour, minute, second, nanosecond)?,
          TZ::from_minutes(time_zone_opt.unwrap_or(0))?,
        )))
      }
      _ => Err(CalendarError::IncompleteParsingParams.into()),
    }
  }
}

fn check_weekday(date: Date, weekday_opt: Option<Weekday>) -> crate::Result<()> {
  if let Some(weekday) = weekday_opt
    && weekday != date.weekday()
  {
    return Err(CalendarError::InvalidParsingWeekday.into());
  }
  Ok(())
}

/// Only plain ASCII digits, signs are rejected.
fn digits<T>(bytes: &[u8]) -> crate::Result<T>
where
  T: FromRadix10,
{
  if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
    return Err(CalendarError::InvalidParsingBytes.into());
  }
  T::from_radix_10(bytes)
}

fn literal<'bytes>(lit: &[u8], bytes: &'bytes [u8]) -> crate::Result<&'bytes [u8]> {
  let (lhs, rhs) = split_at(bytes, lit.len())?;
  if lhs != lit {
    return Err(CalendarError::InvalidParsingLiteral.into());
  }
  Ok(rhs)
}

/// Scales a fraction of `1..=9` digits to nanoseconds.
fn nanoseconds(fraction: &[u8]) -> crate::Result<u32> {
  let Some(zeros) = 9usize.checked_sub(fraction.len()) else {
    return Err(CalendarError::InvalidParsingBytes.into());
  };
  let mut rslt: u32 = digits(fraction)?;
  for _ in 0..zeros {
    rslt = rslt.wrapping_mul(10);
  }
  Ok(rslt)
}

fn set_once<T>(
  opt: &mut Option<T>,
  value: T,
  err: impl FnOnce() -> CalendarError,
) -> crate::Result<()> {
  if opt.is_some() {
    return Err(err().into());
  }
  *opt = Some(value);
  Ok(())
}

#[track_caller]
fn split_at(bytes: &[u8], mid: usize) -> crate::Result<(&[u8], &[u8])> {
  let Some(elem) = bytes.split_at_checked(mid) else {
    return Err(CalendarError::InvalidParsingBytes.into());
  };
  Ok(elem)
}

/// `Z`, `±HH`, `±HHMM` or `±HH:MM`. Missing offsets are accepted.
fn time_zone<'bytes>(
  bytes: &'bytes [u8],
  time_zone_opt: &mut Option<i16>,
) -> crate::Result<&'bytes [u8]> {
  if time_zone_opt.is_some() {
    return Err(CalendarError::DuplicatedTimeZone.into());
  }
  let (is_neg, rest) = match bytes {
    [] => return Ok(bytes),
    [b'Z', rest @ ..] => {
      *time_zone_opt = Some(0);
      return Ok(rest);
    }
    [b'+', rest @ ..] => (false, rest),
    [b'-', rest @ ..] => (true, rest),
    _ => return Err(CalendarError::InvalidParsingTimezone.into()),
  };
  let [h0, h1, after_hour @ ..] = rest else {
    return Err(CalendarError::InvalidParsingTimezone.into());
  };
  let hour: i16 = digits(&[*h0, *h1])?;
  let after_colon = after_hour.strip_prefix(b":").unwrap_or(after_hour);
  let (minute, after_minute) = match after_colon {
    [m0, m1, after_minute @ ..] if m0.is_ascii_digit() && m1.is_ascii_digit() => {
      (digits::<i16>(&[*m0, *m1])?, after_minute)
    }
    _ => (0, after_hour),
  };
  if hour >= 24 || minute >= 60 {
    return Err(CalendarError::InvalidParsingTimezone.into());
  }
  let minutes = hour.wrapping_mul(60).wrapping_add(minute);
  *time_zone_opt = Some(if is_neg { minutes.wrapping_neg() } else { minutes });
  Ok(after_minute)
}
