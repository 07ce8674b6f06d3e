use crate::calendar::{CalendarError, TimeZone};
use arrayvec::ArrayString;

/// Universal Time Coordinated (UTC)
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Utc;

impl TimeZone for Utc {
  const IS_UTC: bool = true;

  #[inline]
  fn from_minutes(minutes: i16) -> crate::Result<Self> {
    if minutes != 0 {
      return Err(
        CalendarError::InvalidTimezoneMinutes { expected: Some(0), received: minutes }.into(),
      );
    }
    Ok(Self)
  }

  #[inline]
  fn iso_8601(self) -> ArrayString<6> {
    let mut str = ArrayString::new();
    let _rslt = str.try_push('Z');
    str
  }

  #[inline]
  fn minutes(&self) -> i16 {
    0
  }
}
