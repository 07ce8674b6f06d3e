use crate::calendar::{CalendarError, MINUTES_PER_HOUR, TimeZone};
use arrayvec::ArrayString;
use core::fmt::Write as _;

/// Dynamic Time Zone. From -23:59 to +23:59.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DynTz(i16);

impl DynTz {
  /// Constant version of [`TimeZone::from_minutes`].
  #[inline]
  pub const fn new(minutes: i16) -> Result<Self, CalendarError> {
    let -1439..=1439 = minutes else {
      return Err(CalendarError::InvalidTimezoneMinutes { expected: None, received: minutes });
    };
    Ok(Self(minutes))
  }
}

impl TimeZone for DynTz {
  const IS_UTC: bool = false;

  #[inline]
  fn from_minutes(minutes: i16) -> crate::Result<Self> {
    Ok(Self::new(minutes)?)
  }

  #[inline]
  fn iso_8601(self) -> ArrayString<6> {
    let mph = u16::from(MINUTES_PER_HOUR);
    let abs = self.0.unsigned_abs();
    let sign = if self.0 < 0 { '-' } else { '+' };
    let mut str = ArrayString::new();
    let _rslt = write!(str, "{sign}{:02}:{:02}", abs / mph, abs % mph);
    str
  }

  #[inline]
  fn minutes(&self) -> i16 {
    self.0
  }
}
