use crate::calendar::{DateTime, TimeZone};
use core::fmt::{Debug, Formatter};
#[cfg(feature = "std")]
use crate::calendar::{CalendarError, DynTz, Utc};

/// Source of the current instant.
///
/// [`crate::calendar::Date::today`] and [`crate::calendar::Date::since`] take the date portion of
/// what the clock returns, as seen from the clock's time zone.
pub trait Clock {
  /// Time zone of the returned date-times.
  type TimeZone: TimeZone;

  /// Current date and time.
  fn now(&self) -> crate::Result<DateTime<Self::TimeZone>>;
}

impl<T> Clock for &T
where
  T: Clock,
{
  type TimeZone = T::TimeZone;

  #[inline]
  fn now(&self) -> crate::Result<DateTime<Self::TimeZone>> {
    (*self).now()
  }
}

/// Always returns the same date-time.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct FixedClock<TZ>(pub DateTime<TZ>);

impl<TZ> Debug for FixedClock<TZ>
where
  TZ: TimeZone,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("FixedClock").field(&self.0).finish()
  }
}

impl<TZ> Clock for FixedClock<TZ>
where
  TZ: TimeZone,
{
  type TimeZone = TZ;

  #[inline]
  fn now(&self) -> crate::Result<DateTime<TZ>> {
    Ok(self.0)
  }
}

/// The system clock seen from a fixed offset.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OffsetClock(pub DynTz);

#[cfg(feature = "std")]
impl Clock for OffsetClock {
  type TimeZone = DynTz;

  #[inline]
  fn now(&self) -> crate::Result<DateTime<DynTz>> {
    let (seconds, nanoseconds) = SystemClock.now()?.timestamp_secs_and_ns();
    DateTime::from_timestamp_secs_and_ns(seconds, nanoseconds, self.0)
  }
}

/// The system clock in UTC.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
  type TimeZone = Utc;

  #[inline]
  fn now(&self) -> crate::Result<DateTime<Utc>> {
    let timestamp = std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
      .map_err(|_err| CalendarError::InvalidHardwareTime)?;
    _trace!(seconds = timestamp.as_secs(), "Read system clock");
    DateTime::from_timestamp_secs_and_ns(
      i64::try_from(timestamp.as_secs())?,
      timestamp.subsec_nanos(),
      Utc,
    )
  }
}
