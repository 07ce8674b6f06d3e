mod format;

use crate::calendar::{
  Date, EPOCH_DAY_NUMBER, SECONDS_PER_DAY, Time, TimeZone, Utc,
  day_number,
  misc::{i64i128, u32i64, u32i128},
};
use arrayvec::ArrayString;
use core::fmt::{Debug, Display, Formatter};

/// A [`Date`] and a [`Time`] seen from a [`TimeZone`].
///
/// ```
/// use gregor::calendar::{DateTime, DynTz, Utc};
///
/// let utc = DateTime::from_timestamp_secs(1_744_329_600).unwrap();
/// assert_eq!(utc.iso_8601().as_str(), "2025-04-11T00:00:00Z");
/// let local = DateTime::from_timestamp_secs_and_ns(1_744_329_600, 0, DynTz::new(-180).unwrap());
/// assert_eq!(local.unwrap().iso_8601().as_str(), "2025-04-10T21:00:00-03:00");
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime<TZ> {
  date: Date,
  time: Time,
  tz: TZ,
}

impl DateTime<Utc> {
  /// Instance that refers the UNIX epoch (1970-01-01T00:00:00Z).
  pub const EPOCH: Self = Self::new(Date::EPOCH, Time::ZERO, Utc);
  /// Instance with the maximum allowed value of `9999-12-31T23:59:59.999999999Z`
  pub const MAX: Self = Self::new(Date::MAX, Time::MAX, Utc);
  /// Instance with the minimum allowed value of `0001-01-01T00:00:00Z`
  pub const MIN: Self = Self::new(Date::MIN, Time::ZERO, Utc);

  /// Creates a new instance from a UNIX timestamp expressed in seconds.
  #[inline]
  pub fn from_timestamp_secs(seconds: i64) -> crate::Result<Self> {
    Self::from_timestamp_secs_and_ns(seconds, 0, Utc)
  }
}

impl<TZ> DateTime<TZ>
where
  TZ: TimeZone,
{
  /// Creates a new instance from a UNIX timestamp expressed in seconds along side the number of
  /// nanoseconds. The civil fields are the ones observed at `tz`.
  #[inline]
  pub fn from_timestamp_secs_and_ns(
    seconds: i64,
    nanoseconds: u32,
    tz: TZ,
  ) -> crate::Result<Self> {
    let local = i64i128(seconds).wrapping_add(i64i128(tz.minutes().into()).wrapping_mul(60));
    let seconds_per_day = u32i128(SECONDS_PER_DAY);
    let days = local.div_euclid(seconds_per_day).wrapping_add(i64i128(EPOCH_DAY_NUMBER));
    let date = Date::from_day_number(day_number::check(days)?)?;
    let day_seconds = u32::try_from(local.rem_euclid(seconds_per_day))?;
    Ok(Self::new(date, Time::from_seconds_since_mn(day_seconds, nanoseconds)?, tz))
  }

  /// New instance from basic parameters
  #[inline]
  pub const fn new(date: Date, time: Time, time_zone: TZ) -> Self {
    Self { date, time, tz: time_zone }
  }

  /// See [`Date`].
  #[inline]
  pub const fn date(self) -> Date {
    self.date
  }

  /// ISO-8601 string representation
  #[inline]
  pub fn iso_8601(self) -> ArrayString<35> {
    let mut rslt = ArrayString::new();
    let _rslt0 = rslt.try_push_str(&self.date.iso_8601());
    let _rslt1 = rslt.try_push('T');
    let _rslt2 = rslt.try_push_str(&self.time.iso_8601());
    let _rslt3 = rslt.try_push_str(&self.tz.iso_8601());
    rslt
  }

  /// See [`Time`].
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }

  /// See [`TimeZone`].
  #[inline]
  pub const fn time_zone(self) -> TZ {
    self.tz
  }

  /// UNIX timestamp in seconds as well as the number of nanoseconds.
  #[inline]
  pub fn timestamp_secs_and_ns(self) -> (i64, u32) {
    let mut rslt = self.date.day_number().wrapping_sub(EPOCH_DAY_NUMBER);
    rslt = rslt.wrapping_mul(u32i64(SECONDS_PER_DAY));
    rslt = rslt.wrapping_add(u32i64(self.time.seconds_since_mn()));
    rslt = rslt.wrapping_sub(i64::from(self.tz.minutes()).wrapping_mul(60));
    (rslt, self.time.nanosecond())
  }

  /// Returns a new instance with the internal values converted to UTC.
  #[inline]
  pub fn to_utc(self) -> crate::Result<DateTime<Utc>> {
    if TZ::IS_UTC {
      return Ok(DateTime::new(self.date, self.time, Utc));
    }
    let (seconds, nanoseconds) = self.timestamp_secs_and_ns();
    DateTime::from_timestamp_secs_and_ns(seconds, nanoseconds, Utc)
  }
}

impl<TZ> Debug for DateTime<TZ>
where
  TZ: TimeZone,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl<TZ> Display for DateTime<TZ>
where
  TZ: TimeZone,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::{DateTime, TimeZone};
  use core::{fmt, marker::PhantomData};
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de, TZ> Deserialize<'de> for DateTime<TZ>
  where
    TZ: TimeZone,
  {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor<TZ>(PhantomData<TZ>);

      impl<TZ> Visitor<'_> for LocalVisitor<TZ>
      where
        TZ: TimeZone,
      {
        type Value = DateTime<TZ>;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a date-time formatted as YYYY-MM-DDTHH:MM:SS with an offset")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          DateTime::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor(PhantomData))
    }
  }

  impl<TZ> Serialize for DateTime<TZ>
  where
    TZ: TimeZone,
  {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}
