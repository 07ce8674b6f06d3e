mod arithmetic;
mod format;
#[cfg(test)]
mod tests;

use crate::calendar::{
  CalendarError, Clock, DateTime, EPOCH_DAY_NUMBER, MAX_DAY_NUMBER, MIN_DAY_NUMBER, Month, Time,
  TimeZone, Weekday,
  day_number::{self, civil_from_days},
  misc::{i64i128, u8i64, u16i64},
};
use core::{
  fmt::{Debug, Display, Formatter},
  ops::Sub,
};

/// Proleptic Gregorian date.
///
/// Internally a single number of days elapsed since `0001-01-01`, which means that comparisons and
/// differences are plain integer operations while civil fields are derived on demand.
///
/// Can represent dates from `0001-01-01` to `9999-12-31`.
///
/// ```
/// use gregor::calendar::{Date, Month, Weekday};
///
/// let date = Date::from_ymd(1989, Month::October, 11).unwrap();
/// assert_eq!(date.iso_8601().as_str(), "1989-10-11");
/// assert_eq!(date.weekday(), Weekday::Wednesday);
/// assert_eq!(date.add_calendar(0, 1, 0).unwrap().to_string(), "1989-11-11");
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(i64);

impl Date {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self(EPOCH_DAY_NUMBER);
  /// Instance with the maximum allowed value of `9999-12-31`
  pub const MAX: Self = Self(MAX_DAY_NUMBER);
  /// Instance with the minimum allowed value of `0001-01-01`
  pub const MIN: Self = Self(MIN_DAY_NUMBER);

  /// Constructs a new instance from civil fields, normalizing out-of-range months and days.
  ///
  /// See [`day_number::encode`].
  #[inline]
  pub const fn from_civil(year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
    match day_number::encode(year, month, day) {
      Ok(elem) => Ok(Self(elem)),
      Err(err) => Err(err),
    }
  }

  /// Returns the UTC date of `date_time`.
  ///
  /// Fails with [`CalendarError::OutOfRange`] when the UTC date leaves the supported range.
  #[inline]
  pub fn from_date_time<TZ>(date_time: &DateTime<TZ>) -> crate::Result<Self>
  where
    TZ: TimeZone,
  {
    Ok(date_time.to_utc()?.date())
  }

  /// Creates a new instance from the number of days since `0001-01-01`.
  #[inline]
  pub const fn from_day_number(day_number: i64) -> Result<Self, CalendarError> {
    match day_number::check(i64i128(day_number)) {
      Ok(elem) => Ok(Self(elem)),
      Err(err) => Err(err),
    }
  }

  /// Constructs a new instance that only accepts existing dates.
  ///
  /// Differently from [`Self::from_civil`], days that don't belong to `month` are rejected
  /// instead of normalized.
  #[inline]
  pub const fn from_ymd(year: u16, month: Month, day: u8) -> Result<Self, CalendarError> {
    let year_i64 = u16i64(year);
    if day == 0 || day > day_number::days_in_month(year_i64, month) {
      return Err(CalendarError::InvalidMonthDay { received: day });
    }
    Self::from_civil(year_i64, u8i64(month.num()), u8i64(day))
  }

  /// The current date according to `clock`, in the time zone of `clock`.
  #[inline]
  pub fn today<C>(clock: &C) -> crate::Result<Self>
  where
    C: Clock,
  {
    Ok(clock.now()?.date())
  }

  /// Day of the month.
  #[inline]
  pub const fn day(self) -> u8 {
    civil_from_days(self.0).2
  }

  /// Number of days since `0001-01-01`.
  #[inline]
  pub const fn day_number(self) -> i64 {
    self.0
  }

  /// Day of the year, from `1` to `366`.
  #[inline]
  pub const fn day_of_year(self) -> u16 {
    match day_number::day_of_year(self.0) {
      Ok(elem) => elem,
      // SAFETY: Constructors only accept valid day numbers
      Err(_) => unsafe { core::hint::unreachable_unchecked() },
    }
  }

  /// Signed number of days between `self` and `other`, i.e., `self - other`.
  #[inline]
  pub const fn days_between(self, other: Self) -> i64 {
    self.0.wrapping_sub(other.0)
  }

  /// If `self` comes after `other`.
  #[inline]
  pub const fn is_after(self, other: Self) -> bool {
    self.0 > other.0
  }

  /// If `self` comes before `other`.
  #[inline]
  pub const fn is_before(self, other: Self) -> bool {
    self.0 < other.0
  }

  /// If `self` and `other` refer the same day.
  #[inline]
  pub const fn is_equal(self, other: Self) -> bool {
    self.0 == other.0
  }

  /// If the year of this date has 366 days.
  #[inline]
  pub const fn is_leap_year(self) -> bool {
    day_number::is_leap_year(u16i64(self.year()))
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> Month {
    civil_from_days(self.0).1
  }

  /// Number of days elapsed since `self` until the current date of `clock`.
  #[inline]
  pub fn since<C>(self, clock: &C) -> crate::Result<i64>
  where
    C: Clock,
  {
    Ok(Self::today(clock)?.days_between(self))
  }

  /// Combines the civil fields of this date with the given clock time and time zone.
  #[inline]
  pub fn to_date_time<TZ>(
    self,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    tz: TZ,
  ) -> crate::Result<DateTime<TZ>>
  where
    TZ: TimeZone,
  {
    Ok(DateTime::new(self, Time::from_hms_ns(hour, minute, second, nanosecond)?, tz))
  }

  /// Day of the week.
  #[inline]
  pub const fn weekday(self) -> Weekday {
    Weekday::from_day_number(self.0)
  }

  /// Callers must provide a day number within `0` and `3_652_058`.
  pub(crate) const fn from_checked(day_number: i64) -> Self {
    Self(day_number)
  }

  /// Year, from `1` to `9999`.
  #[inline]
  pub const fn year(self) -> u16 {
    civil_from_days(self.0).0
  }

  /// Civil representation in the `(year, month, day)` format.
  #[inline]
  pub const fn ymd(self) -> (u16, Month, u8) {
    civil_from_days(self.0)
  }
}

impl Debug for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Default for Date {
  #[inline]
  fn default() -> Self {
    Self::EPOCH
  }
}

impl Display for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Sub for Date {
  type Output = i64;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    self.days_between(rhs)
  }
}

impl TryFrom<i64> for Date {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: i64) -> Result<Self, Self::Error> {
    Ok(Self::from_day_number(from)?)
  }
}

impl From<Date> for i64 {
  #[inline]
  fn from(from: Date) -> Self {
    from.0
  }
}

#[cfg(feature = "arbitrary")]
impl<'any> arbitrary::Arbitrary<'any> for Date {
  #[inline]
  fn arbitrary(u: &mut arbitrary::Unstructured<'any>) -> arbitrary::Result<Self> {
    Ok(Self(u.int_in_range(MIN_DAY_NUMBER..=MAX_DAY_NUMBER)?))
  }

  #[inline]
  fn size_hint(depth: usize) -> (usize, Option<usize>) {
    <i64 as arbitrary::Arbitrary<'any>>::size_hint(depth)
  }
}

#[cfg(feature = "chrono")]
mod chrono {
  use crate::calendar::Date;
  use chrono::{Datelike as _, NaiveDate};

  /// `chrono` counts days from `0001-01-01` starting at `1`.
  const CHRONO_CE_OFFSET: i64 = 1;

  impl From<Date> for NaiveDate {
    #[inline]
    fn from(from: Date) -> Self {
      i32::try_from(from.day_number().wrapping_add(CHRONO_CE_OFFSET))
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .unwrap_or(NaiveDate::MIN)
    }
  }

  impl TryFrom<NaiveDate> for Date {
    type Error = crate::Error;

    #[inline]
    fn try_from(from: NaiveDate) -> Result<Self, Self::Error> {
      let day_number = i64::from(from.num_days_from_ce()).wrapping_sub(CHRONO_CE_OFFSET);
      Ok(Date::from_day_number(day_number)?)
    }
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::Date;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Date;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a date formatted as YYYY-MM-DD")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Date::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}
