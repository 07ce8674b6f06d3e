//! Conversions between civil dates and day numbers.
//!
//! A day number is the count of days elapsed since `0001-01-01` of the proleptic Gregorian
//! calendar, which means that `0` is `0001-01-01` and `3_652_058` is `9999-12-31`.
//!
//! ```
//! use gregor::calendar::{Month, day_number};
//!
//! assert_eq!(day_number::encode(1, 1, 1).unwrap(), 0);
//! assert_eq!(day_number::encode(1970, 1, 1).unwrap(), 719_162);
//! // November 31 is normalized to December 1
//! assert_eq!(day_number::encode(2021, 11, 31), day_number::encode(2021, 12, 1));
//! assert_eq!(day_number::decode(719_162).unwrap(), (1970, Month::January, 1));
//! ```

#![allow(
  clippy::cast_possible_truncation,
  reason = "values are reduced to smaller representations only after range checks"
)]

use crate::calendar::{
  CalendarError, DAYS_OF_MONTHS, DAYS_PER_4_YEARS, DAYS_PER_CENTURY, DAYS_PER_NON_LEAP_YEAR,
  DAYS_PER_QUADCENTURY, MAX_DAY_NUMBER, MIN_DAY_NUMBER, MONTHS_PER_YEAR, Month,
  YEARS_PER_CENTURY, YEARS_PER_QUADCENTURY,
  misc::{boolusize, i64i128, i128i64_saturating, u8u32, u16i128, u16u32},
};
use core::hint::unreachable_unchecked;

/// Converts a civil date into a day number.
///
/// Out-of-range months and days are normalized by carrying the excess into the next larger unit,
/// just like adding a duration would. For example, month `13` of a year is January of the
/// following year, month `0` is December of the previous year and `2021-02-30` is `2021-03-02`.
///
/// Returns [`CalendarError::OutOfRange`] if the normalized date is not within `0001-01-01` and
/// `9999-12-31`.
#[inline]
pub const fn encode(year: i64, month: i64, day: i64) -> Result<i64, CalendarError> {
  check(civil_to_days(i64i128(year), i64i128(month), i64i128(day)))
}

/// Converts a day number into a civil date in the `(year, month, day)` format.
///
/// Returns [`CalendarError::OutOfRange`] if `day_number` is not within `0` and `3_652_058`.
#[inline]
pub const fn decode(day_number: i64) -> Result<(u16, Month, u8), CalendarError> {
  if let Err(err) = check(i64i128(day_number)) {
    return Err(err);
  }
  Ok(civil_from_days(day_number))
}

/// Ordinal day of the year, from `1` to `366`.
///
/// Returns [`CalendarError::OutOfRange`] if `day_number` is not within `0` and `3_652_058`.
#[inline]
pub const fn day_of_year(day_number: i64) -> Result<u16, CalendarError> {
  if let Err(err) = check(i64i128(day_number)) {
    return Err(err);
  }
  Ok(year_and_ordinal(day_number).1)
}

/// Number of days of `month` in the given `year`.
#[inline]
pub const fn days_in_month(year: i64, month: Month) -> u8 {
  match month {
    Month::February => {
      if is_leap_year(year) {
        29
      } else {
        28
      }
    }
    Month::April | Month::June | Month::September | Month::November => 30,
    _ => 31,
  }
}

/// Divisible by 4, except centuries, except multiples of 400.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
  is_leap_year_wide(i64i128(year))
}

pub(crate) const fn check(days: i128) -> Result<i64, CalendarError> {
  if days < i64i128(MIN_DAY_NUMBER) || days > i64i128(MAX_DAY_NUMBER) {
    return Err(CalendarError::OutOfRange { received: i128i64_saturating(days) });
  }
  Ok(days as i64)
}

/// Day number of a possibly denormalized civil date. The result is not range-checked.
///
/// 128-bit arithmetic is enough to hold any combination of `i64` inputs, including sums of two
/// `i64`s, without overflowing.
pub(crate) const fn civil_to_days(year: i128, month: i128, day: i128) -> i128 {
  let months_per_year = MONTHS_PER_YEAR as i128;
  let month_idx = month.wrapping_sub(1);
  let local_year = year.wrapping_add(month_idx.div_euclid(months_per_year));
  let local_month_idx = month_idx.rem_euclid(months_per_year) as usize;
  #[allow(clippy::indexing_slicing, reason = "the euclidean remainder is always within 0..12")]
  let days_until_month = DAYS_OF_MONTHS[boolusize(is_leap_year_wide(local_year))][local_month_idx];
  let prev_years = local_year.wrapping_sub(1);
  prev_years
    .wrapping_mul(u16i128(DAYS_PER_NON_LEAP_YEAR))
    .wrapping_add(prev_years.div_euclid(4))
    .wrapping_sub(prev_years.div_euclid(u16i128(YEARS_PER_CENTURY)))
    .wrapping_add(prev_years.div_euclid(u16i128(YEARS_PER_QUADCENTURY)))
    .wrapping_add(u16i128(days_until_month))
    .wrapping_add(day)
    .wrapping_sub(1)
}

/// Callers must provide a day number within `0` and `3_652_058`.
pub(crate) const fn civil_from_days(day_number: i64) -> (u16, Month, u8) {
  let (year, day_of_year) = year_and_ordinal(day_number);
  let (month, day) = month_and_day(day_of_year, is_leap_year_wide(u16i128(year)));
  (year, month, day)
}

const fn is_leap_year_wide(year: i128) -> bool {
  year.rem_euclid(4) == 0
    && (year.rem_euclid(u16i128(YEARS_PER_CENTURY)) != 0
      || year.rem_euclid(u16i128(YEARS_PER_QUADCENTURY)) == 0)
}

// Credits to https://jhpratt.dev/blog/optimizing-with-novel-calendrical-algorithms.
const fn month_and_day(day_of_year: u16, is_leap_year: bool) -> (Month, u8) {
  let days_until_mar = if is_leap_year { 60 } else { 59 };
  let mut local_day_of_year = u16u32(day_of_year);
  let mut month_surplus = 0;
  if let Some(elem @ 1..=u32::MAX) = local_day_of_year.checked_sub(days_until_mar) {
    local_day_of_year = elem;
    month_surplus = 2;
  }
  let month_helper = (local_day_of_year.wrapping_mul(268).wrapping_add(8031) >> 13) as u8;
  let days_in_preceding_months = u8u32(month_helper).wrapping_mul(3917).wrapping_sub(3866) >> 7;
  let day = local_day_of_year.wrapping_sub(days_in_preceding_months) as u8;
  match Month::from_num(month_helper.wrapping_add(month_surplus)) {
    Ok(month) => (month, day),
    // SAFETY: `day_of_year` is always within the 1-366 range, which maps to months 1-12
    Err(_) => unsafe { unreachable_unchecked() },
  }
}

/// Quadcentury, century, four-year and year decomposition. Returns the year along side the
/// ordinal day of the year.
const fn year_and_ordinal(day_number: i64) -> (u16, u16) {
  let mut days = day_number as u32;
  let quadcenturies = days / DAYS_PER_QUADCENTURY;
  days %= DAYS_PER_QUADCENTURY;
  let mut centuries = days / DAYS_PER_CENTURY;
  // The last day of a quadcentury is the 366th day of its leap year
  if centuries == 4 {
    centuries = 3;
  }
  days = days.wrapping_sub(centuries.wrapping_mul(DAYS_PER_CENTURY));
  let quads = days / u16u32(DAYS_PER_4_YEARS);
  days %= u16u32(DAYS_PER_4_YEARS);
  let mut years = days / u16u32(DAYS_PER_NON_LEAP_YEAR);
  // The last day of a four-year cycle is the 366th day of its leap year
  if years == 4 {
    years = 3;
  }
  days = days.wrapping_sub(years.wrapping_mul(u16u32(DAYS_PER_NON_LEAP_YEAR)));
  let year = quadcenturies
    .wrapping_mul(u16u32(YEARS_PER_QUADCENTURY))
    .wrapping_add(centuries.wrapping_mul(u16u32(YEARS_PER_CENTURY)))
    .wrapping_add(quads.wrapping_mul(4))
    .wrapping_add(years)
    .wrapping_add(1);
  (year as u16, days.wrapping_add(1) as u16)
}

#[cfg(test)]
mod tests {
  use crate::calendar::{
    CalendarError, MAX_DAY_NUMBER, Month,
    day_number::{day_of_year, days_in_month, decode, encode, is_leap_year},
  };

  #[test]
  fn bounds() {
    assert_eq!(encode(1, 1, 1).unwrap(), 0);
    assert_eq!(encode(9999, 12, 31).unwrap(), MAX_DAY_NUMBER);
    assert_eq!(encode(0, 12, 31), Err(CalendarError::OutOfRange { received: -1 }));
    assert_eq!(
      encode(10000, 1, 1),
      Err(CalendarError::OutOfRange { received: MAX_DAY_NUMBER + 1 })
    );
    assert_eq!(decode(-1), Err(CalendarError::OutOfRange { received: -1 }));
    assert_eq!(
      decode(MAX_DAY_NUMBER + 1),
      Err(CalendarError::OutOfRange { received: MAX_DAY_NUMBER + 1 })
    );
    assert_eq!(decode(0).unwrap(), (1, Month::January, 1));
    assert_eq!(decode(MAX_DAY_NUMBER).unwrap(), (9999, Month::December, 31));
  }

  #[test]
  fn century_transitions() {
    assert_eq!(decode(encode(1900, 2, 28).unwrap() + 1).unwrap(), (1900, Month::March, 1));
    assert_eq!(decode(encode(2000, 2, 28).unwrap() + 1).unwrap(), (2000, Month::February, 29));
    assert_eq!(decode(encode(2000, 12, 31).unwrap() + 1).unwrap(), (2001, Month::January, 1));
    assert_eq!(decode(encode(2100, 12, 31).unwrap()).unwrap(), (2100, Month::December, 31));
    assert_eq!(encode(2001, 1, 1).unwrap() - encode(1601, 1, 1).unwrap(), 146_097);
  }

  #[test]
  fn day_of_year_has_leap_days() {
    assert_eq!(day_of_year(encode(2022, 12, 31).unwrap()).unwrap(), 365);
    assert_eq!(day_of_year(encode(2020, 12, 31).unwrap()).unwrap(), 366);
    assert_eq!(day_of_year(encode(2021, 2, 10).unwrap()).unwrap(), 41);
    assert_eq!(day_of_year(encode(2000, 12, 31).unwrap()).unwrap(), 366);
    assert_eq!(day_of_year(encode(1900, 12, 31).unwrap()).unwrap(), 365);
    assert_eq!(day_of_year(MAX_DAY_NUMBER).unwrap(), 365);
  }

  #[test]
  fn days_of_months() {
    assert_eq!(days_in_month(2024, Month::February), 29);
    assert_eq!(days_in_month(2023, Month::February), 28);
    assert_eq!(days_in_month(1900, Month::February), 28);
    assert_eq!(days_in_month(2000, Month::February), 29);
    assert_eq!(days_in_month(2023, Month::November), 30);
    assert_eq!(days_in_month(2023, Month::December), 31);
  }

  #[test]
  fn leap_years() {
    assert!(is_leap_year(4));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(0));
    assert!(is_leap_year(-4));
    assert!(!is_leap_year(-100));
  }

  #[test]
  fn normalization() {
    assert_eq!(encode(2021, 11, 31), encode(2021, 12, 1));
    assert_eq!(encode(2021, 13, 1), encode(2022, 1, 1));
    assert_eq!(encode(2021, 0, 1), encode(2020, 12, 1));
    assert_eq!(encode(2021, -11, 1), encode(2020, 1, 1));
    assert_eq!(encode(2021, -12, 1), encode(2019, 12, 1));
    assert_eq!(encode(2021, 1, 0), encode(2020, 12, 31));
    assert_eq!(encode(2021, 2, 29), encode(2021, 3, 1));
    assert_eq!(encode(2020, 2, 30), encode(2020, 3, 1));
    assert_eq!(encode(1, 1, 3_652_059).unwrap(), MAX_DAY_NUMBER);
    assert_eq!(encode(10_000, 1, 0).unwrap(), MAX_DAY_NUMBER);
  }

  #[test]
  fn overflowing_inputs() {
    let max = CalendarError::OutOfRange { received: i64::MAX };
    let min = CalendarError::OutOfRange { received: i64::MIN };
    assert_eq!(encode(i64::MAX, i64::MAX, i64::MAX), Err(max));
    assert_eq!(encode(i64::MIN, i64::MIN, i64::MIN), Err(min));
    assert!(encode(1, 1, i64::MAX).is_err());
  }

  #[test]
  fn round_trip_of_every_day() {
    let mut prev = decode(0).unwrap();
    for day_number in 1..=MAX_DAY_NUMBER {
      let (year, month, day) = decode(day_number).unwrap();
      assert_eq!(encode(year.into(), month.num().into(), day.into()).unwrap(), day_number);
      assert!((year, month, day) > prev, "{year}-{month}-{day}");
      prev = (year, month, day);
    }
  }
}
