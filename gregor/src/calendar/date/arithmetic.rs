use crate::calendar::{
  CalendarError, Date,
  day_number::{check, civil_to_days},
  misc::{i64i128, u8i128, u16i128},
};

impl Date {
  /// Shifts the date by `days`, which can be negative.
  ///
  /// ```
  /// use gregor::calendar::{Date, Month};
  ///
  /// let date = Date::from_ymd(1989, Month::October, 25).unwrap();
  /// assert_eq!(date.add_days(10).unwrap().to_string(), "1989-11-04");
  /// assert!(Date::MAX.add_days(1).is_err());
  /// ```
  #[inline]
  pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
    match check(i64i128(self.day_number()).wrapping_add(i64i128(days))) {
      Ok(elem) => Ok(Self::from_checked(elem)),
      Err(err) => {
        _debug!(date = %self, days, "Day shift is out of range");
        Err(err)
      }
    }
  }

  /// Adds years and months to the civil fields of this date and then shifts the result by `days`.
  ///
  /// Months carry into years, so month `0` is December of the previous year. A day that does not
  /// exist in the resulting month is carried into the following one, which means that
  /// `2021-10-31` plus one month is `2021-12-01`. Only the final result is range-checked.
  #[inline]
  pub fn add_calendar(self, years: i64, months: i64, days: i64) -> Result<Self, CalendarError> {
    let (year, month, day) = self.ymd();
    let shifted = civil_to_days(
      u16i128(year).wrapping_add(i64i128(years)),
      u8i128(month.num()).wrapping_add(i64i128(months)),
      u8i128(day),
    );
    match check(shifted.wrapping_add(i64i128(days))) {
      Ok(elem) => Ok(Self::from_checked(elem)),
      Err(err) => {
        _debug!(date = %self, years, months, days, "Calendar shift is out of range");
        Err(err)
      }
    }
  }

  /// Shifts the date back by `days`, which can be negative.
  #[inline]
  pub fn sub_days(self, days: i64) -> Result<Self, CalendarError> {
    match check(i64i128(self.day_number()).wrapping_sub(i64i128(days))) {
      Ok(elem) => Ok(Self::from_checked(elem)),
      Err(err) => {
        _debug!(date = %self, days, "Day shift is out of range");
        Err(err)
      }
    }
  }
}
