use crate::calendar::CalendarError;
use core::fmt::{Display, Formatter};

/// Month of a year.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Month {
  /// January
  January = 1,
  /// February
  February = 2,
  /// March
  March = 3,
  /// April
  April = 4,
  /// May
  May = 5,
  /// June
  June = 6,
  /// July
  July = 7,
  /// August
  August = 8,
  /// September
  September = 9,
  /// October
  October = 10,
  /// November
  November = 11,
  /// December
  December = 12,
}

impl Month {
  /// Creates a new instance from a number between `1` and `12`.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    Ok(match num {
      1 => Self::January,
      2 => Self::February,
      3 => Self::March,
      4 => Self::April,
      5 => Self::May,
      6 => Self::June,
      7 => Self::July,
      8 => Self::August,
      9 => Self::September,
      10 => Self::October,
      11 => Self::November,
      12 => Self::December,
      _ => return Err(CalendarError::InvalidMonth { received: num }),
    })
  }

  /// Creates a new instance from a three-letter abbreviation like `Jan`.
  #[inline]
  pub fn from_short_name(bytes: &[u8]) -> Result<Self, CalendarError> {
    Ok(match bytes {
      b"Jan" => Self::January,
      b"Feb" => Self::February,
      b"Mar" => Self::March,
      b"Apr" => Self::April,
      b"May" => Self::May,
      b"Jun" => Self::June,
      b"Jul" => Self::July,
      b"Aug" => Self::August,
      b"Sep" => Self::September,
      b"Oct" => Self::October,
      b"Nov" => Self::November,
      b"Dec" => Self::December,
      _ => return Err(CalendarError::InvalidParsingBytes),
    })
  }

  /// Full name
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::January => "January",
      Self::February => "February",
      Self::March => "March",
      Self::April => "April",
      Self::May => "May",
      Self::June => "June",
      Self::July => "July",
      Self::August => "August",
      Self::September => "September",
      Self::October => "October",
      Self::November => "November",
      Self::December => "December",
    }
  }

  /// Integer representation, from `1` to `12`.
  #[inline]
  pub const fn num(self) -> u8 {
    self as u8
  }

  /// Three-letter abbreviation
  #[inline]
  pub const fn short_name(self) -> &'static str {
    match self {
      Self::January => "Jan",
      Self::February => "Feb",
      Self::March => "Mar",
      Self::April => "Apr",
      Self::May => "May",
      Self::June => "Jun",
      Self::July => "Jul",
      Self::August => "Aug",
      Self::September => "Sep",
      Self::October => "Oct",
      Self::November => "Nov",
      Self::December => "Dec",
    }
  }
}

impl Display for Month {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl From<Month> for u8 {
  #[inline]
  fn from(from: Month) -> Self {
    from.num()
  }
}

impl TryFrom<u8> for Month {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

#[cfg(test)]
mod tests {
  use crate::calendar::{CalendarError, Month};

  #[test]
  fn names_and_numbers() {
    for num in 1..=12 {
      let month = Month::from_num(num).unwrap();
      assert_eq!(month.num(), num);
      assert_eq!(Month::from_short_name(month.short_name().as_bytes()).unwrap(), month);
      assert!(month.name().starts_with(month.short_name()));
    }
    assert_eq!(Month::from_num(0), Err(CalendarError::InvalidMonth { received: 0 }));
    assert_eq!(Month::from_num(13), Err(CalendarError::InvalidMonth { received: 13 }));
    assert_eq!(Month::from_short_name(b"jan"), Err(CalendarError::InvalidParsingBytes));
  }
}
