use crate::calendar::CalendarError;
use core::fmt::{Display, Formatter};

/// Day of the week, numbered from Sunday (`0`) to Saturday (`6`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Weekday {
  /// Sunday
  Sunday = 0,
  /// Monday
  Monday = 1,
  /// Tuesday
  Tuesday = 2,
  /// Wednesday
  Wednesday = 3,
  /// Thursday
  Thursday = 4,
  /// Friday
  Friday = 5,
  /// Saturday
  Saturday = 6,
}

impl Weekday {
  /// Creates a new instance from a number between `0` (Sunday) and `6` (Saturday).
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    Ok(match num {
      0 => Self::Sunday,
      1 => Self::Monday,
      2 => Self::Tuesday,
      3 => Self::Wednesday,
      4 => Self::Thursday,
      5 => Self::Friday,
      6 => Self::Saturday,
      _ => return Err(CalendarError::InvalidWeekday),
    })
  }

  /// Weekday of a day number.
  ///
  /// `0001-01-01`, i.e., day number `0`, is a Monday.
  #[allow(clippy::cast_possible_truncation, reason = "euclidean remainder of 7 fits in u8")]
  #[inline]
  pub const fn from_day_number(day_number: i64) -> Self {
    let idx = (day_number.rem_euclid(7) as u8).wrapping_add(1) % 7;
    match Self::from_num(idx) {
      Ok(elem) => elem,
      // SAFETY: `idx` is always within the 0-6 range
      Err(_) => unsafe { core::hint::unreachable_unchecked() },
    }
  }

  /// Parses a full name like `Monday` or a three-letter abbreviation like `Mon` located at the
  /// beginning of `bytes`, returning the remaining bytes.
  #[inline]
  pub fn from_name_relaxed(bytes: &[u8]) -> Result<(Self, &[u8]), CalendarError> {
    let Some((short, rest)) = bytes.split_at_checked(3) else {
      return Err(CalendarError::InvalidWeekday);
    };
    let weekday = Self::from_short_name(short)?;
    let suffix = weekday.name().as_bytes().get(3..).unwrap_or_default();
    Ok((weekday, rest.strip_prefix(suffix).unwrap_or(rest)))
  }

  /// Creates a new instance from a three-letter abbreviation like `Mon`.
  #[inline]
  pub fn from_short_name(bytes: &[u8]) -> Result<Self, CalendarError> {
    Ok(match bytes {
      b"Sun" => Self::Sunday,
      b"Mon" => Self::Monday,
      b"Tue" => Self::Tuesday,
      b"Wed" => Self::Wednesday,
      b"Thu" => Self::Thursday,
      b"Fri" => Self::Friday,
      b"Sat" => Self::Saturday,
      _ => return Err(CalendarError::InvalidWeekday),
    })
  }

  /// Full name
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Sunday => "Sunday",
      Self::Monday => "Monday",
      Self::Tuesday => "Tuesday",
      Self::Wednesday => "Wednesday",
      Self::Thursday => "Thursday",
      Self::Friday => "Friday",
      Self::Saturday => "Saturday",
    }
  }

  /// Integer representation, from `0` (Sunday) to `6` (Saturday).
  #[inline]
  pub const fn num(self) -> u8 {
    self as u8
  }

  /// Three-letter abbreviation
  #[inline]
  pub const fn short_name(self) -> &'static str {
    match self {
      Self::Sunday => "Sun",
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
    }
  }
}

impl Display for Weekday {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl From<Weekday> for u8 {
  #[inline]
  fn from(from: Weekday) -> Self {
    from.num()
  }
}

impl TryFrom<u8> for Weekday {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

#[cfg(test)]
mod tests {
  use crate::calendar::Weekday;

  #[test]
  fn from_day_number() {
    assert_eq!(Weekday::from_day_number(-8), Weekday::Sunday);
    assert_eq!(Weekday::from_day_number(-1), Weekday::Sunday);
    assert_eq!(Weekday::from_day_number(0), Weekday::Monday);
    assert_eq!(Weekday::from_day_number(1), Weekday::Tuesday);
    assert_eq!(Weekday::from_day_number(5), Weekday::Saturday);
    assert_eq!(Weekday::from_day_number(6), Weekday::Sunday);
    assert_eq!(Weekday::from_day_number(7), Weekday::Monday);
  }

  #[test]
  fn from_name_relaxed() {
    assert_eq!(Weekday::from_name_relaxed(b"Monday, 12").unwrap(), (Weekday::Monday, &b", 12"[..]));
    assert_eq!(Weekday::from_name_relaxed(b"Mon, 12").unwrap(), (Weekday::Monday, &b", 12"[..]));
    assert_eq!(Weekday::from_name_relaxed(b"Wed").unwrap(), (Weekday::Wednesday, &b""[..]));
    assert!(Weekday::from_name_relaxed(b"Mo").is_err());
    assert!(Weekday::from_name_relaxed(b"Xyz").is_err());
  }

  #[test]
  fn names_and_numbers() {
    for num in 0..7 {
      let weekday = Weekday::from_num(num).unwrap();
      assert_eq!(weekday.num(), num);
      assert_eq!(Weekday::from_short_name(weekday.short_name().as_bytes()).unwrap(), weekday);
    }
    assert!(Weekday::from_num(7).is_err());
  }
}
