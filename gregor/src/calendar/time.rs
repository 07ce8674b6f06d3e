#[cfg(test)]
mod tests;

use crate::calendar::{
  CalendarError, CalendarToken, MINUTES_PER_HOUR, NANOSECONDS_PER_SECOND, SECONDS_PER_DAY,
  SECONDS_PER_HOUR, SECONDS_PER_MINUTE, Utc,
  format::parsed_data::ParsedData,
  misc::{u8u32, u16u32},
  parse_bytes_into_tokens,
};
use arrayvec::ArrayString;
use core::fmt::{Debug, Display, Formatter, Write as _};

/// Clock time with nanosecond precision.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
  hour: u8,
  minute: u8,
  second: u8,
  nanosecond: u32,
}

impl Time {
  /// Instance with the maximum allowed value of `23:59:59.999_999_999`
  pub const MAX: Self = Self { hour: 23, minute: 59, second: 59, nanosecond: 999_999_999 };
  /// Instance with the minimum allowed value of `00:00:00.000_000_000`
  pub const ZERO: Self = Self { hour: 0, minute: 0, second: 0, nanosecond: 0 };

  /// New instance without nanosecond precision.
  #[inline]
  pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
    Self::from_hms_ns(hour, minute, second, 0)
  }

  /// New instance with nanosecond precision.
  #[inline]
  pub const fn from_hms_ns(
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
  ) -> Result<Self, CalendarError> {
    if hour >= 24 {
      return Err(CalendarError::InvalidHour { received: hour });
    }
    if minute >= MINUTES_PER_HOUR {
      return Err(CalendarError::InvalidMinute { received: minute });
    }
    if second >= SECONDS_PER_MINUTE {
      return Err(CalendarError::InvalidSecond { received: second });
    }
    if nanosecond >= NANOSECONDS_PER_SECOND {
      return Err(CalendarError::InvalidNanosecond { received: nanosecond });
    }
    Ok(Self { hour, minute, second, nanosecond })
  }

  /// Creates a new instance based on the string representation of the ISO-8601 standard.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[
      CalendarToken::TwoDigitHour,
      CalendarToken::Colon,
      CalendarToken::TwoDigitMinute,
      CalendarToken::Colon,
      CalendarToken::TwoDigitSecond,
      CalendarToken::DotNano,
    ];
    Self::parse_tokens(bytes, TOKENS.iter().copied())
  }

  /// Splits the number of seconds elapsed since midnight into a clock time.
  ///
  /// Values greater than a day are reduced modulo `86_400`.
  #[allow(clippy::cast_possible_truncation, reason = "every component is reduced by its modulo")]
  #[inline]
  pub const fn from_seconds_since_mn(
    seconds: u32,
    nanosecond: u32,
  ) -> Result<Self, CalendarError> {
    let day_seconds = seconds % SECONDS_PER_DAY;
    let hour = (day_seconds / u16u32(SECONDS_PER_HOUR)) as u8;
    let minute = ((day_seconds % u16u32(SECONDS_PER_HOUR)) / u8u32(SECONDS_PER_MINUTE)) as u8;
    let second = (day_seconds % u8u32(SECONDS_PER_MINUTE)) as u8;
    Self::from_hms_ns(hour, minute, second, nanosecond)
  }

  /// Hours of a day, from `0` to `23`.
  #[inline]
  pub const fn hour(self) -> u8 {
    self.hour
  }

  /// ISO-8601 string representation. Trailing zeros of the fraction are omitted.
  #[inline]
  pub fn iso_8601(self) -> ArrayString<18> {
    let mut string = ArrayString::new();
    let _rslt0 = write!(string, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
    if self.nanosecond > 0 {
      let mut fraction = self.nanosecond;
      let mut digits: usize = 9;
      while fraction % 10 == 0 {
        fraction /= 10;
        digits = digits.wrapping_sub(1);
      }
      let _rslt1 = write!(string, ".{fraction:0digits$}");
    }
    string
  }

  /// Minutes of a hour, from `0` to `59`.
  #[inline]
  pub const fn minute(self) -> u8 {
    self.minute
  }

  /// Nanoseconds of a second, from `0` to `999_999_999`.
  #[inline]
  pub const fn nanosecond(self) -> u32 {
    self.nanosecond
  }

  /// Parses `text` according to a strftime-like `layout` such as `%H:%M`.
  ///
  /// See [`CalendarToken`] for more information.
  #[inline]
  pub fn parse(layout: &[u8], text: &[u8]) -> crate::Result<Self> {
    Self::parse_tokens(text, parse_bytes_into_tokens(layout.iter().copied())?)
  }

  /// Parses a sequence of bytes according to the specified tokens.
  #[inline]
  pub fn parse_tokens(
    bytes: &[u8],
    tokens: impl IntoIterator<Item = CalendarToken>,
  ) -> crate::Result<Self> {
    let ParsedData::<Utc>::Time(elem) = ParsedData::new(bytes, tokens)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// Seconds of a minute, from `0` to `59`.
  #[inline]
  pub const fn second(self) -> u8 {
    self.second
  }

  /// The total number of seconds since midnight (00:00:00).
  #[inline]
  pub const fn seconds_since_mn(self) -> u32 {
    let mut rslt = u8u32(self.hour).wrapping_mul(u16u32(SECONDS_PER_HOUR));
    rslt = rslt.wrapping_add(u8u32(self.minute).wrapping_mul(u8u32(SECONDS_PER_MINUTE)));
    rslt.wrapping_add(u8u32(self.second))
  }

  /// Returns a new instance with the number of nanoseconds totally erased.
  #[inline]
  #[must_use]
  pub const fn trunc_to_sec(self) -> Self {
    let mut new = self;
    new.nanosecond = 0;
    new
  }
}

impl Debug for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Default for Time {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::Time;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Time;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted time string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Time::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}
