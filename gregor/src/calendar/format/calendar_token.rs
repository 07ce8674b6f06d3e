use crate::calendar::CalendarError;

/// Unit of a layout, produced by [`crate::calendar::parse_bytes_into_tokens`].
///
/// # Date directives
///
/// | Directive | Example  | Meaning                                            |
/// | --------- | -------- | -------------------------------------------------- |
/// | `%Y`      | `2001`   | Four-digit year                                    |
/// | `%y`      | `01`     | Two-digit year of the 21st century                 |
/// | `%m`      | `07`     | Two-digit month                                    |
/// | `%b`      | `Jul`    | Abbreviated month name                             |
/// | `%d`      | `08`     | Two-digit day of the month                         |
/// | `%e`      | ` 8`     | Space-padded day of the month                      |
/// | `%a`      | `Sun`    | Abbreviated weekday name                           |
/// | `%A`      | `Sunday` | Full weekday name                                  |
/// | `%z?`     | `-03:00` | Optional UTC offset (`Z`, `±HH`, `±HHMM`, `±HH:MM`) |
///
/// # Time directives
///
/// | Directive | Example  | Meaning                                   |
/// | --------- | -------- | ----------------------------------------- |
/// | `%H`      | `00`     | Two-digit hour                            |
/// | `%M`      | `59`     | Two-digit minute                          |
/// | `%S`      | `59`     | Two-digit second                          |
/// | `%f?`     | `.12345` | Optional fraction of a second, 1-9 digits |
///
/// # Literals
///
/// `:`, `,`, `-`, `/`, ` `, `T` and `GMT`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CalendarToken {
  /// `%b`
  AbbreviatedMonthName,
  /// `%a`
  AbbreviatedWeekdayName,
  /// `:`
  Colon,
  /// `,`
  Comma,
  /// `-`
  Dash,
  /// `%f?`
  DotNano,
  /// `%Y`
  FourDigitYear,
  /// `%A`
  FullWeekdayName,
  /// `GMT`
  Gmt,
  /// `T`
  Separator,
  /// `/`
  Slash,
  /// ` `
  Space,
  /// `%z?`
  TimeZone,
  /// `%d`
  TwoDigitDay,
  /// `%H`
  TwoDigitHour,
  /// `%M`
  TwoDigitMinute,
  /// `%m`
  TwoDigitMonth,
  /// `%S`
  TwoDigitSecond,
  /// `%y`
  TwoDigitYear,
  /// `%e`
  TwoSpaceDay,
}

/// The first byte is `%` for single-letter directives, the directive letter for two-letter ones
/// and `0` for literals.
impl TryFrom<[u8; 2]> for CalendarToken {
  type Error = crate::Error;

  #[inline]
  fn try_from(value: [u8; 2]) -> Result<Self, Self::Error> {
    Ok(match value {
      [b'%', b'b'] => Self::AbbreviatedMonthName,
      [b'%', b'a'] => Self::AbbreviatedWeekdayName,
      [b'%', b'Y'] => Self::FourDigitYear,
      [b'%', b'A'] => Self::FullWeekdayName,
      [b'%', b'd'] => Self::TwoDigitDay,
      [b'%', b'H'] => Self::TwoDigitHour,
      [b'%', b'M'] => Self::TwoDigitMinute,
      [b'%', b'm'] => Self::TwoDigitMonth,
      [b'%', b'S'] => Self::TwoDigitSecond,
      [b'%', b'y'] => Self::TwoDigitYear,
      [b'%', b'e'] => Self::TwoSpaceDay,
      [b'f', b'?'] => Self::DotNano,
      [b'z', b'?'] => Self::TimeZone,
      [0, b':'] => Self::Colon,
      [0, b','] => Self::Comma,
      [0, b'-'] => Self::Dash,
      [0, b'T'] => Self::Separator,
      [0, b'/'] => Self::Slash,
      [0, b' '] => Self::Space,
      [0, b'Z'] => Self::TimeZone,
      _ => return Err(CalendarError::UnknownParsingFormat.into()),
    })
  }
}
