pub(crate) mod calendar_token;
pub(crate) mod parsed_data;
pub(crate) mod push;

use crate::calendar::{CalendarError, CalendarToken};
use arrayvec::ArrayVec;

/// Maximum number of tokens a layout can hold.
pub const MAX_TOKENS: usize = 16;

/// Parses a strftime-like layout, for example `%Y-%m-%d`, into the corresponding tokens.
///
/// See [`CalendarToken`] for the supported directives and literals.
#[inline]
pub fn parse_bytes_into_tokens(
  bytes: impl IntoIterator<Item = u8>,
) -> crate::Result<ArrayVec<CalendarToken, MAX_TOKENS>> {
  let mut tokens = ArrayVec::new();
  let mut iter = bytes.into_iter();
  while let Some(first) = iter.next() {
    let token = match first {
      b'%' => {
        let Some(second) = iter.next() else {
          return Err(CalendarError::InvalidParsingFormat.into());
        };
        if let b'f' | b'z' = second {
          let Some(third) = iter.next() else {
            return Err(CalendarError::InvalidParsingFormat.into());
          };
          CalendarToken::try_from([second, third])?
        } else {
          CalendarToken::try_from([b'%', second])?
        }
      }
      b'G' => {
        let (Some(b'M'), Some(b'T')) = (iter.next(), iter.next()) else {
          return Err(CalendarError::InvalidParsingFormat.into());
        };
        CalendarToken::Gmt
      }
      _ => CalendarToken::try_from([0, first])?,
    };
    tokens.try_push(token)?;
  }
  Ok(tokens)
}

#[cfg(test)]
mod tests {
  use crate::calendar::{CalendarError, CalendarToken, parse_bytes_into_tokens};

  #[test]
  fn layouts() {
    assert_eq!(
      parse_bytes_into_tokens(*b"%Y-%m-%d").unwrap().as_slice(),
      &[
        CalendarToken::FourDigitYear,
        CalendarToken::Dash,
        CalendarToken::TwoDigitMonth,
        CalendarToken::Dash,
        CalendarToken::TwoDigitDay
      ]
    );
    assert_eq!(
      parse_bytes_into_tokens(*b"%a, %e %b %y GMT").unwrap().as_slice(),
      &[
        CalendarToken::AbbreviatedWeekdayName,
        CalendarToken::Comma,
        CalendarToken::Space,
        CalendarToken::TwoSpaceDay,
        CalendarToken::Space,
        CalendarToken::AbbreviatedMonthName,
        CalendarToken::Space,
        CalendarToken::TwoDigitYear,
        CalendarToken::Space,
        CalendarToken::Gmt
      ]
    );
    assert_eq!(
      parse_bytes_into_tokens(*b"%H:%M:%S%f?%z?").unwrap().as_slice(),
      &[
        CalendarToken::TwoDigitHour,
        CalendarToken::Colon,
        CalendarToken::TwoDigitMinute,
        CalendarToken::Colon,
        CalendarToken::TwoDigitSecond,
        CalendarToken::DotNano,
        CalendarToken::TimeZone
      ]
    );
  }

  #[test]
  fn invalid_layouts() {
    assert!(matches!(
      parse_bytes_into_tokens(*b"%"),
      Err(crate::Error::CalendarError(CalendarError::InvalidParsingFormat))
    ));
    assert!(parse_bytes_into_tokens(*b"%f").is_err());
    assert!(parse_bytes_into_tokens(*b"GM").is_err());
    assert!(parse_bytes_into_tokens(*b"%Q").is_err());
    assert!(parse_bytes_into_tokens(*b"Y").is_err());
    assert!(parse_bytes_into_tokens(*b"%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y%Y").is_err());
  }
}
