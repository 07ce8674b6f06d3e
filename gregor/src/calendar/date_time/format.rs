use crate::calendar::{
  CalendarError, CalendarToken, DateTime, TimeZone,
  format::{parsed_data::ParsedData, push::push_date_token},
  parse_bytes_into_tokens,
};
use arrayvec::ArrayString;
use core::fmt::Write as _;

impl<TZ> DateTime<TZ>
where
  TZ: TimeZone,
{
  /// Creates a new instance based on the string representation of the ISO-8601 standard.
  ///
  /// The fraction of a second is optional and so is the offset, which defaults to zero.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[
      CalendarToken::FourDigitYear,
      CalendarToken::Dash,
      CalendarToken::TwoDigitMonth,
      CalendarToken::Dash,
      CalendarToken::TwoDigitDay,
      CalendarToken::Separator,
      CalendarToken::TwoDigitHour,
      CalendarToken::Colon,
      CalendarToken::TwoDigitMinute,
      CalendarToken::Colon,
      CalendarToken::TwoDigitSecond,
      CalendarToken::DotNano,
      CalendarToken::TimeZone,
    ];
    Self::parse_tokens(bytes, TOKENS.iter().copied())
  }

  /// Parses `text` according to a strftime-like `layout` such as `%Y-%m-%d %H:%M:%S`.
  #[inline]
  pub fn parse(layout: &[u8], text: &[u8]) -> crate::Result<Self> {
    Self::parse_tokens(text, parse_bytes_into_tokens(layout.iter().copied())?)
  }

  /// Parses a sequence of bytes according to the specified tokens.
  ///
  /// See [`CalendarToken`] for more information.
  #[inline]
  pub fn parse_tokens(
    bytes: &[u8],
    tokens: impl IntoIterator<Item = CalendarToken>,
  ) -> crate::Result<Self> {
    let ParsedData::DateTime(elem) = ParsedData::new(bytes, tokens)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// Creates a string representation based on the given `tokens`.
  ///
  /// See [`CalendarToken`] for more information.
  #[inline]
  pub fn format<const N: usize>(
    &self,
    tokens: impl IntoIterator<Item = CalendarToken>,
  ) -> crate::Result<ArrayString<N>> {
    let mut string = ArrayString::new();
    let time = self.time();
    for token in tokens {
      match token {
        CalendarToken::DotNano => {
          let iso = time.iso_8601();
          if let Some(idx) = iso.find('.') {
            string.try_push_str(iso.get(idx..).unwrap_or_default())?;
          }
        }
        CalendarToken::TimeZone => string.try_push_str(&self.time_zone().iso_8601())?,
        CalendarToken::TwoDigitHour => write!(string, "{:02}", time.hour())?,
        CalendarToken::TwoDigitMinute => write!(string, "{:02}", time.minute())?,
        CalendarToken::TwoDigitSecond => write!(string, "{:02}", time.second())?,
        _ => push_date_token(self.date(), token, &mut string)?,
      }
    }
    Ok(string)
  }
}
