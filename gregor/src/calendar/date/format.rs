use crate::calendar::{
  CalendarError, CalendarToken, Date, DynTz,
  format::{parsed_data::ParsedData, push::push_date_token},
  parse_bytes_into_tokens,
};
use arrayvec::ArrayString;
use core::fmt::Write as _;

impl Date {
  /// Creates a new instance from the fixed `YYYY-MM-DD` representation.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[
      CalendarToken::FourDigitYear,
      CalendarToken::Dash,
      CalendarToken::TwoDigitMonth,
      CalendarToken::Dash,
      CalendarToken::TwoDigitDay,
    ];
    Self::parse_tokens(bytes, TOKENS.iter().copied())
  }

  /// Fixed `YYYY-MM-DD` representation with zero-padded fields.
  #[inline]
  pub fn iso_8601(self) -> ArrayString<10> {
    let (year, month, day) = self.ymd();
    let mut string = ArrayString::new();
    let _rslt = write!(string, "{year:04}-{:02}-{day:02}", month.num());
    string
  }

  /// Parses `text` according to a strftime-like `layout` such as `%d/%m/%Y`.
  ///
  /// Layouts that also describe a clock time are accepted and the time is discarded. Any failure,
  /// including a date outside of the supported range, is reported as a
  /// [`crate::Error::ParseError`].
  ///
  /// ```
  /// use gregor::calendar::Date;
  ///
  /// let layout = b"%a, %d %b %Y %H:%M:%S GMT";
  /// let date = Date::parse(layout, b"Wed, 11 Oct 1989 10:20:30 GMT").unwrap();
  /// assert_eq!(date.to_string(), "1989-10-11");
  /// assert!(Date::parse(b"%Y-%m-%d", b"1989-02-29").is_err());
  /// ```
  #[inline]
  pub fn parse(layout: &[u8], text: &[u8]) -> crate::Result<Self> {
    let tokens = parse_bytes_into_tokens(layout.iter().copied()).map_err(|err| {
      _debug!(?err, "Invalid layout");
      err.into_parse_error()
    })?;
    Self::parse_tokens(text, tokens)
  }

  /// Parses a sequence of bytes according to the specified tokens.
  ///
  /// See [`Self::parse`].
  #[inline]
  pub fn parse_tokens(
    bytes: &[u8],
    tokens: impl IntoIterator<Item = CalendarToken>,
  ) -> crate::Result<Self> {
    let rslt = match ParsedData::<DynTz>::new(bytes, tokens) {
      Ok(ParsedData::Date(elem)) => Ok(elem),
      Ok(ParsedData::DateTime(elem)) => Date::from_date_time(&elem),
      Ok(ParsedData::Time(_)) => Err(CalendarError::InvalidParsingDate.into()),
      Err(err) => Err(err),
    };
    rslt.map_err(|err: crate::Error| {
      _debug!(?err, "Unable to parse date");
      err.into_parse_error()
    })
  }

  /// Parses `text` with `chrono`'s `strftime` implementation.
  ///
  /// Failures are reported as a [`crate::Error::ParseError`].
  #[cfg(feature = "chrono")]
  #[inline]
  pub fn parse_chrono(layout: &str, text: &str) -> crate::Result<Self> {
    chrono::NaiveDate::parse_from_str(text, layout)
      .map_err(crate::Error::from)
      .and_then(Self::try_from)
      .map_err(|err| {
        _debug!(?err, "Unable to parse date with chrono");
        err.into_parse_error()
      })
  }

  /// Creates a string representation based on the given `tokens`.
  ///
  /// Tokens that describe a clock time are rejected. See [`CalendarToken`] for more information.
  #[inline]
  pub fn format<const N: usize>(
    &self,
    tokens: impl IntoIterator<Item = CalendarToken>,
  ) -> crate::Result<ArrayString<N>> {
    let mut string = ArrayString::new();
    for token in tokens {
      push_date_token(*self, token, &mut string)?;
    }
    Ok(string)
  }
}
