/// Calendar error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarError {
  // Generic
  //
  /// The hardware returned an incorrect time value
  InvalidHardwareTime,
  /// A day can only have up to 24 hours
  InvalidHour {
    /// Invalid received number
    received: u8,
  },
  /// A hour can only have up to 60 minutes
  InvalidMinute {
    /// Invalid received number
    received: u8,
  },
  /// A year only has 12 months
  InvalidMonth {
    /// Invalid received number
    received: u8,
  },
  /// The day does not exist in the given month of the given year
  InvalidMonthDay {
    /// Invalid received number
    received: u8,
  },
  /// A second can only have up to `999_999_999` nanoseconds
  InvalidNanosecond {
    /// Invalid received number
    received: u32,
  },
  /// A minute can only have up to 60 seconds
  InvalidSecond {
    /// Invalid received number
    received: u8,
  },
  /// Time zone couldn't be constructed with the given minutes
  InvalidTimezoneMinutes {
    /// Expected number of minutes
    expected: Option<i16>,
    /// Invalid received number
    received: i16,
  },
  /// A weekday must be, for example, "Mon" or "Monday"
  InvalidWeekday,
  /// The resulting day number is outside of the `0001-01-01` ~ `9999-12-31` range, i.e.,
  /// `0` ~ `3_652_058`.
  OutOfRange {
    /// Received day number, saturated at the bounds of `i64`.
    received: i64,
  },

  // Parsing
  //
  /// Format contains more than one day
  DuplicatedParsingFormatDay,
  /// Format contains more than one hour
  DuplicatedParsingFormatHour,
  /// Format contains more than one minute
  DuplicatedParsingFormatMinute,
  /// Format contains more than one month
  DuplicatedParsingFormatMonth,
  /// Format contains more than one second
  DuplicatedParsingFormatSecond,
  /// Format contains more than one weekday
  DuplicatedParsingFormatWeekday,
  /// Format contains more than one year
  DuplicatedParsingFormatYear,
  /// Format contains more than one time zone
  DuplicatedTimeZone,
  /// Missing date or time parameters
  IncompleteParsingParams,
  /// Provided data does not match provided format
  InvalidParsingBytes,
  /// Provided data can not represent a single date
  InvalidParsingDate,
  /// Provided format contains invalid syntax
  InvalidParsingFormat,
  /// A literal from the provided format does not match in the provided data
  InvalidParsingLiteral,
  /// Provided data can not represent a timezone
  InvalidParsingTimezone,
  /// The provided weekday is wrong.
  InvalidParsingWeekday,
  /// Provided format contains unknown characters
  UnknownParsingFormat,
}
