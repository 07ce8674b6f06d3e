use crate::calendar::CalendarError;
use alloc::boxed::Box;
use core::fmt::{Debug, Display, Formatter};

#[cfg(target_pointer_width = "64")]
const _: () = {
  assert!(size_of::<Error>() <= 24);
};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External - Misc
  //
  /// `atoi` couldn't convert the provided bytes into a number.
  AtoiInvalidBytes,
  /// Error returned by `chrono` when a layout does not match the input.
  #[cfg(feature = "chrono")]
  ChronoParseError(chrono::ParseError),
  /// Global `tracing` subscriber was already installed.
  #[cfg(feature = "_tracing-tree")]
  TryInitError(tracing_subscriber::util::TryInitError),

  // External - Std
  //
  /// A fixed-capacity string or vector is full.
  ArrayCapacity,
  /// See [`core::fmt::Error`].
  Fmt(core::fmt::Error),
  /// See [`core::num::ParseIntError`].
  ParseIntError(core::num::ParseIntError),
  /// See [`core::num::TryFromIntError`].
  TryFromIntError(core::num::TryFromIntError),
  /// See [`core::str::Utf8Error`].
  Utf8Error(core::str::Utf8Error),
  /// See [`VarError`].
  #[cfg(feature = "std")]
  VarError(VarError),

  // Internal
  //
  /// See [`CalendarError`].
  CalendarError(CalendarError),
  /// A textual date couldn't be parsed. Holds the underlying cause.
  ParseError(Box<Error>),
}

impl Error {
  /// Wraps `self` into a [`Error::ParseError`] unless it already is one.
  #[inline]
  #[must_use]
  pub fn into_parse_error(self) -> Self {
    if let Self::ParseError(_) = self { self } else { Self::ParseError(Box::new(self)) }
  }

  /// Returns the innermost cause of a [`Error::ParseError`] or `self` otherwise.
  #[inline]
  pub fn root_cause(&self) -> &Self {
    let mut this = self;
    while let Self::ParseError(inner) = this {
      this = inner;
    }
    this
  }
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl<T> From<arrayvec::CapacityError<T>> for Error {
  #[inline]
  fn from(_: arrayvec::CapacityError<T>) -> Self {
    Self::ArrayCapacity
  }
}

#[cfg(feature = "chrono")]
impl From<chrono::ParseError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: chrono::ParseError) -> Self {
    Self::ChronoParseError(from)
  }
}

impl From<core::fmt::Error> for Error {
  #[inline]
  fn from(from: core::fmt::Error) -> Self {
    Self::Fmt(from)
  }
}

impl From<core::num::ParseIntError> for Error {
  #[inline]
  fn from(from: core::num::ParseIntError) -> Self {
    Self::ParseIntError(from)
  }
}

#[cfg(feature = "std")]
impl From<std::env::VarError> for Error {
  #[inline]
  fn from(from: std::env::VarError) -> Self {
    Self::VarError(match from {
      std::env::VarError::NotPresent => VarError::NotPresent,
      std::env::VarError::NotUnicode(_) => VarError::NotUnicode,
    })
  }
}

#[cfg(feature = "_tracing-tree")]
impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

impl From<core::num::TryFromIntError> for Error {
  #[inline]
  fn from(from: core::num::TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}

impl From<core::str::Utf8Error> for Error {
  #[inline]
  fn from(from: core::str::Utf8Error) -> Self {
    Self::Utf8Error(from)
  }
}

// Internal

impl From<CalendarError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}

/// The error type for operations interacting with environment variables.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub enum VarError {
  /// The specified environment variable was not present in the current
  /// process's environment.
  NotPresent,

  /// The specified environment variable was found, but it did not contain
  /// valid unicode data.
  NotUnicode,
}
