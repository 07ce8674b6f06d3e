mod dyn_tz;
mod utc;

use arrayvec::ArrayString;
pub use dyn_tz::DynTz;
pub use utc::Utc;

/// Offset collaborator used to see an instant as a local civil date-time.
pub trait TimeZone: Copy {
  /// If the instance is of a literal `UTC` type.
  const IS_UTC: bool;

  /// Tries to create a new instance from the number of minutes.
  fn from_minutes(minutes: i16) -> crate::Result<Self>;

  /// ISO-8601 string representation
  fn iso_8601(self) -> ArrayString<6>;

  /// The number of minutes represented by this time zone
  fn minutes(&self) -> i16;
}
