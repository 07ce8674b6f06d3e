use crate::calendar::{Clock as _, DateTime, SystemClock};
use core::time::Duration;
use std::fmt::Write;
use tracing_tree::time::FormatTime;

/// Prints the current UTC date-time of each event.
#[derive(Debug)]
pub struct TracingTreeTimer;

impl FormatTime for TracingTreeTimer {
  #[inline]
  fn format_time(&self, w: &mut impl Write) -> core::fmt::Result {
    w.write_str(SystemClock.now().unwrap_or(DateTime::EPOCH).iso_8601().as_str())
  }

  #[inline]
  fn style_timestamp(&self, _: bool, elapsed: Duration, w: &mut impl Write) -> std::fmt::Result {
    let millis = elapsed.as_millis();
    let secs = u128::from(elapsed.as_secs());
    let (num, unit) = if millis < 1000 {
      (millis, "ms")
    } else if secs < 60 {
      (secs, "s ")
    } else {
      (secs / 60, "m ")
    };
    w.write_fmt(format_args!("{num:>3}{unit}"))
  }
}
