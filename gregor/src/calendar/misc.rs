// FIXME(stable): Constant traits

pub(crate) const fn boolusize(val: bool) -> usize {
  val as usize
}

pub(crate) const fn i64i128(val: i64) -> i128 {
  val as i128
}

pub(crate) const fn u8i64(val: u8) -> i64 {
  val as i64
}

pub(crate) const fn u8i128(val: u8) -> i128 {
  val as i128
}

pub(crate) const fn u8u16(val: u8) -> u16 {
  val as u16
}

pub(crate) const fn u8u32(val: u8) -> u32 {
  val as u32
}

pub(crate) const fn u16i128(val: u16) -> i128 {
  val as i128
}

pub(crate) const fn u16i64(val: u16) -> i64 {
  val as i64
}

pub(crate) const fn u16u32(val: u16) -> u32 {
  val as u32
}

pub(crate) const fn u32i64(val: u32) -> i64 {
  val as i64
}

pub(crate) const fn u32i128(val: u32) -> i128 {
  val as i128
}

/// Converts `val` into an `i64`, saturating at the bounds.
pub(crate) const fn i128i64_saturating(val: i128) -> i64 {
  if val > i64i128(i64::MAX) {
    i64::MAX
  } else if val < i64i128(i64::MIN) {
    i64::MIN
  } else {
    #[allow(clippy::cast_possible_truncation, reason = "bounds were checked above")]
    let rslt = val as i64;
    rslt
  }
}
