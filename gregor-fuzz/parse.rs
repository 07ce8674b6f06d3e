//! Parsing arbitrary layouts and texts

#![no_main]

use gregor::calendar::Date;

libfuzzer_sys::fuzz_target!(|data: (&[u8], &[u8])| {
  let (layout, text) = data;
  if let Ok(date) = Date::parse(layout, text) {
    assert_eq!(Date::from_iso_8601(date.iso_8601().as_bytes()).ok(), Some(date));
  }
});
