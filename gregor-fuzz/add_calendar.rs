//! Calendar arithmetic never leaves the supported range

#![no_main]

use gregor::calendar::Date;

libfuzzer_sys::fuzz_target!(|data: (Date, i64, i64, i64)| {
  let (date, years, months, days) = data;
  if let Ok(elem) = date.add_calendar(years, months, days) {
    assert!(elem >= Date::MIN && elem <= Date::MAX);
    assert_eq!(Date::from_day_number(elem.day_number()), Ok(elem));
  }
  if let Ok(elem) = date.add_days(days) {
    assert_eq!(elem.days_between(date), days);
  }
});
