use crate::calendar::{
  CalendarError, Date, DateTime, DynTz, FixedClock, Month, Time, TimeZone as _, Utc, Weekday,
  parse_bytes_into_tokens,
};

fn _1989_10_11() -> Date {
  instance(1989, 10, 11)
}

fn _2025_04_20() -> Date {
  instance(2025, 4, 20)
}

#[track_caller]
fn instance(year: u16, month: u8, day: u8) -> Date {
  Date::from_ymd(year, Month::from_num(month).unwrap(), day).unwrap()
}

fn out_of_range(received: i64) -> Result<Date, CalendarError> {
  Err(CalendarError::OutOfRange { received })
}

#[test]
fn add_calendar() {
  assert_eq!(instance(1989, 2, 19).add_calendar(1, 0, 0), Ok(instance(1990, 2, 19)));
  assert_eq!(instance(2021, 1, 1).add_calendar(0, 3, 0), Ok(instance(2021, 4, 1)));
  assert_eq!(instance(2021, 2, 10).add_calendar(0, 0, 10), Ok(instance(2021, 2, 20)));
  assert_eq!(instance(2021, 10, 31).add_calendar(0, 1, 0), Ok(instance(2021, 12, 1)));
  assert_eq!(instance(2020, 2, 29).add_calendar(1, 0, 0), Ok(instance(2021, 3, 1)));
  assert_eq!(instance(2020, 2, 29).add_calendar(4, 0, 0), Ok(instance(2024, 2, 29)));
  assert_eq!(instance(2021, 1, 31).add_calendar(0, -1, 0), Ok(instance(2020, 12, 31)));
  assert_eq!(instance(2021, 3, 31).add_calendar(0, -1, 0), Ok(instance(2021, 3, 3)));
  assert_eq!(instance(2021, 5, 15).add_calendar(0, -5, 0), Ok(instance(2020, 12, 15)));
  assert_eq!(instance(2021, 5, 15).add_calendar(0, 20, -15), Ok(instance(2022, 12, 31)));
  assert_eq!(instance(2021, 5, 15).add_calendar(1, -12, 0), Ok(instance(2021, 5, 15)));
  assert_eq!(instance(2000, 1, 1).add_calendar(0, -12_000, 0), Ok(instance(1000, 1, 1)));
  assert_eq!(_2025_04_20().add_calendar(0, 0, 0), Ok(_2025_04_20()));
}

#[test]
fn add_calendar_out_of_range() {
  assert!(matches!(Date::MAX.add_calendar(0, 0, 1), Err(CalendarError::OutOfRange { .. })));
  assert!(matches!(Date::MAX.add_calendar(0, 1, 0), Err(CalendarError::OutOfRange { .. })));
  assert!(matches!(Date::MIN.add_calendar(-1, 0, 0), Err(CalendarError::OutOfRange { .. })));
  assert!(matches!(Date::MIN.add_calendar(0, -1, 0), Err(CalendarError::OutOfRange { .. })));
  assert!(matches!(
    Date::MIN.add_calendar(i64::MAX, i64::MAX, i64::MAX),
    Err(CalendarError::OutOfRange { received: i64::MAX })
  ));
  assert!(matches!(
    Date::MAX.add_calendar(i64::MIN, i64::MIN, i64::MIN),
    Err(CalendarError::OutOfRange { received: i64::MIN })
  ));
  // Out-of-range intermediate years are fine as long as the final date is valid
  assert_eq!(Date::MAX.add_calendar(1, -12, 0), Ok(Date::MAX));
  assert_eq!(Date::MIN.add_calendar(0, 0, -1_000), out_of_range(-1_000));
}

#[test]
fn add_days() {
  assert_eq!(instance(1989, 10, 25).add_days(10), Ok(instance(1989, 11, 4)));
  assert_eq!(instance(1434, 1, 1).add_days(222), Ok(instance(1434, 8, 11)));
  assert_eq!(instance(2055, 5, 22).add_days(123), Ok(instance(2055, 9, 22)));
  assert_eq!(instance(2014, 1, 1).add_days(-1), Ok(instance(2013, 12, 31)));
  assert_eq!(instance(2014, 1, 1).add_days(365 * 4 + 1), Ok(instance(2018, 1, 1)));
  assert_eq!(instance(2014, 1, 1).add_days(365 * 400 + 97), Ok(instance(2414, 1, 1)));
  assert_eq!(_2025_04_20().add_days(0), Ok(_2025_04_20()));
  assert_eq!(Date::MAX.add_days(1), out_of_range(3_652_059));
  assert_eq!(Date::MIN.add_days(-1), out_of_range(-1));
  assert_eq!(Date::MAX.add_days(i64::MAX), out_of_range(i64::MAX));
  assert_eq!(Date::MIN.add_days(i64::MIN), out_of_range(i64::MIN));
  assert_eq!(Date::MIN.sub_days(1), out_of_range(-1));
  assert_eq!(Date::MAX.sub_days(-1), out_of_range(3_652_059));
  assert_eq!(Date::MAX.sub_days(i64::MIN), out_of_range(i64::MAX));
  assert_eq!(Date::MIN.add_days(3_652_058), Ok(Date::MAX));
}

#[test]
fn comparisons() {
  let lhs = _1989_10_11();
  let rhs = _2025_04_20();
  assert!(lhs.is_before(rhs));
  assert!(rhs.is_after(lhs));
  assert!(lhs.is_equal(lhs));
  assert!(!lhs.is_equal(rhs));
  assert!(lhs < rhs);
  assert_eq!(rhs.days_between(lhs), 12_975);
  assert_eq!(lhs.days_between(rhs), -12_975);
  assert_eq!(rhs - lhs, 12_975);
  assert_eq!(Date::MAX - Date::MIN, 3_652_058);
}

#[test]
fn constants() {
  assert_eq!(Date::MIN.ymd(), (1, Month::January, 1));
  assert_eq!(Date::MAX.ymd(), (9999, Month::December, 31));
  assert_eq!(Date::EPOCH.ymd(), (1970, Month::January, 1));
  assert_eq!(Date::default(), Date::EPOCH);
  assert_eq!(Date::MIN.day_number(), 0);
  assert_eq!(Date::MAX.day_number(), 3_652_058);
  assert_eq!(_2025_04_20().day_number(), 739_360);
}

#[test]
fn day() {
  assert_eq!(_1989_10_11().day(), 11);
  assert_eq!(instance(1434, 1, 1).day(), 1);
  assert_eq!(instance(2055, 5, 22).day(), 22);
  assert_eq!(Date::MAX.day(), 31);
}

#[test]
fn day_of_year() {
  assert_eq!(instance(2022, 12, 31).day_of_year(), 365);
  assert_eq!(instance(2020, 12, 31).day_of_year(), 366);
  assert_eq!(instance(2021, 1, 1).day_of_year(), 1);
  assert_eq!(instance(2021, 2, 10).day_of_year(), 41);
  assert_eq!(_2025_04_20().day_of_year(), 110);
}

#[test]
fn from_civil() {
  assert_eq!(Date::from_civil(2021, 11, 31), Ok(instance(2021, 12, 1)));
  assert_eq!(Date::from_civil(2021, 13, 1), Ok(instance(2022, 1, 1)));
  assert_eq!(Date::from_civil(2021, 0, 1), Ok(instance(2020, 12, 1)));
  assert_eq!(Date::from_civil(2021, 3, 0), Ok(instance(2021, 2, 28)));
  assert_eq!(Date::from_civil(0, 12, 31), out_of_range(-1));
  assert_eq!(Date::from_civil(10_000, 1, 1), out_of_range(3_652_059));
}

#[test]
fn from_day_number() {
  assert_eq!(Date::from_day_number(739_360), Ok(_2025_04_20()));
  assert_eq!(Date::from_day_number(-1), out_of_range(-1));
  assert_eq!(Date::from_day_number(3_652_059), out_of_range(3_652_059));
  assert!(Date::try_from(0i64).is_ok());
  assert_eq!(i64::from(Date::MAX), 3_652_058);
}

#[test]
fn from_ymd() {
  assert_eq!(
    Date::from_ymd(2021, Month::February, 29),
    Err(CalendarError::InvalidMonthDay { received: 29 })
  );
  assert_eq!(
    Date::from_ymd(2021, Month::April, 31),
    Err(CalendarError::InvalidMonthDay { received: 31 })
  );
  assert_eq!(
    Date::from_ymd(2021, Month::May, 0),
    Err(CalendarError::InvalidMonthDay { received: 0 })
  );
  assert!(Date::from_ymd(2020, Month::February, 29).is_ok());
  assert_eq!(Date::from_ymd(0, Month::January, 1), out_of_range(-366));
  assert_eq!(Date::from_ymd(10_000, Month::January, 1), out_of_range(3_652_059));
}

#[test]
fn iso_8601() {
  assert_eq!(_1989_10_11().iso_8601().as_str(), "1989-10-11");
  assert_eq!(Date::MIN.iso_8601().as_str(), "0001-01-01");
  assert_eq!(Date::MAX.iso_8601().as_str(), "9999-12-31");
  assert_eq!(instance(476, 9, 4).iso_8601().as_str(), "0476-09-04");
  assert_eq!(Date::from_iso_8601(b"1989-10-11").unwrap(), _1989_10_11());
  assert_eq!(alloc::format!("{}", _1989_10_11()), "1989-10-11");
  assert_eq!(alloc::format!("{:?}", _1989_10_11()), "1989-10-11");
}

#[test]
fn month() {
  assert_eq!(_1989_10_11().month(), Month::October);
  assert_eq!(instance(1434, 1, 1).month(), Month::January);
  assert_eq!(instance(2055, 5, 22).month(), Month::May);
}

#[test]
fn parse() {
  assert_eq!(Date::parse(b"%Y-%m-%d", b"1989-10-11").unwrap(), _1989_10_11());
  assert_eq!(Date::parse(b"%d/%m/%Y", b"11/10/1989").unwrap(), _1989_10_11());
  assert_eq!(Date::parse(b"%A, %e %b %y", b"Sunday, 20 Apr 25").unwrap(), _2025_04_20());
  assert_eq!(
    Date::parse(b"%Y-%m-%dT%H:%M:%S%z?", b"2025-04-20T23:30:00-03:00").unwrap(),
    instance(2025, 4, 21)
  );
  assert_eq!(
    Date::parse(b"%Y-%m-%dT%H:%M:%S%z?", b"2025-04-21T01:30:00+03:00").unwrap(),
    _2025_04_20()
  );
}

#[test]
fn parse_errors() {
  let date_time: &[u8] = b"%Y-%m-%dT%H:%M:%S%z?";
  let cases: [(&[u8], &[u8], crate::Error); 10] = [
    (b"%Y-%m-%d", b"1989-02-29", CalendarError::InvalidMonthDay { received: 29 }.into()),
    (b"%Y-%m-%d", b"0000-01-01", CalendarError::OutOfRange { received: -366 }.into()),
    (b"%Y-%m-%d", b"1989-13-01", CalendarError::InvalidMonth { received: 13 }.into()),
    (b"%Y-%m-%d", b"1989/10/11", CalendarError::InvalidParsingLiteral.into()),
    (b"%Y-%m-%d", b"1989-10-11 ", CalendarError::InvalidParsingBytes.into()),
    (b"%Y-%m-%d", b"+989-10-11", CalendarError::InvalidParsingBytes.into()),
    (b"%a %Y-%m-%d", b"Mon 1989-10-11", CalendarError::InvalidParsingWeekday.into()),
    (b"%Q", b"1989-10-11", CalendarError::UnknownParsingFormat.into()),
    (
      date_time,
      b"9999-12-31T23:00:00-02:00",
      CalendarError::OutOfRange { received: 3_652_059 }.into(),
    ),
    (date_time, b"0001-01-01T01:00:00+02:00", CalendarError::OutOfRange { received: -1 }.into()),
  ];
  for (layout, text, cause) in cases {
    let err = Date::parse(layout, text).unwrap_err();
    assert!(matches!(err, crate::Error::ParseError(_)), "{err}");
    assert_eq!(alloc::format!("{:?}", err.root_cause()), alloc::format!("{cause:?}"));
  }
  assert!(matches!(Date::parse(b"%H:%M", b"10:20"), Err(crate::Error::ParseError(_))));
  assert!(matches!(Date::from_iso_8601(b"1989-10-1"), Err(crate::Error::ParseError(_))));
}

#[test]
fn parse_and_format() {
  let cases: [(&[u8], &[u8]); 5] = [
    (b"%a, %d %b %Y", b"Mon, 12 May 2025"),
    (b"%A, %d-%b-%y", b"Monday, 12-May-25"),
    (b"%a, %d-%b-%Y", b"Mon, 12-May-2025"),
    (b"%Y-%m-%d", b"1999-02-03"),
    (b"%e/%m/%Y", b" 3/02/1999"),
  ];
  for (layout, data) in cases {
    let tokens = parse_bytes_into_tokens(layout.iter().copied()).unwrap();
    let date = Date::parse_tokens(data, tokens.clone()).unwrap();
    assert_eq!(date.format::<32>(tokens).unwrap().as_bytes(), data);
  }
  let tokens = parse_bytes_into_tokens(*b"%H").unwrap();
  assert!(_2025_04_20().format::<32>(tokens).is_err());
  let tokens = parse_bytes_into_tokens(*b"%A %A").unwrap();
  assert!(_2025_04_20().format::<8>(tokens).is_err());
}

#[test]
fn since_and_today() {
  let now = DateTime::new(_2025_04_20(), Time::from_hms(1, 0, 0).unwrap(), Utc);
  let clock = FixedClock(now);
  assert_eq!(Date::today(&clock).unwrap(), _2025_04_20());
  assert_eq!(_1989_10_11().since(&clock).unwrap(), 12_975);
  assert_eq!(_2025_04_20().since(&clock).unwrap(), 0);
  let (seconds, _) = now.timestamp_secs_and_ns();
  let tz = DynTz::new(-120).unwrap();
  let local = FixedClock(DateTime::from_timestamp_secs_and_ns(seconds, 0, tz).unwrap());
  assert_eq!(Date::today(&local).unwrap(), instance(2025, 4, 19));
}

#[test]
fn to_date_time() {
  let date_time = instance(2022, 2, 5).to_date_time(2, 0, 5, 0, Utc).unwrap();
  assert_eq!(date_time.iso_8601().as_str(), "2022-02-05T02:00:05Z");
  let date_time = instance(1989, 4, 22).to_date_time(11, 10, 55, 0, Utc).unwrap();
  assert_eq!(date_time.iso_8601().as_str(), "1989-04-22T11:10:55Z");
  let tz = DynTz::new(60).unwrap();
  let date_time = instance(1989, 4, 22).to_date_time(0, 30, 0, 0, tz).unwrap();
  assert_eq!(date_time.date(), instance(1989, 4, 22));
  assert_eq!(date_time.time_zone().minutes(), 60);
  assert_eq!(Date::from_date_time(&date_time).unwrap(), instance(1989, 4, 21));
  let date_time = instance(2025, 4, 20).to_date_time(23, 30, 0, 0, DynTz::new(-180).unwrap());
  assert_eq!(Date::from_date_time(&date_time.unwrap()).unwrap(), instance(2025, 4, 21));
  let date_time = Date::MAX.to_date_time(23, 0, 0, 0, DynTz::new(-120).unwrap()).unwrap();
  let err = Date::from_date_time(&date_time).unwrap_err();
  assert!(matches!(err, crate::Error::CalendarError(CalendarError::OutOfRange { .. })));
  assert!(instance(1989, 4, 22).to_date_time(24, 0, 0, 0, Utc).is_err());
}

#[test]
fn weekday() {
  assert_eq!(instance(2022, 6, 19).weekday(), Weekday::Sunday);
  assert_eq!(instance(2021, 1, 1).weekday(), Weekday::Friday);
  assert_eq!(instance(2021, 2, 10).weekday(), Weekday::Wednesday);
  assert_eq!(_1989_10_11().weekday(), Weekday::Wednesday);
  assert_eq!(Date::MIN.weekday(), Weekday::Monday);
  assert_eq!(Date::EPOCH.weekday(), Weekday::Thursday);
  assert_eq!(Date::MAX.weekday(), Weekday::Friday);
}

#[test]
fn year() {
  assert_eq!(_1989_10_11().year(), 1989);
  assert_eq!(instance(1434, 1, 1).year(), 1434);
  assert_eq!(instance(2055, 5, 22).year(), 2055);
  assert!(instance(2000, 1, 1).is_leap_year());
  assert!(!instance(1900, 1, 1).is_leap_year());
}

#[cfg(feature = "chrono")]
#[test]
fn chrono() {
  use chrono::NaiveDate;

  let naive = NaiveDate::from_ymd_opt(1989, 10, 11).unwrap();
  assert_eq!(NaiveDate::from(_1989_10_11()), naive);
  assert_eq!(Date::try_from(naive).unwrap(), _1989_10_11());
  assert!(Date::try_from(NaiveDate::from_ymd_opt(0, 12, 31).unwrap()).is_err());
  assert_eq!(Date::parse_chrono("%d.%m.%Y", "11.10.1989").unwrap(), _1989_10_11());
  let mismatch = Date::parse_chrono("%d.%m.%Y", "11/10/1989");
  assert!(matches!(mismatch, Err(crate::Error::ParseError(_))));
  let out_of_range = Date::parse_chrono("%Y-%m-%d", "10000-01-01");
  assert!(matches!(out_of_range, Err(crate::Error::ParseError(_))));
}

#[cfg(feature = "serde")]
#[test]
fn serde_json() {
  let json = serde_json::to_string(&_1989_10_11()).unwrap();
  assert_eq!(json, r#""1989-10-11""#);
  assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), _1989_10_11());
  assert!(serde_json::from_str::<Date>(r#""1989-02-29""#).is_err());
}

#[cfg(feature = "_proptest")]
mod _proptest {
  use crate::calendar::{Date, MAX_DAY_NUMBER, Month};
  use chrono::{Datelike as _, NaiveDate};

  #[test_strategy::proptest]
  fn add_days(
    #[strategy(0..=MAX_DAY_NUMBER)] day_number: i64,
    #[strategy(-5_000i64..=5_000)] days: i64,
  ) {
    let date = Date::from_day_number(day_number).unwrap();
    assert_eq!(date.add_days(0).unwrap(), date);
    if let Ok(elem) = date.add_days(days) {
      assert_eq!(elem.add_days(-days).unwrap(), date);
      assert_eq!(elem.sub_days(days).unwrap(), date);
      assert_eq!(elem.days_between(date), days);
      assert_eq!(date.days_between(elem), -days);
    }
    if let Ok(elem) = date.add_days(7) {
      assert_eq!(elem.weekday(), date.weekday());
    }
  }

  #[test_strategy::proptest]
  fn matches_chrono(#[strategy(0..=MAX_DAY_NUMBER)] day_number: i64) {
    let date = Date::from_day_number(day_number).unwrap();
    let ce_days = i32::try_from(day_number + 1).unwrap();
    let naive = NaiveDate::from_num_days_from_ce_opt(ce_days).unwrap();
    assert_eq!(i32::from(date.year()), naive.year());
    assert_eq!(u32::from(date.month().num()), naive.month());
    assert_eq!(u32::from(date.day()), naive.day());
    assert_eq!(u32::from(date.day_of_year()), naive.ordinal());
    assert_eq!(u32::from(date.weekday().num()), naive.weekday().num_days_from_sunday());
  }

  #[test_strategy::proptest]
  fn round_trip(
    #[strategy(1u16..=9999)] year: u16,
    #[strategy(1u8..=12)] month: u8,
    #[strategy(1u8..=28)] day: u8,
  ) {
    let date = Date::from_ymd(year, Month::from_num(month).unwrap(), day).unwrap();
    assert_eq!(date.ymd(), (year, Month::from_num(month).unwrap(), day));
    assert_eq!(Date::from_iso_8601(date.iso_8601().as_bytes()).unwrap(), date);
  }
}
