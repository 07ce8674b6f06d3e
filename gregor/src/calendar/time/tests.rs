use crate::calendar::{CalendarError, Time};

fn _8_48_05_234_445_009() -> Time {
  Time::from_hms_ns(8, 48, 5, 234_445_009).unwrap()
}

fn _14_20_30() -> Time {
  Time::from_hms(14, 20, 30).unwrap()
}

#[test]
fn from_hms_ns() {
  assert_eq!(Time::from_hms(24, 0, 0), Err(CalendarError::InvalidHour { received: 24 }));
  assert_eq!(Time::from_hms(0, 60, 0), Err(CalendarError::InvalidMinute { received: 60 }));
  assert_eq!(Time::from_hms(0, 0, 60), Err(CalendarError::InvalidSecond { received: 60 }));
  assert_eq!(
    Time::from_hms_ns(0, 0, 0, 1_000_000_000),
    Err(CalendarError::InvalidNanosecond { received: 1_000_000_000 })
  );
  assert_eq!(Time::from_hms_ns(23, 59, 59, 999_999_999), Ok(Time::MAX));
}

#[test]
fn from_seconds_since_mn() {
  assert_eq!(Time::from_seconds_since_mn(0, 0), Ok(Time::ZERO));
  assert_eq!(Time::from_seconds_since_mn(51_630, 0), Ok(_14_20_30()));
  assert_eq!(Time::from_seconds_since_mn(86_400 + 51_630, 0), Ok(_14_20_30()));
  assert_eq!(Time::from_seconds_since_mn(86_399, 999_999_999), Ok(Time::MAX));
}

#[test]
fn hour() {
  assert_eq!(Time::ZERO.hour(), 0);
  assert_eq!(Time::MAX.hour(), 23);
  assert_eq!(_8_48_05_234_445_009().hour(), 8);
  assert_eq!(_14_20_30().hour(), 14);
}

#[test]
fn iso_8601() {
  assert_eq!(Time::ZERO.iso_8601().as_str(), "00:00:00");
  assert_eq!(Time::MAX.iso_8601().as_str(), "23:59:59.999999999");
  assert_eq!(_8_48_05_234_445_009().iso_8601().as_str(), "08:48:05.234445009");
  assert_eq!(_14_20_30().iso_8601().as_str(), "14:20:30");
  assert_eq!(Time::from_hms_ns(1, 2, 3, 5_000).unwrap().iso_8601().as_str(), "01:02:03.000005");
  assert_eq!(Time::from_hms_ns(1, 2, 3, 500_000_000).unwrap().iso_8601().as_str(), "01:02:03.5");

  let valid = [
    "09:08:07",
    "09:08:07.1",
    "09:08:07.12",
    "09:08:07.123",
    "09:08:07.1234",
    "09:08:07.12345",
    "09:08:07.123456",
    "09:08:07.1234567",
    "09:08:07.12345678",
    "09:08:07.123456789",
  ];
  for str in valid {
    let time = Time::from_iso_8601(str.as_bytes()).unwrap();
    assert_eq!(time.iso_8601().as_str(), str);
  }

  let invalid = [
    "",
    "x",
    "15",
    "15:8:",
    "15:8:x",
    "15:8:9x",
    "23:59:61",
    "24:00:00",
    "23:54:35 GMT",
    "23:54:35 +0000",
    "1441497364.649",
    "001:02:03",
    "01:002:03",
    "01:02:003",
    "01:02:03.1234567890",
  ];
  for str in invalid {
    assert!(Time::from_iso_8601(str.as_bytes()).is_err(), "{str}");
  }
}

#[test]
fn duplicated_fields() {
  let cases: [(&[u8], &[u8], CalendarError); 3] = [
    (b"%H%H:%M:%S", b"101120:30", CalendarError::DuplicatedParsingFormatHour),
    (b"%H:%M%M:%S", b"10:2021:30", CalendarError::DuplicatedParsingFormatMinute),
    (b"%H:%M:%S%S", b"10:20:3031", CalendarError::DuplicatedParsingFormatSecond),
  ];
  for (layout, text, cause) in cases {
    let err = Time::parse(layout, text).unwrap_err();
    assert_eq!(alloc::format!("{err:?}"), alloc::format!("{:?}", crate::Error::from(cause)));
  }
}

#[test]
fn nanosecond() {
  assert_eq!(Time::from_iso_8601(b"09:08:07.5").unwrap().nanosecond(), 500_000_000);
  assert_eq!(Time::from_iso_8601(b"09:08:07.000000001").unwrap().nanosecond(), 1);
}

#[test]
fn seconds_since_mn() {
  assert_eq!(Time::ZERO.seconds_since_mn(), 0);
  assert_eq!(Time::MAX.seconds_since_mn(), 86_399);
  assert_eq!(_14_20_30().seconds_since_mn(), 51_630);
  assert_eq!(_8_48_05_234_445_009().trunc_to_sec().nanosecond(), 0);
}
