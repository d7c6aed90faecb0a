use chrono::{DateTime, Duration, TimeZone, Utc};
use timedit::utils::datetime::{parse_time_input, TimeInputError};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

fn parse(input: &str) -> DateTime<Utc> {
    parse_time_input(input, now()).unwrap()
}

#[test]
fn test_keywords() {
    assert_eq!(parse("now"), now());
    assert_eq!(parse("  NOW "), now());
    assert_eq!(parse("today"), Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    assert_eq!(parse("tomorrow"), Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap());
    assert_eq!(parse("yesterday"), Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap());
}

#[test]
fn test_rfc3339_is_converted_to_utc() {
    assert_eq!(
        parse("2024-01-15T12:30:00+02:00"),
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    );
    assert_eq!(
        parse("2024-01-15T10:30:00.750Z"),
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    );
}

#[test]
fn test_naive_forms_are_utc() {
    let expected = Utc.with_ymd_and_hms(2023, 6, 1, 8, 5, 0).unwrap();
    assert_eq!(parse("2023-06-01 08:05:00"), expected);
    assert_eq!(parse("2023-06-01T08:05"), expected);
    assert_eq!(parse("2023-06-01 08:05"), expected);
    assert_eq!(parse("2023-06-01"), Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_epoch_seconds() {
    assert_eq!(parse("@1705314600"), now());
    assert_eq!(parse("1705314600"), now());
    assert_eq!(parse("0"), Utc.timestamp_opt(0, 0).unwrap());
}

#[test]
fn test_relative() {
    assert_eq!(parse("in 2h"), now() + Duration::hours(2));
    assert_eq!(parse("90min ago"), now() - Duration::minutes(90));
    assert_eq!(parse("3days ago"), now() - Duration::days(3));
}

#[test]
fn test_bad_duration() {
    let err = parse_time_input("in soon", now()).unwrap_err();
    assert!(matches!(err, TimeInputError::Duration { .. }));
    assert!(err.to_string().contains("in soon"));
}

#[test]
fn test_unrecognized() {
    for input in ["", "next blue moon", "2024-13-01"] {
        let err = parse_time_input(input, now()).unwrap_err();
        assert!(matches!(err, TimeInputError::Unrecognized(_)), "{input}");
    }
}

#[test]
fn test_year_range() {
    let err = parse_time_input("@253402300800", now()).unwrap_err();
    assert!(matches!(err, TimeInputError::OutOfRange(_)));
    assert_eq!(parse("@253402300799"), Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap());
}
