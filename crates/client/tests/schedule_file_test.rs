use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_client::schedule_file::{parse_days, read_days};
use slotbook_core::models::schedule::Weekday;

#[rstest]
#[case(r#"{"id":"abc","schedule":[{"day":"Monday","enabled":true,"slots":[]}]}"#)]
#[case(r#"{"schedule":[{"day":"Monday","enabled":true,"slots":[]}]}"#)]
#[case(r#"[{"day":"Monday","enabled":true,"slots":[]}]"#)]
fn test_accepted_shapes(#[case] raw: &str) {
    let days = parse_days(raw).unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].day, Weekday::Monday);
    assert!(days[0].enabled);
}

#[test]
fn test_read_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"day":"Wednesday","enabled":true,"slots":[
            {{"startTime":"14:00","modes":["audio","video"],"price":700}}
        ]}}]"#
    )
    .unwrap();

    let days = read_days(file.path()).unwrap();

    assert_eq!(days[0].day, Weekday::Wednesday);
    assert_eq!(days[0].slots[0].start_time, "14:00");
    assert_eq!(days[0].slots[0].modes.len(), 2);
}

#[test]
fn test_invalid_file_names_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"schedule":[{{"day":"Funday","enabled":true}}]}}"#).unwrap();

    let err = read_days(file.path()).unwrap_err();

    assert!(err.to_string().contains("Invalid schedule file"));
}

#[test]
fn test_missing_file() {
    let err = read_days(std::path::Path::new("/nonexistent/schedule.json")).unwrap_err();

    assert!(err.to_string().contains("Failed to read schedule file"));
}
