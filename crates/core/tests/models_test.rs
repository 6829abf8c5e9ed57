use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use slotbook_core::models::{
    schedule::{ApiEnvelope, ApprovalStatus, DaySlots, SaveScheduleRequest, Weekday, WeeklySchedule},
    time_slot::{ConsultationMode, TimeSlot},
};

#[test]
fn test_time_slot_wire_format() {
    let slot = TimeSlot::new("09:00", 500.0, &[ConsultationMode::Video, ConsultationMode::Audio]);

    let value = to_value(&slot).expect("Failed to serialize time slot");

    assert_eq!(
        value,
        json!({ "startTime": "09:00", "modes": ["video", "audio"], "price": 500.0 })
    );
}

#[test]
fn test_modes_deserialize_as_set() {
    let raw = r#"{"startTime":"10:00","modes":["audio","video","audio"],"price":700}"#;
    let slot: TimeSlot = from_str(raw).expect("Failed to deserialize time slot");

    assert_eq!(
        slot.modes,
        BTreeSet::from([ConsultationMode::Video, ConsultationMode::Audio])
    );
    assert_eq!(slot.price, 700.0);
}

#[test]
fn test_unknown_mode_is_rejected() {
    let result = from_str::<TimeSlot>(r#"{"startTime":"10:00","modes":["chat"],"price":700}"#);

    assert!(result.is_err());
}

#[test]
fn test_default_slot_matches_add_slot() {
    let slot = TimeSlot::default();

    assert!(!slot.has_start_time());
    assert_eq!(slot.modes, BTreeSet::from([ConsultationMode::Video]));
    assert_eq!(slot.price, 0.0);
}

#[test]
fn test_weekly_schedule_deserialization() {
    let schedule: WeeklySchedule = from_str(
        r#"{
            "id": "66f0c2a1",
            "schedule": [
                { "day": "Monday", "enabled": true, "slots": [
                    { "startTime": "09:00", "modes": ["video"], "price": 500 }
                ]},
                { "day": "Wednesday", "enabled": true }
            ]
        }"#,
    )
    .expect("Failed to deserialize weekly schedule");

    assert_eq!(schedule.id, "66f0c2a1");
    assert_eq!(schedule.schedule.len(), 2);
    assert_eq!(schedule.day(Weekday::Monday).map(|d| d.slots.len()), Some(1));
    assert_eq!(schedule.day(Weekday::Wednesday).map(|d| d.slots.len()), Some(0));
    assert!(schedule.day(Weekday::Friday).is_none());
}

#[test]
fn test_save_request_keeps_only_enabled_days() {
    let mut monday = DaySlots::empty(Weekday::Monday);
    monday.enabled = true;
    let days = vec![
        DaySlots::empty(Weekday::Sunday),
        monday.clone(),
        DaySlots::empty(Weekday::Tuesday),
    ];

    let request = SaveScheduleRequest::from_days(&days);

    assert_eq!(request.schedule, vec![monday]);
}

#[test]
fn test_weekday_order_and_names() {
    let names: Vec<String> = Weekday::ALL.iter().map(ToString::to_string).collect();

    assert_eq!(
        names,
        vec!["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
    );
}

#[rstest]
#[case("\"Approved\"", ApprovalStatus::Approved, true)]
#[case("\"Pending\"", ApprovalStatus::Pending, false)]
#[case("\"Rejected\"", ApprovalStatus::Rejected, false)]
#[case("\"Suspended\"", ApprovalStatus::Other("Suspended".to_string()), false)]
fn test_approval_status(
    #[case] raw: &str,
    #[case] expected: ApprovalStatus,
    #[case] approved: bool,
) {
    let status: ApprovalStatus = from_str(raw).expect("Failed to deserialize approval status");

    assert_eq!(status, expected);
    assert_eq!(status.is_approved(), approved);
    assert_eq!(
        to_value(&status).expect("Failed to serialize approval status"),
        from_str::<serde_json::Value>(raw).unwrap()
    );
}

#[test]
fn test_envelope_without_message() {
    let envelope: ApiEnvelope<ApprovalStatus> =
        from_str(r#"{"data":"Approved"}"#).expect("Failed to deserialize envelope");

    assert_eq!(envelope.data, ApprovalStatus::Approved);
    assert!(envelope.message.is_none());
}
