use chrono::{NaiveDate, TimeZone, Utc};
use grem_core::Reminder;
use serde_json::{json, Value};

fn sample() -> Reminder {
    Reminder {
        id: 7,
        title: "Pay rent".to_string(),
        due_on: NaiveDate::from_ymd_opt(2024, 12, 28).unwrap(),
        dismissed_at: None,
        created_at: Utc.with_ymd_and_hms(2024, 12, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn reminder_serializes_due_date_as_calendar_day() {
    let value: Value = serde_json::to_value(sample()).unwrap();

    assert_eq!(value["id"], json!(7));
    assert_eq!(value["due_on"], json!("2024-12-28"));
    assert_eq!(value["dismissed_at"], Value::Null);
    assert_eq!(value["created_at"], json!("2024-12-01T09:30:00Z"));
}

#[test]
fn dismissed_reminder_survives_json_roundtrip() {
    let mut reminder = sample();
    reminder.dismissed_at = Some(Utc.with_ymd_and_hms(2024, 12, 29, 7, 0, 0).unwrap());

    let text = serde_json::to_string(&reminder).unwrap();
    let parsed: Reminder = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, reminder);
    assert!(!parsed.is_active());
}
