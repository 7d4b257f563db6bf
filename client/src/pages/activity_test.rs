use serde_json::json;

use super::*;

fn log(action: &str) -> ActivityLog {
    ActivityLog {
        id: "l1".to_owned(),
        actor_email: Some("dana@homefix.test".to_owned()),
        action: action.to_owned(),
        entity_type: Some("service".to_owned()),
        entity_id: Some("svc-7".to_owned()),
        details: None,
        created_at: None,
    }
}

#[test]
fn target_label_joins_available_parts() {
    let mut entry = log("SERVICE_CREATED");
    assert_eq!(target_label(&entry), "service svc-7");
    entry.entity_id = None;
    assert_eq!(target_label(&entry), "service");
    entry.entity_type = None;
    assert_eq!(target_label(&entry), "-");
}

#[test]
fn details_preview_renders_strings_raw_and_objects_as_json() {
    let mut entry = log("X");
    assert_eq!(details_preview(&entry), None);
    entry.details = Some(json!("price changed"));
    assert_eq!(details_preview(&entry).as_deref(), Some("price changed"));
    entry.details = Some(json!({"from": 10}));
    assert_eq!(details_preview(&entry).as_deref(), Some(r#"{"from":10}"#));
    entry.details = Some(serde_json::Value::Null);
    assert_eq!(details_preview(&entry), None);
}

#[test]
fn details_preview_truncates_long_text() {
    let mut entry = log("X");
    entry.details = Some(json!("é".repeat(200)));
    let preview = details_preview(&entry).unwrap();
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), DETAILS_PREVIEW_CHARS + 3);
}

#[test]
fn matches_filter_checks_actor_action_and_target() {
    let entry = log("SERVICE_CREATED");
    assert!(matches_filter(&entry, ""));
    assert!(matches_filter(&entry, "DANA"));
    assert!(matches_filter(&entry, "created"));
    assert!(matches_filter(&entry, "svc-7"));
    assert!(!matches_filter(&entry, "payout"));
}
