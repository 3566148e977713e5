use crate::Application;

use serde_json::{Map, Value, json};

fn sample_application() -> Application {
    Application::new(
        "Acme".to_string(),
        "Backend Engineer".to_string(),
        "Applied".to_string(),
        Some("Referred by June".to_string()),
        Some("https://acme.example/jobs/42".to_string()),
    )
}

#[test]
fn test_application_new() {
    let application = sample_application();

    assert_eq!(application.company, "Acme");
    assert_eq!(application.title, "Backend Engineer");
    assert_eq!(application.stage, "Applied");
    assert_eq!(application.notes.as_deref(), Some("Referred by June"));
    assert_eq!(
        application.link.as_deref(),
        Some("https://acme.example/jobs/42")
    );
    assert!(application.extra.is_empty());
}

#[test]
fn test_set_overwrites_only_submitted_fields() {
    let mut application = sample_application();

    let mut fields = Map::new();
    fields.insert("stage".to_string(), json!("Interview"));
    application.set(&fields).unwrap();

    assert_eq!(application.stage, "Interview");
    assert_eq!(application.company, "Acme");
    assert_eq!(application.title, "Backend Engineer");
    assert_eq!(application.notes.as_deref(), Some("Referred by June"));
}

#[test]
fn test_set_admits_unknown_field_names() {
    let mut application = sample_application();

    let mut fields = Map::new();
    fields.insert("recruiter".to_string(), json!("June"));
    application.set(&fields).unwrap();

    assert_eq!(application.extra.get("recruiter"), Some(&json!("June")));
}

#[test]
fn test_set_keeps_id_when_not_submitted() {
    let mut application = sample_application();
    let id = application.id;

    let mut fields = Map::new();
    fields.insert("company".to_string(), json!("Initech"));
    application.set(&fields).unwrap();

    assert_eq!(application.id, id);
}

#[test]
fn test_set_rejects_id_that_no_longer_parses() {
    let mut application = sample_application();
    let id = application.id;

    let mut fields = Map::new();
    fields.insert("id".to_string(), json!("not-a-uuid"));

    assert!(application.set(&fields).is_err());
    // A failed merge leaves the record untouched.
    assert_eq!(application.id, id);
    assert_eq!(application.company, "Acme");
}

#[test]
fn test_set_accepts_non_string_values() {
    let mut application = sample_application();

    let mut fields = Map::new();
    fields.insert("rounds".to_string(), json!(3));
    application.set(&fields).unwrap();

    assert_eq!(application.extra.get("rounds"), Some(&json!(3)));
}

#[test]
fn test_document_round_trip_keeps_gained_fields() {
    let mut application = sample_application();

    let mut fields = Map::new();
    fields.insert("recruiter".to_string(), json!("June"));
    application.set(&fields).unwrap();

    let document = serde_json::to_string(&application).unwrap();
    let restored: Application = serde_json::from_str(&document).unwrap();

    assert_eq!(restored.id, application.id);
    assert_eq!(restored.company, "Acme");
    assert_eq!(restored.extra.get("recruiter"), Some(&json!("June")));
}

#[test]
fn test_document_without_optional_fields_parses() {
    let document = json!({
        "id": "8f3c6d0a-5e4b-4a2f-9c1d-7b6a5e4d3c2b",
        "company": "Acme",
        "title": "Backend Engineer",
        "stage": "Applied"
    })
    .to_string();

    let application: Application = serde_json::from_str(&document).unwrap();

    assert!(application.notes.is_none());
    assert!(application.link.is_none());
    assert!(application.extra.is_empty());
}

#[test]
fn test_set_with_empty_fields_is_a_no_op() {
    let mut application = sample_application();
    let before = serde_json::to_value(&application).unwrap();

    application.set(&Map::new()).unwrap();

    let after = serde_json::to_value(&application).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_extra_fields_do_not_shadow_known_fields() {
    let mut application = sample_application();

    let mut fields = Map::new();
    fields.insert("company".to_string(), json!("Initech"));
    fields.insert("recruiter".to_string(), json!("June"));
    application.set(&fields).unwrap();

    assert_eq!(application.company, "Initech");
    assert!(!application.extra.contains_key("company"));

    let document: Value = serde_json::to_value(&application).unwrap();
    assert_eq!(document["company"], json!("Initech"));
}
