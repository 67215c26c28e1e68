//! Model-level unit tests.

use super::content::{ContentRecord, ContentSummary};
use chrono::{TimeZone, Utc};

#[test]
fn content_record_new_mints_id_and_timestamp() {
    let before = Utc::now();
    let record = ContentRecord::new("My Doc", "{}");
    assert_eq!(record.title, "My Doc");
    assert_eq!(record.content, "{}");
    assert!(!record.id.is_empty());
    assert!(record.last_modified >= before);

    let other = ContentRecord::new("My Doc", "{}");
    assert_ne!(record.id, other.id);
}

#[test]
fn content_record_serializes_camel_case_fields() {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let record = ContentRecord {
        id: "sample-1".to_string(),
        title: "Welcome Document".to_string(),
        content: "{\"blocks\":[]}".to_string(),
        last_modified: at,
    };
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["lastModified"], "2024-01-15T10:30:00Z");
    assert_eq!(json["title"], "Welcome Document");

    let back: ContentRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(back, record);
}

#[test]
fn summary_reflects_record_metadata() {
    let record = ContentRecord::new("Notes", "abcdef");
    let summary = ContentSummary::from(&record);
    assert_eq!(summary.id, record.id);
    assert_eq!(summary.title, "Notes");
    assert_eq!(summary.content_len, 6);
    assert_eq!(summary.last_modified, record.last_modified);
}

#[test]
fn touched_replaces_timestamp_only() {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let record = ContentRecord::new("Doc", "x");
    let id = record.id.clone();
    let touched = record.touched(at);
    assert_eq!(touched.id, id);
    assert_eq!(touched.last_modified, at);
}
