use chrono::{DateTime, TimeZone, Utc};
use richedit_core::ContentRecord;
use serde_json::json;

pub const WELCOME_ID: &str = "sample-1";
pub const EMPTY_ID: &str = "sample-2";

fn fixed_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Two styled paragraphs introducing the editor.
pub fn welcome_document() -> ContentRecord {
    let content = json!({
        "blocks": [
            {
                "key": "sample-key-1",
                "text": "Welcome to the WYSIWYG Editor! This content was loaded asynchronously.",
                "type": "unstyled",
                "depth": 0,
                "inlineStyleRanges": [
                    {"offset": 0, "length": 7, "style": "BOLD"},
                    {"offset": 35, "length": 6, "style": "ITALIC"}
                ],
                "entityRanges": [],
                "data": {}
            },
            {
                "key": "sample-key-2",
                "text": "You can format text with bold, italic, and underline styles.",
                "type": "unstyled",
                "depth": 0,
                "inlineStyleRanges": [
                    {"offset": 25, "length": 4, "style": "BOLD"},
                    {"offset": 31, "length": 6, "style": "ITALIC"},
                    {"offset": 43, "length": 9, "style": "UNDERLINE"}
                ],
                "entityRanges": [],
                "data": {}
            }
        ],
        "entityMap": {}
    });
    ContentRecord {
        id: WELCOME_ID.to_string(),
        title: "Welcome Document".to_string(),
        content: content.to_string(),
        last_modified: fixed_time(10, 30),
    }
}

/// A document holding one empty block.
pub fn empty_document() -> ContentRecord {
    let content = json!({
        "blocks": [
            {
                "key": "empty-key",
                "text": "",
                "type": "unstyled",
                "depth": 0,
                "inlineStyleRanges": [],
                "entityRanges": [],
                "data": {}
            }
        ],
        "entityMap": {}
    });
    ContentRecord {
        id: EMPTY_ID.to_string(),
        title: "Empty Document".to_string(),
        content: content.to_string(),
        last_modified: fixed_time(9, 0),
    }
}

pub fn seed_records() -> Vec<ContentRecord> {
    vec![welcome_document(), empty_document()]
}
