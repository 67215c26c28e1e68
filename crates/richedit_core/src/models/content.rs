//! Content record models exchanged with a content service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted unit of editor content.
///
/// `content` always holds the serialized raw form of a document, as produced
/// by [`crate::serialization::serialize_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
}

/// Lightweight record metadata used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub id: String,
    pub title: String,
    pub content_len: usize,
    pub last_modified: DateTime<Utc>,
}

impl ContentRecord {
    /// Create a new record with a fresh id and timestamp.
    ///
    /// # Arguments
    /// - `title`: Display title.
    /// - `content`: Serialized document.
    ///
    /// # Returns
    /// A new [`ContentRecord`] instance.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            last_modified: Utc::now(),
        }
    }

    /// Return a copy stamped with `at` as its modification time.
    pub fn touched(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = at;
        self
    }
}

impl From<&ContentRecord> for ContentSummary {
    fn from(value: &ContentRecord) -> Self {
        Self {
            id: value.id.clone(),
            title: value.title.clone(),
            content_len: value.content.len(),
            last_modified: value.last_modified,
        }
    }
}
