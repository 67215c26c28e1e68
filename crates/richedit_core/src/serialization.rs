//! Conversion between [`DocumentState`] and its persisted JSON string.

use crate::document::{convert_from_raw, convert_to_raw, DocumentState, RawContent};
use crate::error::DeserializeError;

const EMPTY_RAW_JSON: &str = r#"{"blocks":[],"entityMap":{}}"#;

/// Encode the document's content as raw JSON.
///
/// Selection and pending inline style are not persisted.
pub fn serialize_document(state: &DocumentState) -> String {
    let raw = convert_to_raw(state.content());
    match serde_json::to_string(&raw) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!("Failed to encode document: {}", err);
            EMPTY_RAW_JSON.to_string()
        }
    }
}

/// Decode a raw JSON string into a document.
///
/// # Errors
/// Returns [`DeserializeError::Json`] for malformed JSON and
/// [`DeserializeError::InvalidRaw`] when the JSON is not a valid raw form.
pub fn try_deserialize_document(json: &str) -> Result<DocumentState, DeserializeError> {
    let raw: RawContent = serde_json::from_str(json)?;
    let content = convert_from_raw(raw)?;
    Ok(DocumentState::create_with_content(content))
}

/// Best-effort decode: malformed input logs a warning and yields an empty
/// document.
pub fn deserialize_document(json: &str) -> DocumentState {
    match try_deserialize_document(json) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!("Failed to restore document content: {}", err);
            DocumentState::create_empty()
        }
    }
}

/// Plain-text projection, blocks joined with `\n`.
pub fn plain_text_of(state: &DocumentState) -> String {
    state.plain_text()
}

pub fn document_from_plain_text(text: &str) -> DocumentState {
    DocumentState::create_from_text(text)
}

/// Number of chars in the plain-text projection, line breaks included.
pub fn character_count(state: &DocumentState) -> usize {
    state.plain_text().chars().count()
}
