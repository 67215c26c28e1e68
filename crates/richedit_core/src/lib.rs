//! Core domain library for richedit (document model, raw form, records).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants and user-visible messages.
pub mod constants;
/// Immutable rich-text document model and editing commands.
pub mod document;
/// Error types for deserialization and content-service failures.
pub mod error;
/// Persisted content record models.
pub mod models;
/// Document <-> JSON serialization adapter.
pub mod serialization;

pub use config::Config;
pub use document::{
    BlockType, ContentBlock, ContentState, DocumentState, InlineStyle, KeyCommand,
    KeyCommandResult, SelectionState, StyleSet,
};
pub use error::{DeserializeError, ServiceError};
pub use models::content::{ContentRecord, ContentSummary};
