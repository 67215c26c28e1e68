//! Error types for document restoration and content-service calls.
use thiserror::Error;

/// Failure to rebuild a document from its persisted raw form.
///
/// Callers restoring content treat this as recoverable: see
/// [`crate::serialization::deserialize_document`].
#[derive(Error, Debug)]
pub enum DeserializeError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid raw content: {0}")]
    InvalidRaw(String),
}

/// Failure reported by, or while reaching, a content service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service answered but refused the request.
    #[error("{0}")]
    Reported(String),

    /// The service could not be reached or the call itself failed.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ServiceError {
    /// Return `true` for failures where the service never produced an answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
