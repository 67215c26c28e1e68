//! Content service boundary for loading and saving editor documents.
//!
//! [`ContentService`] is the asynchronous contract the content coordinator
//! talks to; [`FakeContentService`] is an in-memory implementation with
//! simulated latency and failures.

/// In-memory simulated content service.
pub mod fake;
/// Seed records served by the simulated service.
pub mod fixtures;

pub use fake::{FakeContentService, FakeServiceOptions};

use richedit_core::{ContentRecord, ContentSummary, ServiceError};
use std::future::Future;
use std::sync::Arc;

/// Asynchronous store of [`ContentRecord`] values.
///
/// `Err(ServiceError::Reported(_))` means the service answered with a
/// failure; `Err(ServiceError::Transport(_))` means the call itself failed.
pub trait ContentService: Send + Sync {
    /// Fetch the record stored under `id`.
    fn load(&self, id: &str) -> impl Future<Output = Result<ContentRecord, ServiceError>> + Send;

    /// Persist `record`.
    ///
    /// # Returns
    /// The record as stored, carrying the service-confirmed timestamp.
    fn save(
        &self,
        record: ContentRecord,
    ) -> impl Future<Output = Result<ContentRecord, ServiceError>> + Send;

    /// Summaries of all stored records, ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<ContentSummary>, ServiceError>> + Send;
}

impl<S: ContentService> ContentService for Arc<S> {
    fn load(&self, id: &str) -> impl Future<Output = Result<ContentRecord, ServiceError>> + Send {
        (**self).load(id)
    }

    fn save(
        &self,
        record: ContentRecord,
    ) -> impl Future<Output = Result<ContentRecord, ServiceError>> + Send {
        (**self).save(record)
    }

    fn list(&self) -> impl Future<Output = Result<Vec<ContentSummary>, ServiceError>> + Send {
        (**self).list()
    }
}
