//! Load/save orchestration between an editor document and a content service.
//!
//! The coordinator holds the working document and an [`AsyncStatus`]. Its
//! async operations lock the shared state only between awaits, so typing
//! (through [`AsyncContentCoordinator::set_editor_state`]) stays possible
//! while a load or save is in flight.

use crate::editor::ChangeHandler;
use chrono::{DateTime, Utc};
use richedit_core::constants::{
    MSG_LOAD_FAILED, MSG_NETWORK_LOAD, MSG_NETWORK_SAVE, MSG_NO_CONTENT_ID, MSG_SAVE_FAILED,
};
use richedit_core::serialization::{deserialize_document, serialize_document};
use richedit_core::{ContentRecord, DocumentState, ServiceError};
use richedit_service::ContentService;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

/// Request-scoped status of a coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsyncStatus {
    pub is_loading: bool,
    pub is_saving: bool,
    /// User-facing message from the last failed operation.
    pub error: Option<String>,
    pub last_saved: Option<DateTime<Utc>>,
    /// Id of the last successfully loaded record; required for saving.
    pub current_content_id: Option<String>,
}

#[derive(Debug)]
struct Shared {
    editor_state: DocumentState,
    status: AsyncStatus,
}

fn lock_shared(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn failure_message(err: ServiceError, fallback: &str, network: &str) -> String {
    match err {
        ServiceError::Reported(message) if message.trim().is_empty() => fallback.to_string(),
        ServiceError::Reported(message) => message,
        ServiceError::Transport(_) => network.to_string(),
    }
}

/// Coordinates loading and saving one document through `S`.
pub struct AsyncContentCoordinator<S> {
    service: S,
    shared: Arc<Mutex<Shared>>,
}

impl<S: ContentService> AsyncContentCoordinator<S> {
    /// Coordinator holding an empty document.
    pub fn new(service: S) -> Self {
        Self::with_state(service, DocumentState::create_empty())
    }

    pub fn with_state(service: S, editor_state: DocumentState) -> Self {
        Self {
            service,
            shared: Arc::new(Mutex::new(Shared {
                editor_state,
                status: AsyncStatus::default(),
            })),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        lock_shared(&self.shared)
    }

    /// Snapshot of the current status flags.
    pub fn status(&self) -> AsyncStatus {
        self.lock().status.clone()
    }

    pub fn editor_state(&self) -> DocumentState {
        self.lock().editor_state.clone()
    }

    /// Replace the working document; status flags are left alone.
    pub fn set_editor_state(&self, state: DocumentState) {
        self.lock().editor_state = state;
    }

    /// Handler that feeds editor changes into this coordinator, for wiring a
    /// controlled editor.
    pub fn change_handler(&self) -> ChangeHandler {
        let shared = Arc::clone(&self.shared);
        Box::new(move |state| {
            lock_shared(&shared).editor_state = state;
        })
    }

    pub fn clear_error(&self) {
        self.lock().status.error = None;
    }

    /// Return `true` when no save is running and the document has visible text.
    pub fn can_save(&self) -> bool {
        let shared = self.lock();
        !shared.status.is_saving && !shared.editor_state.plain_text().trim().is_empty()
    }

    /// Load record `id` into the working document.
    ///
    /// On success the document, `current_content_id` and `last_saved` are
    /// replaced. On failure only `error` changes.
    pub async fn load(&self, id: &str) {
        {
            let mut shared = self.lock();
            shared.status.is_loading = true;
            shared.status.error = None;
        }
        info!(id, "Loading content");

        let result = self.service.load(id).await;

        let mut shared = self.lock();
        shared.status.is_loading = false;
        match result {
            Ok(record) => {
                shared.editor_state = deserialize_document(&record.content);
                shared.status.current_content_id = Some(id.to_string());
                shared.status.last_saved = Some(record.last_modified);
                info!(id, title = %record.title, "Loaded content");
            }
            Err(err) => {
                if err.is_transport() {
                    error!(id, error = %err, "Content load failed");
                } else {
                    warn!(id, error = %err, "Content load refused");
                }
                shared.status.error = Some(failure_message(err, MSG_LOAD_FAILED, MSG_NETWORK_LOAD));
            }
        }
    }

    /// Save the working document under the loaded id with `title`.
    ///
    /// The document is captured when this is called; later edits are not
    /// part of this save. Without a loaded id the service is not contacted
    /// and `error` is set.
    pub async fn save(&self, title: &str) {
        let record = {
            let mut shared = self.lock();
            let Some(id) = shared.status.current_content_id.clone() else {
                warn!("Save requested before any content was loaded");
                shared.status.error = Some(MSG_NO_CONTENT_ID.to_string());
                return;
            };
            shared.status.is_saving = true;
            shared.status.error = None;
            ContentRecord {
                id,
                title: title.to_string(),
                content: serialize_document(&shared.editor_state),
                last_modified: Utc::now(),
            }
        };
        let id = record.id.clone();
        info!(id = %id, title, "Saving content");

        let result = self.service.save(record).await;

        let mut shared = self.lock();
        shared.status.is_saving = false;
        match result {
            Ok(saved) => {
                shared.status.last_saved = Some(saved.last_modified);
                info!(id = %id, "Saved content");
            }
            Err(err) => {
                if err.is_transport() {
                    error!(id = %id, error = %err, "Content save failed");
                } else {
                    warn!(id = %id, error = %err, "Content save refused");
                }
                shared.status.error = Some(failure_message(err, MSG_SAVE_FAILED, MSG_NETWORK_SAVE));
            }
        }
    }
}
