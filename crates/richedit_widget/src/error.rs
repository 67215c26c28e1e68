//! Editor widget errors.
use crate::editor::OwnershipMode;
use thiserror::Error;

/// Failures raised by [`crate::WysiwygEditor`] operations.
///
/// Editing itself never fails on a well-formed document; these cover misuse
/// of the widget's configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("editor cannot switch from {from} to {to} mode after creation")]
    ModeSwitch {
        from: OwnershipMode,
        to: OwnershipMode,
    },

    #[error("editor is uncontrolled; its document is owned internally")]
    NotControlled,

    #[error("editor is read-only")]
    ReadOnly,
}
