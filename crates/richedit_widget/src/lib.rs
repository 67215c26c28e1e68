//! Headless rich-text editor widget.
//!
//! - [`WysiwygEditor`]: controlled/uncontrolled document ownership, editing
//!   commands and presentation attributes.
//! - [`toolbar`]: the contract between an editor and its formatting toolbar.
//! - [`AsyncContentCoordinator`]: load/save of the editor document through a
//!   [`richedit_service::ContentService`].

pub mod coordinator;
pub mod editor;
pub mod error;
pub mod toolbar;

pub use coordinator::{AsyncContentCoordinator, AsyncStatus};
pub use editor::{
    ChangeHandler, EditorProps, EditorView, Ownership, OwnershipMode, WysiwygEditor,
};
pub use error::EditorError;
pub use toolbar::{
    DefaultToolbar, Toolbar, ToolbarAction, ToolbarControl, ToolbarFn, ToolbarProps, ToolbarView,
};
