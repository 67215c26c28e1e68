//! Root crate facade for the richedit editor core, content service and widget.

/// Walkthroughs exercising each editor configuration.
pub mod demo;

pub use richedit_core::{
    config, constants, document, error, models, serialization, BlockType, Config, ContentBlock,
    ContentRecord, ContentState, ContentSummary, DeserializeError, DocumentState, InlineStyle,
    KeyCommand, KeyCommandResult, SelectionState, ServiceError, StyleSet,
};
pub use richedit_service::{fixtures, ContentService, FakeContentService, FakeServiceOptions};
pub use richedit_widget::{
    AsyncContentCoordinator, AsyncStatus, ChangeHandler, DefaultToolbar, EditorError,
    EditorProps, EditorView, OwnershipMode, Toolbar, ToolbarAction, ToolbarControl, ToolbarFn,
    ToolbarProps, ToolbarView, WysiwygEditor,
};
