//! The rich-text editor widget.
//!
//! [`WysiwygEditor`] presents one document and one change path regardless of
//! who owns the document. Every edit computes a new [`DocumentState`] from
//! the resolved one and hands it to [`Ownership::apply_change`].

mod ownership;
mod view;

pub use ownership::{ChangeHandler, Ownership, OwnershipMode};
pub use view::{EditorView, EDITOR_CLASS};

use crate::error::EditorError;
use crate::toolbar::{DefaultToolbar, Toolbar, ToolbarAction, ToolbarFn, ToolbarProps, ToolbarView};
use richedit_core::constants::DEFAULT_PLACEHOLDER;
use richedit_core::document;
use richedit_core::{BlockType, DocumentState, InlineStyle, KeyCommandResult, SelectionState};
use tracing::{debug, warn};

/// Caller-supplied editor configuration.
///
/// Supplying both [`EditorProps::value`] and [`EditorProps::on_change`] makes
/// the editor controlled; anything else makes it uncontrolled.
#[derive(Default)]
pub struct EditorProps {
    value: Option<DocumentState>,
    on_change: Option<ChangeHandler>,
    default_value: Option<DocumentState>,
    class_name: Option<String>,
    placeholder: Option<String>,
    read_only: bool,
    toolbar: Option<Box<dyn Toolbar>>,
    aria_label: Option<String>,
    id: Option<String>,
}

impl EditorProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller-owned document; only takes effect together with `on_change`.
    pub fn value(mut self, value: DocumentState) -> Self {
        self.value = Some(value);
        self
    }

    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(DocumentState) + Send + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Initial document of an uncontrolled editor.
    pub fn default_value(mut self, value: DocumentState) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Replace the default toolbar.
    pub fn toolbar<T>(mut self, toolbar: T) -> Self
    where
        T: Toolbar + 'static,
    {
        self.toolbar = Some(Box::new(toolbar));
        self
    }

    /// Replace the default toolbar with a render closure.
    pub fn render_toolbar<F>(self, render: F) -> Self
    where
        F: Fn(&ToolbarProps) -> ToolbarView + Send + 'static,
    {
        self.toolbar(ToolbarFn(render))
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Ownership mode these props select.
    pub fn mode(&self) -> OwnershipMode {
        OwnershipMode::derive(self.value.is_some(), self.on_change.is_some())
    }

    fn warn_on_lone_value(&self) {
        if self.value.is_some() && self.on_change.is_none() {
            warn!("Editor value supplied without on_change; ignoring it and running uncontrolled");
        }
    }
}

struct Presentation {
    id: Option<String>,
    class_name: Option<String>,
    placeholder: String,
    read_only: bool,
    toolbar: Option<Box<dyn Toolbar>>,
    aria_label: Option<String>,
}

impl Presentation {
    fn take_from(props: &mut EditorProps) -> Self {
        Self {
            id: props.id.take(),
            class_name: props.class_name.take(),
            placeholder: props
                .placeholder
                .take()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            read_only: props.read_only,
            toolbar: props.toolbar.take(),
            aria_label: props.aria_label.take(),
        }
    }
}

/// Headless rich-text editor.
pub struct WysiwygEditor {
    ownership: Ownership,
    presentation: Presentation,
}

impl WysiwygEditor {
    /// Create an editor; the ownership mode is fixed here.
    pub fn new(mut props: EditorProps) -> Self {
        props.warn_on_lone_value();
        let presentation = Presentation::take_from(&mut props);
        let ownership = match (props.value, props.on_change) {
            (Some(value), Some(on_change)) => Ownership::controlled(value, on_change),
            _ => Ownership::uncontrolled(props.default_value.unwrap_or_default()),
        };
        debug!(mode = %ownership.mode(), "Created editor");
        Self {
            ownership,
            presentation,
        }
    }

    pub fn mode(&self) -> OwnershipMode {
        self.ownership.mode()
    }

    pub fn is_read_only(&self) -> bool {
        self.presentation.read_only
    }

    /// The document currently shown.
    pub fn editor_state(&self) -> DocumentState {
        self.ownership.resolve().clone()
    }

    /// Route a new document to its owner.
    pub fn apply_change(&mut self, next: DocumentState) {
        self.ownership.apply_change(next);
    }

    /// Re-apply props after creation.
    ///
    /// # Errors
    /// Returns [`EditorError::ModeSwitch`] when `props` select a different
    /// ownership mode; the previous props stay in effect.
    pub fn update_props(&mut self, mut props: EditorProps) -> Result<(), EditorError> {
        let from = self.ownership.mode();
        let to = props.mode();
        if from != to {
            warn!(%from, %to, "Rejected editor ownership mode switch");
            return Err(EditorError::ModeSwitch { from, to });
        }
        props.warn_on_lone_value();
        self.presentation = Presentation::take_from(&mut props);
        if let (Some(value), Some(on_change)) = (props.value, props.on_change) {
            self.ownership = Ownership::controlled(value, on_change);
        }
        Ok(())
    }

    /// Replace the caller-owned document of a controlled editor.
    ///
    /// # Errors
    /// Returns [`EditorError::NotControlled`] for an uncontrolled editor.
    pub fn set_value(&mut self, value: DocumentState) -> Result<(), EditorError> {
        match &mut self.ownership {
            Ownership::Controlled { value: current, .. } => {
                *current = value;
                Ok(())
            }
            Ownership::Uncontrolled { .. } => Err(EditorError::NotControlled),
        }
    }

    fn ensure_editable(&self) -> Result<(), EditorError> {
        if self.presentation.read_only {
            Err(EditorError::ReadOnly)
        } else {
            Ok(())
        }
    }

    pub fn toggle_inline_style(&mut self, style: InlineStyle) -> Result<(), EditorError> {
        self.dispatch(ToolbarAction::ToggleInlineStyle(style))
    }

    pub fn toggle_block_type(&mut self, block_type: BlockType) -> Result<(), EditorError> {
        self.dispatch(ToolbarAction::ToggleBlockType(block_type))
    }

    /// Apply a toolbar command.
    ///
    /// # Errors
    /// Returns [`EditorError::ReadOnly`] when the editor is read-only.
    pub fn dispatch(&mut self, action: ToolbarAction) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let current = self.ownership.resolve();
        let next = match &action {
            ToolbarAction::ToggleInlineStyle(style) => document::toggle_inline_style(current, style),
            ToolbarAction::ToggleBlockType(block_type) => {
                document::toggle_block_type(current, block_type)
            }
        };
        debug!(?action, "Applied toolbar action");
        self.apply_change(next);
        Ok(())
    }

    /// Run a named editing command.
    ///
    /// Read-only editors report [`KeyCommandResult::NotHandled`] without
    /// looking at the command.
    pub fn handle_key_command(&mut self, command: &str) -> KeyCommandResult {
        if self.presentation.read_only {
            return KeyCommandResult::NotHandled;
        }
        let result = document::handle_key_command(self.ownership.resolve(), command);
        debug!(command, handled = result.is_handled(), "Key command");
        if let KeyCommandResult::Handled(next) = &result {
            self.apply_change(next.clone());
        }
        result
    }

    /// Type `text` at the selection.
    ///
    /// # Errors
    /// Returns [`EditorError::ReadOnly`] when the editor is read-only.
    pub fn input_text(&mut self, text: &str) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let next = self.ownership.resolve().insert_text(text);
        self.apply_change(next);
        Ok(())
    }

    /// Split the block at the caret.
    ///
    /// # Errors
    /// Returns [`EditorError::ReadOnly`] when the editor is read-only.
    pub fn split_block(&mut self) -> Result<(), EditorError> {
        self.ensure_editable()?;
        let next = self.ownership.resolve().split_block();
        self.apply_change(next);
        Ok(())
    }

    /// Move the selection; allowed in read-only editors.
    pub fn select(&mut self, selection: SelectionState) {
        let next = self.ownership.resolve().with_selection(selection);
        self.apply_change(next);
    }

    pub fn toolbar_props(&self) -> ToolbarProps {
        ToolbarProps::new(self.editor_state())
    }

    /// Render the editor's presentation attributes.
    pub fn render(&self) -> EditorView {
        let state = self.ownership.resolve();
        let presentation = &self.presentation;
        let toolbar = if presentation.read_only {
            None
        } else {
            let props = self.toolbar_props();
            Some(match &presentation.toolbar {
                Some(custom) => custom.render(&props),
                None => DefaultToolbar.render(&props),
            })
        };
        let show_placeholder = !state.content().has_text();
        EditorView {
            id: presentation.id.clone(),
            class_name: view::class_list(presentation.class_name.as_deref()),
            toolbar,
            placeholder: show_placeholder.then(|| presentation.placeholder.clone()),
            aria_label: presentation.aria_label.clone(),
            read_only: presentation.read_only,
            role: "textbox",
            plain_text: state.plain_text(),
        }
    }
}
