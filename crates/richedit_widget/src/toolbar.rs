//! Toolbar contract: what a toolbar sees and the commands it can issue.
//!
//! A toolbar never edits the document. It renders a [`ToolbarView`] whose
//! controls carry [`ToolbarAction`] values; the editor applies an action when
//! it is dispatched.

use richedit_core::constants::TOOLBAR_ARIA_LABEL;
use richedit_core::{BlockType, DocumentState, InlineStyle};

/// Command issued by a toolbar control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleInlineStyle(InlineStyle),
    ToggleBlockType(BlockType),
}

/// Capabilities handed to a toolbar on each render.
#[derive(Debug, Clone)]
pub struct ToolbarProps {
    current_state: DocumentState,
}

impl ToolbarProps {
    pub fn new(current_state: DocumentState) -> Self {
        Self { current_state }
    }

    pub fn current_state(&self) -> &DocumentState {
        &self.current_state
    }

    /// Command toggling `style` at the current selection.
    pub fn on_toggle_inline_style(&self, style: InlineStyle) -> ToolbarAction {
        ToolbarAction::ToggleInlineStyle(style)
    }

    /// Command toggling the block type of the selected blocks.
    pub fn on_toggle_block_type(&self, block_type: BlockType) -> ToolbarAction {
        ToolbarAction::ToggleBlockType(block_type)
    }

    /// Return `true` when `style` is in the current inline style.
    pub fn is_style_active(&self, style: &InlineStyle) -> bool {
        self.current_state.current_inline_style().has(style)
    }

    /// Block type at the start of the selection.
    pub fn active_block_type(&self) -> BlockType {
        let state = &self.current_state;
        state
            .content()
            .block_for_key(state.selection().start_key())
            .map(|block| block.block_type().clone())
            .unwrap_or_default()
    }
}

/// One rendered toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarControl {
    pub test_id: String,
    pub label: String,
    pub aria_pressed: bool,
    pub action: ToolbarAction,
}

impl ToolbarControl {
    /// Button toggling `style`, pressed while the style is active.
    pub fn inline_style(
        props: &ToolbarProps,
        test_id: impl Into<String>,
        label: impl Into<String>,
        style: InlineStyle,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            label: label.into(),
            aria_pressed: props.is_style_active(&style),
            action: props.on_toggle_inline_style(style),
        }
    }

    /// Button toggling `block_type`, pressed while the start block has it.
    pub fn block_type(
        props: &ToolbarProps,
        test_id: impl Into<String>,
        label: impl Into<String>,
        block_type: BlockType,
    ) -> Self {
        Self {
            test_id: test_id.into(),
            label: label.into(),
            aria_pressed: props.active_block_type() == block_type,
            action: props.on_toggle_block_type(block_type),
        }
    }
}

/// Rendered toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub role: &'static str,
    pub aria_label: String,
    pub class_name: Option<String>,
    pub controls: Vec<ToolbarControl>,
}

impl ToolbarView {
    pub fn new(controls: Vec<ToolbarControl>) -> Self {
        Self {
            role: "toolbar",
            aria_label: TOOLBAR_ARIA_LABEL.to_string(),
            class_name: None,
            controls,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Control with the given test id.
    pub fn control(&self, test_id: &str) -> Option<&ToolbarControl> {
        self.controls
            .iter()
            .find(|control| control.test_id == test_id)
    }
}

/// Renders a toolbar for the editor's current document.
pub trait Toolbar: Send {
    fn render(&self, props: &ToolbarProps) -> ToolbarView;
}

/// Bold, italic and underline buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolbar;

impl Toolbar for DefaultToolbar {
    fn render(&self, props: &ToolbarProps) -> ToolbarView {
        ToolbarView::new(vec![
            ToolbarControl::inline_style(props, "bold-button", "Bold", InlineStyle::Bold),
            ToolbarControl::inline_style(props, "italic-button", "Italic", InlineStyle::Italic),
            ToolbarControl::inline_style(
                props,
                "underline-button",
                "Underline",
                InlineStyle::Underline,
            ),
        ])
    }
}

/// Adapts a render closure into a [`Toolbar`].
pub struct ToolbarFn<F>(pub F);

impl<F> Toolbar for ToolbarFn<F>
where
    F: Fn(&ToolbarProps) -> ToolbarView + Send,
{
    fn render(&self, props: &ToolbarProps) -> ToolbarView {
        (self.0)(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richedit_core::SelectionState;

    fn bold_selection() -> DocumentState {
        let state = DocumentState::create_from_text("bold text");
        let key = state.content().first_block().key().to_string();
        let selected = state.with_selection(SelectionState::range(
            state.content(),
            (&key, 0),
            (&key, 4),
        ));
        richedit_core::document::toggle_inline_style(&selected, &InlineStyle::Bold)
    }

    #[test]
    fn default_toolbar_renders_three_labelled_buttons() {
        let view = DefaultToolbar.render(&ToolbarProps::new(DocumentState::create_empty()));
        assert_eq!(view.role, "toolbar");
        assert_eq!(view.aria_label, "Text formatting toolbar");
        let ids: Vec<&str> = view.controls.iter().map(|c| c.test_id.as_str()).collect();
        assert_eq!(ids, vec!["bold-button", "italic-button", "underline-button"]);
        let labels: Vec<&str> = view.controls.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Bold", "Italic", "Underline"]);
        assert!(view.controls.iter().all(|c| !c.aria_pressed));
    }

    #[test]
    fn pressed_state_follows_current_inline_style() {
        let view = DefaultToolbar.render(&ToolbarProps::new(bold_selection()));
        assert!(view.control("bold-button").expect("bold").aria_pressed);
        assert!(!view.control("italic-button").expect("italic").aria_pressed);
        assert_eq!(
            view.control("bold-button").expect("bold").action,
            ToolbarAction::ToggleInlineStyle(InlineStyle::Bold)
        );
    }

    #[test]
    fn closures_render_custom_toolbars() {
        let toolbar = ToolbarFn(|props: &ToolbarProps| {
            ToolbarView::new(vec![
                ToolbarControl::block_type(props, "h1-button", "H1", BlockType::HeaderOne),
                ToolbarControl::inline_style(props, "code-button", "Code", InlineStyle::Code),
            ])
            .with_class_name("custom-toolbar")
        });
        let view = toolbar.render(&ToolbarProps::new(DocumentState::create_empty()));
        assert_eq!(view.class_name.as_deref(), Some("custom-toolbar"));
        assert_eq!(
            view.control("h1-button").expect("h1").action,
            ToolbarAction::ToggleBlockType(BlockType::HeaderOne)
        );
        assert!(view.control("bold-button").is_none());
    }
}
