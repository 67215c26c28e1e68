use crate::toolbar::ToolbarView;

/// CSS class every editor root carries.
pub const EDITOR_CLASS: &str = "wysiwyg-editor";

/// Presentation snapshot of an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub id: Option<String>,
    pub class_name: String,
    /// Absent when the editor is read-only.
    pub toolbar: Option<ToolbarView>,
    /// Present only while there is nothing to show.
    pub placeholder: Option<String>,
    pub aria_label: Option<String>,
    pub read_only: bool,
    pub role: &'static str,
    pub plain_text: String,
}

impl EditorView {
    pub fn has_toolbar(&self) -> bool {
        self.toolbar.is_some()
    }

    pub fn shows_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}

/// Root class list: the editor class plus an optional caller class.
pub(crate) fn class_list(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|class| !class.is_empty()) {
        Some(class) => format!("{} {}", EDITOR_CLASS, class),
        None => EDITOR_CLASS.to_string(),
    }
}
