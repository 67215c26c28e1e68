//! Immutable editor document snapshots.

use super::content::ContentState;
use super::modifier;
use super::selection::SelectionState;
use super::style::StyleSet;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct DocumentInner {
    content: Arc<ContentState>,
    selection: SelectionState,
    inline_style_override: Option<StyleSet>,
}

/// Immutable snapshot of editable rich text.
///
/// Cloning is cheap and shares the snapshot. Every edit produces a new
/// snapshot, so [`DocumentState::same_identity`] detects changes by pointer.
#[derive(Clone)]
pub struct DocumentState {
    inner: Arc<DocumentInner>,
}

impl fmt::Debug for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentState")
            .field("plain_text", &self.plain_text())
            .field("blocks", &self.inner.content.blocks().len())
            .field("selection", &self.inner.selection)
            .field("inline_style_override", &self.inner.inline_style_override)
            .finish()
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::create_empty()
    }
}

impl DocumentState {
    /// Document with a single empty block.
    pub fn create_empty() -> Self {
        Self::create_with_content(ContentState::create_from_text(""))
    }

    /// Document with one unstyled block per line of `text`.
    pub fn create_from_text(text: &str) -> Self {
        Self::create_with_content(ContentState::create_from_text(text))
    }

    /// Document over `content` with the caret at the start of the first block.
    pub fn create_with_content(content: ContentState) -> Self {
        let selection = SelectionState::collapsed(content.first_block().key(), 0);
        Self::from_parts(Arc::new(content), selection, None)
    }

    fn from_parts(
        content: Arc<ContentState>,
        selection: SelectionState,
        inline_style_override: Option<StyleSet>,
    ) -> Self {
        Self {
            inner: Arc::new(DocumentInner {
                content,
                selection,
                inline_style_override,
            }),
        }
    }

    pub fn content(&self) -> &ContentState {
        &self.inner.content
    }

    pub fn selection(&self) -> &SelectionState {
        &self.inner.selection
    }

    /// Style queued for the next insertion at a collapsed caret.
    pub fn inline_style_override(&self) -> Option<&StyleSet> {
        self.inner.inline_style_override.as_ref()
    }

    pub fn plain_text(&self) -> String {
        self.inner.content.plain_text()
    }

    /// `true` when both values are the very same snapshot.
    pub fn same_identity(&self, other: &DocumentState) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Same text, block structure, char styles and current inline style.
    pub fn is_equivalent(&self, other: &DocumentState) -> bool {
        self.content().is_equivalent(other.content())
            && self.current_inline_style() == other.current_inline_style()
    }

    /// Inline style at the selection, as reported to toolbars and used for
    /// newly typed text.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(style) = &self.inner.inline_style_override {
            return style.clone();
        }
        let content = self.content();
        let selection = self.selection();
        let Some(block) = content.block_for_key(selection.start_key()) else {
            return StyleSet::new();
        };
        let offset = selection.start_offset();
        if selection.is_collapsed() {
            if offset > 0 {
                return block.style_at(offset - 1);
            }
            if !block.is_empty() {
                return block.style_at(0);
            }
        } else {
            if offset < block.len() {
                return block.style_at(offset);
            }
            if offset > 0 {
                return block.style_at(offset - 1);
            }
        }
        look_upward_for_style(content, block.key())
    }

    /// Copy with a new selection; a pending style override is dropped.
    pub fn with_selection(&self, selection: SelectionState) -> Self {
        let selection = selection.normalized(self.content());
        Self::from_parts(Arc::clone(&self.inner.content), selection, None)
    }

    /// Copy with a pending inline style for the next insertion.
    pub fn with_inline_style_override(&self, style: StyleSet) -> Self {
        Self::from_parts(
            Arc::clone(&self.inner.content),
            self.inner.selection.clone(),
            Some(style),
        )
    }

    /// New snapshot after an edit; a pending style override is consumed.
    pub(crate) fn push(&self, content: ContentState, selection: SelectionState) -> Self {
        let selection = selection
            .normalized(&content)
            .with_focus(self.inner.selection.has_focus());
        Self::from_parts(Arc::new(content), selection, None)
    }

    /// Select the whole document.
    pub fn select_all(&self) -> Self {
        let content = self.content();
        let last = content.last_block();
        let selection = SelectionState::range(
            content,
            (content.first_block().key(), 0),
            (last.key(), last.len()),
        );
        self.with_selection(selection)
    }

    /// Collapse the caret to the end of the last block.
    pub fn move_selection_to_end(&self) -> Self {
        let last = self.content().last_block();
        self.with_selection(SelectionState::collapsed(last.key(), last.len()))
    }

    /// Type `text` at the selection using the current inline style.
    ///
    /// Line breaks in `text` split blocks.
    pub fn insert_text(&self, text: &str) -> Self {
        let style = self.current_inline_style();
        let mut content = self.content().clone();
        let mut selection = self.selection().clone();
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for (index, line) in normalized.split('\n').enumerate() {
            if index > 0 {
                (content, selection) = modifier::split_block(&content, &selection);
            }
            if !line.is_empty() {
                (content, selection) = modifier::insert_text(&content, &selection, line, &style);
            }
        }
        self.push(content, selection)
    }

    /// Split the current block at the caret.
    pub fn split_block(&self) -> Self {
        let (content, selection) = modifier::split_block(self.content(), self.selection());
        self.push(content, selection)
    }
}

fn look_upward_for_style(content: &ContentState, key: &str) -> StyleSet {
    let Some(index) = content.index_of_key(key) else {
        return StyleSet::new();
    };
    content.blocks()[..index]
        .iter()
        .rev()
        .find(|block| !block.is_empty())
        .map(|block| block.style_at(block.len() - 1))
        .unwrap_or_default()
}
