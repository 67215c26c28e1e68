//! Caret and range selection over block keys and char offsets.

use super::content::ContentState;

/// Anchor/focus selection. Offsets are char offsets within the keyed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    anchor_key: String,
    anchor_offset: usize,
    focus_key: String,
    focus_offset: usize,
    is_backward: bool,
    has_focus: bool,
}

impl SelectionState {
    /// Caret at `offset` within block `key`.
    pub fn collapsed(key: impl Into<String>, offset: usize) -> Self {
        let key = key.into();
        Self {
            anchor_key: key.clone(),
            anchor_offset: offset,
            focus_key: key,
            focus_offset: offset,
            is_backward: false,
            has_focus: false,
        }
    }

    /// Range from anchor to focus. Direction is derived from block order in
    /// `content`; unknown keys sort before known ones.
    pub fn range(
        content: &ContentState,
        anchor: (&str, usize),
        focus: (&str, usize),
    ) -> Self {
        let anchor_index = content.index_of_key(anchor.0);
        let focus_index = content.index_of_key(focus.0);
        let is_backward = (focus_index, focus.1) < (anchor_index, anchor.1);
        Self {
            anchor_key: anchor.0.to_string(),
            anchor_offset: anchor.1,
            focus_key: focus.0.to_string(),
            focus_offset: focus.1,
            is_backward,
            has_focus: false,
        }
    }

    pub fn anchor_key(&self) -> &str {
        &self.anchor_key
    }

    pub fn anchor_offset(&self) -> usize {
        self.anchor_offset
    }

    pub fn focus_key(&self) -> &str {
        &self.focus_key
    }

    pub fn focus_offset(&self) -> usize {
        self.focus_offset
    }

    pub fn is_backward(&self) -> bool {
        self.is_backward
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn with_focus(mut self, has_focus: bool) -> Self {
        self.has_focus = has_focus;
        self
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key && self.anchor_offset == self.focus_offset
    }

    pub fn start_key(&self) -> &str {
        if self.is_backward {
            &self.focus_key
        } else {
            &self.anchor_key
        }
    }

    pub fn start_offset(&self) -> usize {
        if self.is_backward {
            self.focus_offset
        } else {
            self.anchor_offset
        }
    }

    pub fn end_key(&self) -> &str {
        if self.is_backward {
            &self.anchor_key
        } else {
            &self.focus_key
        }
    }

    pub fn end_offset(&self) -> usize {
        if self.is_backward {
            self.anchor_offset
        } else {
            self.focus_offset
        }
    }

    /// Clamp this selection onto `content`: unknown keys move to the first
    /// block and offsets are capped at the block length.
    pub(crate) fn normalized(&self, content: &ContentState) -> Self {
        let fix = |key: &str, offset: usize| -> (String, usize) {
            match content.block_for_key(key) {
                Some(block) => (key.to_string(), offset.min(block.len())),
                None => (content.first_block().key().to_string(), 0),
            }
        };
        let (anchor_key, anchor_offset) = fix(&self.anchor_key, self.anchor_offset);
        let (focus_key, focus_offset) = fix(&self.focus_key, self.focus_offset);
        Self::range(
            content,
            (anchor_key.as_str(), anchor_offset),
            (focus_key.as_str(), focus_offset),
        )
        .with_focus(self.has_focus)
    }

    /// Block indices covered by this selection as `(start, end)`, inclusive.
    pub(crate) fn block_span(&self, content: &ContentState) -> Option<(usize, usize)> {
        let start = content.index_of_key(self.start_key())?;
        let end = content.index_of_key(self.end_key())?;
        Some((start, end.max(start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backward_range_swaps_start_and_end() {
        let content = ContentState::create_from_text("alpha\nbeta");
        let first = content.blocks()[0].key().to_string();
        let second = content.blocks()[1].key().to_string();
        let selection = SelectionState::range(&content, (&second, 2), (&first, 1));
        assert!(selection.is_backward());
        assert_eq!(selection.start_key(), first);
        assert_eq!(selection.start_offset(), 1);
        assert_eq!(selection.end_key(), second);
        assert_eq!(selection.end_offset(), 2);
        assert_eq!(selection.block_span(&content), Some((0, 1)));
    }

    #[test]
    fn same_block_direction_uses_offsets() {
        let content = ContentState::create_from_text("alpha");
        let key = content.first_block().key().to_string();
        assert!(SelectionState::range(&content, (&key, 4), (&key, 1)).is_backward());
        assert!(!SelectionState::range(&content, (&key, 1), (&key, 4)).is_backward());
        assert!(SelectionState::collapsed(key, 3).is_collapsed());
    }

    #[test]
    fn normalized_clamps_offsets_and_unknown_keys() {
        let content = ContentState::create_from_text("abc");
        let key = content.first_block().key().to_string();
        let clamped = SelectionState::collapsed(key.as_str(), 40).normalized(&content);
        assert_eq!(clamped.anchor_offset(), 3);
        let moved = SelectionState::collapsed("nope", 2).normalized(&content);
        assert_eq!(moved.anchor_key(), key);
        assert_eq!(moved.anchor_offset(), 0);
    }
}
