//! Pure content transformations over a selection.
//!
//! Every function returns new content; inputs are never modified.

use super::block::{BlockType, CharacterMetadata, ContentBlock, TextRun};
use super::content::ContentState;
use super::key::unique_block_key;
use super::selection::SelectionState;
use super::style::{InlineStyle, StyleSet};
use serde_json::Map;

fn restyle_range<F>(content: &ContentState, selection: &SelectionState, restyle: F) -> ContentState
where
    F: Fn(&StyleSet) -> StyleSet,
{
    let Some((start, end)) = selection.block_span(content) else {
        return content.clone();
    };
    let blocks = content
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| {
            if index < start || index > end {
                return block.clone();
            }
            let from = if index == start {
                selection.start_offset()
            } else {
                0
            };
            let to = if index == end {
                selection.end_offset()
            } else {
                block.len()
            };
            block.map_styles(from..to, &restyle)
        })
        .collect();
    content.with_blocks(blocks)
}

/// Add `style` to every selected char.
pub fn apply_inline_style(
    content: &ContentState,
    selection: &SelectionState,
    style: &InlineStyle,
) -> ContentState {
    restyle_range(content, selection, |set| set.with(style.clone()))
}

/// Remove `style` from every selected char.
pub fn remove_inline_style(
    content: &ContentState,
    selection: &SelectionState,
    style: &InlineStyle,
) -> ContentState {
    restyle_range(content, selection, |set| set.without(style))
}

/// Set the type of every block touched by `selection`.
///
/// A trailing block selected only at offset 0 is left alone.
pub fn set_block_type(
    content: &ContentState,
    selection: &SelectionState,
    block_type: &BlockType,
) -> ContentState {
    let Some((start, mut end)) = selection.block_span(content) else {
        return content.clone();
    };
    if end > start && selection.end_offset() == 0 {
        end -= 1;
    }
    let blocks = content
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| {
            if (start..=end).contains(&index) {
                block.with_block_type(block_type.clone())
            } else {
                block.clone()
            }
        })
        .collect();
    content.with_blocks(blocks)
}

/// Reset block `key` to `unstyled` at depth 0.
pub fn reset_block(content: &ContentState, key: &str) -> ContentState {
    let blocks = content
        .blocks()
        .iter()
        .map(|block| {
            if block.key() == key {
                block.with_block_type(BlockType::Unstyled).with_depth(0)
            } else {
                block.clone()
            }
        })
        .collect();
    content.with_blocks(blocks)
}

/// Drop block `key` entirely.
pub fn remove_block(content: &ContentState, key: &str) -> ContentState {
    let blocks = content
        .blocks()
        .iter()
        .filter(|block| block.key() != key)
        .cloned()
        .collect();
    content.with_blocks(blocks)
}

/// Delete the selected text, merging the edge blocks of a multi-block range.
///
/// # Returns
/// The new content and a caret at the start of the removed range.
pub fn remove_range(
    content: &ContentState,
    selection: &SelectionState,
) -> (ContentState, SelectionState) {
    if selection.is_collapsed() {
        return (content.clone(), selection.clone());
    }
    let Some((start, end)) = selection.block_span(content) else {
        return (content.clone(), selection.clone());
    };
    let start_block = &content.blocks()[start];
    let end_block = &content.blocks()[end];
    let (mut head, _) = start_block.split_at(selection.start_offset());
    let (_, tail) = end_block.split_at(selection.end_offset());
    let caret = head.characters.len();
    head.push_run(tail);

    let merged = ContentBlock {
        text: head.text,
        characters: head.characters,
        ..start_block.clone()
    };
    let mut blocks = Vec::with_capacity(content.blocks().len() - (end - start));
    blocks.extend_from_slice(&content.blocks()[..start]);
    blocks.push(merged);
    blocks.extend_from_slice(&content.blocks()[end + 1..]);
    (
        content.with_blocks(blocks),
        SelectionState::collapsed(start_block.key(), caret),
    )
}

/// Replace the selection with `text`, each inserted char carrying `style`.
///
/// `text` must not contain line breaks; callers split lines with
/// [`split_block`].
pub fn insert_text(
    content: &ContentState,
    selection: &SelectionState,
    text: &str,
    style: &StyleSet,
) -> (ContentState, SelectionState) {
    let (content, caret) = remove_range(content, selection);
    let key = caret.start_key().to_string();
    let Some(index) = content.index_of_key(&key) else {
        return (content, caret);
    };
    let block = &content.blocks()[index];
    let (mut head, tail) = block.split_at(caret.start_offset());
    let inserted = TextRun {
        text: text.to_string(),
        characters: vec![CharacterMetadata::styled(style.clone()); text.chars().count()],
    };
    let new_offset = head.characters.len() + inserted.characters.len();
    head.push_run(inserted);
    head.push_run(tail);

    let updated = ContentBlock {
        text: head.text,
        characters: head.characters,
        ..block.clone()
    };
    let mut blocks = content.blocks().to_vec();
    blocks[index] = updated;
    (
        content.with_blocks(blocks),
        SelectionState::collapsed(key, new_offset),
    )
}

/// Split the block at the caret (replacing any selection first).
///
/// The new block inherits type and depth but not block data.
pub fn split_block(
    content: &ContentState,
    selection: &SelectionState,
) -> (ContentState, SelectionState) {
    let (content, caret) = remove_range(content, selection);
    let Some(index) = content.index_of_key(caret.start_key()) else {
        return (content, caret);
    };
    let block = &content.blocks()[index];
    let (head, tail) = block.split_at(caret.start_offset());
    let mut taken = content.block_keys();
    let new_key = unique_block_key(&mut taken);

    let first = ContentBlock {
        text: head.text,
        characters: head.characters,
        ..block.clone()
    };
    let second = ContentBlock {
        key: new_key.clone(),
        text: tail.text,
        characters: tail.characters,
        data: Map::new(),
        ..block.clone()
    };
    let mut blocks = content.blocks().to_vec();
    blocks[index] = first;
    blocks.insert(index + 1, second);
    (
        content.with_blocks(blocks),
        SelectionState::collapsed(new_key, 0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(content: &ContentState) -> Vec<String> {
        content
            .blocks()
            .iter()
            .map(|block| block.key().to_string())
            .collect()
    }

    #[test]
    fn apply_style_spans_multiple_blocks() {
        let content = ContentState::create_from_text("abc\ndef\nghi");
        let k = keys(&content);
        let selection = SelectionState::range(&content, (&k[0], 1), (&k[2], 2));
        let styled = apply_inline_style(&content, &selection, &InlineStyle::Bold);

        let blocks = styled.blocks();
        assert!(!blocks[0].style_at(0).has(&InlineStyle::Bold));
        assert!(blocks[0].range_has_style(1..3, &InlineStyle::Bold));
        assert!(blocks[1].range_has_style(0..3, &InlineStyle::Bold));
        assert!(blocks[2].range_has_style(0..2, &InlineStyle::Bold));
        assert!(!blocks[2].style_at(2).has(&InlineStyle::Bold));
        // input untouched
        assert!(!content.blocks()[1].style_at(0).has(&InlineStyle::Bold));
    }

    #[test]
    fn set_block_type_skips_trailing_block_at_offset_zero() {
        let content = ContentState::create_from_text("abc\ndef");
        let k = keys(&content);
        let selection = SelectionState::range(&content, (&k[0], 1), (&k[1], 0));
        let next = set_block_type(&content, &selection, &BlockType::Blockquote);
        assert_eq!(next.blocks()[0].block_type(), &BlockType::Blockquote);
        assert_eq!(next.blocks()[1].block_type(), &BlockType::Unstyled);
    }

    #[test]
    fn remove_range_merges_edge_blocks() {
        let content = ContentState::create_from_text("hello\nbig\nworld");
        let k = keys(&content);
        let selection = SelectionState::range(&content, (&k[0], 2), (&k[2], 3));
        let (next, caret) = remove_range(&content, &selection);
        assert_eq!(next.plain_text(), "held");
        assert_eq!(next.blocks().len(), 1);
        assert_eq!(caret.start_key(), k[0]);
        assert_eq!(caret.start_offset(), 2);
    }

    #[test]
    fn insert_text_applies_style_and_moves_caret() {
        let content = ContentState::create_from_text("ac");
        let key = content.first_block().key().to_string();
        let style = StyleSet::new().with(InlineStyle::Italic);
        let (next, caret) = insert_text(
            &content,
            &SelectionState::collapsed(key.as_str(), 1),
            "b",
            &style,
        );
        assert_eq!(next.plain_text(), "abc");
        assert!(next.first_block().style_at(1).has(&InlineStyle::Italic));
        assert!(!next.first_block().style_at(0).has(&InlineStyle::Italic));
        assert_eq!(caret.start_offset(), 2);
    }

    #[test]
    fn split_block_creates_new_keyed_block() {
        let content = ContentState::create_from_text("abcd");
        let key = content.first_block().key().to_string();
        let header = set_block_type(
            &content,
            &SelectionState::collapsed(key.as_str(), 0),
            &BlockType::HeaderOne,
        );
        let (next, caret) = split_block(&header, &SelectionState::collapsed(key.as_str(), 2));
        assert_eq!(next.plain_text(), "ab\ncd");
        assert_eq!(next.blocks()[1].block_type(), &BlockType::HeaderOne);
        assert_ne!(next.blocks()[1].key(), key);
        assert_eq!(caret.start_key(), next.blocks()[1].key());
        assert_eq!(caret.start_offset(), 0);
    }

    #[test]
    fn remove_block_keeps_at_least_one_block() {
        let content = ContentState::create_from_text("only");
        let key = content.first_block().key().to_string();
        let next = remove_block(&content, &key);
        assert_eq!(next.blocks().len(), 1);
        assert!(!next.has_text());
    }
}
