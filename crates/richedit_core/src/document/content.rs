//! Document content: ordered blocks plus the entity map.

use super::block::ContentBlock;
use super::key::unique_block_key;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

/// How an entity's text may be edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityMutability {
    #[default]
    Mutable,
    Immutable,
    Segmented,
}

/// Metadata attached to a character range (links, mentions, media).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub mutability: EntityMutability,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// Immutable document content. Always holds at least one block.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentState {
    blocks: Vec<ContentBlock>,
    entity_map: BTreeMap<String, Entity>,
}

impl ContentState {
    /// Build content with one unstyled block per line of `text`.
    ///
    /// `\r\n`, `\r` and `\n` are all treated as line breaks.
    pub fn create_from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut taken = HashSet::new();
        let blocks = normalized
            .split('\n')
            .map(|line| ContentBlock::unstyled(unique_block_key(&mut taken), line))
            .collect();
        Self {
            blocks,
            entity_map: BTreeMap::new(),
        }
    }

    /// Assemble content from parts, substituting one empty block for none.
    pub(crate) fn from_parts(
        mut blocks: Vec<ContentBlock>,
        entity_map: BTreeMap<String, Entity>,
    ) -> Self {
        if blocks.is_empty() {
            let mut taken = HashSet::new();
            blocks.push(ContentBlock::unstyled(unique_block_key(&mut taken), ""));
        }
        Self { blocks, entity_map }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn entity_map(&self) -> &BTreeMap<String, Entity> {
        &self.entity_map
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entity_map.get(key)
    }

    pub fn block_for_key(&self, key: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|block| block.key == key)
    }

    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.key == key)
    }

    pub fn first_block(&self) -> &ContentBlock {
        &self.blocks[0]
    }

    pub fn last_block(&self) -> &ContentBlock {
        &self.blocks[self.blocks.len() - 1]
    }

    /// Block immediately before `key`, if any.
    pub fn block_before(&self, key: &str) -> Option<&ContentBlock> {
        let index = self.index_of_key(key)?;
        index.checked_sub(1).and_then(|i| self.blocks.get(i))
    }

    /// Block immediately after `key`, if any.
    pub fn block_after(&self, key: &str) -> Option<&ContentBlock> {
        let index = self.index_of_key(key)?;
        self.blocks.get(index + 1)
    }

    /// Plain-text projection: block texts joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(ContentBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `true` unless the content is a single empty block.
    pub fn has_text(&self) -> bool {
        self.blocks.len() > 1 || !self.blocks[0].is_empty()
    }

    /// Compare text, block structure and character styles, ignoring block keys.
    pub fn is_equivalent(&self, other: &ContentState) -> bool {
        self.blocks.len() == other.blocks.len()
            && self.blocks.iter().zip(&other.blocks).all(|(a, b)| {
                a.text == b.text
                    && a.block_type == b.block_type
                    && a.depth == b.depth
                    && a.characters.len() == b.characters.len()
                    && a
                        .characters
                        .iter()
                        .zip(&b.characters)
                        .all(|(x, y)| x.style == y.style)
            })
    }

    /// Copy with `blocks` replacing the current block list.
    pub(crate) fn with_blocks(&self, blocks: Vec<ContentBlock>) -> Self {
        Self::from_parts(blocks, self.entity_map.clone())
    }

    /// Keys currently in use.
    pub(crate) fn block_keys(&self) -> HashSet<String> {
        self.blocks.iter().map(|block| block.key.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_from_text_splits_all_line_break_styles() {
        let content = ContentState::create_from_text("one\r\ntwo\rthree\nfour");
        let texts: Vec<&str> = content.blocks().iter().map(ContentBlock::text).collect();
        assert_eq!(texts, vec!["one", "two", "three", "four"]);
        assert_eq!(content.plain_text(), "one\ntwo\nthree\nfour");
    }

    #[test]
    fn empty_text_yields_one_empty_block() {
        let content = ContentState::create_from_text("");
        assert_eq!(content.blocks().len(), 1);
        assert!(!content.has_text());
        assert_eq!(content.plain_text(), "");
    }

    #[test]
    fn two_empty_blocks_count_as_text() {
        let content = ContentState::create_from_text("\n");
        assert_eq!(content.blocks().len(), 2);
        assert!(content.has_text());
    }

    #[test]
    fn block_keys_are_unique() {
        let content = ContentState::create_from_text("a\nb\nc\nd\ne");
        assert_eq!(content.block_keys().len(), 5);
    }

    #[test]
    fn equivalence_ignores_keys() {
        let a = ContentState::create_from_text("same\ntext");
        let b = ContentState::create_from_text("same\ntext");
        assert_ne!(a.first_block().key(), b.first_block().key());
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&ContentState::create_from_text("other")));
    }

    #[test]
    fn neighbours_follow_block_order() {
        let content = ContentState::create_from_text("a\nb\nc");
        let middle = content.blocks()[1].key().to_string();
        assert_eq!(content.block_before(&middle).map(ContentBlock::text), Some("a"));
        assert_eq!(content.block_after(&middle).map(ContentBlock::text), Some("c"));
        assert!(content.block_before(content.first_block().key()).is_none());
        assert!(content.block_after(content.last_block().key()).is_none());
    }
}
