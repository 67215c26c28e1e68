//! Content blocks: paragraph-level units with per-character metadata.

use super::style::{CustomTag, InlineStyle, StyleSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::Range;

/// Paragraph-level structural classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    #[default]
    Unstyled,
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    CodeBlock,
    Atomic,
    Custom(CustomTag),
}

impl BlockType {
    /// Return the wire tag for this block type (`unstyled`, `header-one`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unstyled => "unstyled",
            Self::Paragraph => "paragraph",
            Self::HeaderOne => "header-one",
            Self::HeaderTwo => "header-two",
            Self::HeaderThree => "header-three",
            Self::HeaderFour => "header-four",
            Self::HeaderFive => "header-five",
            Self::HeaderSix => "header-six",
            Self::UnorderedListItem => "unordered-list-item",
            Self::OrderedListItem => "ordered-list-item",
            Self::Blockquote => "blockquote",
            Self::CodeBlock => "code-block",
            Self::Atomic => "atomic",
            Self::Custom(tag) => tag.as_str(),
        }
    }

    /// Parse a wire tag; unknown tags become [`BlockType::Custom`] and an
    /// empty tag is `unstyled`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "" | "unstyled" => Self::Unstyled,
            "paragraph" => Self::Paragraph,
            "header-one" => Self::HeaderOne,
            "header-two" => Self::HeaderTwo,
            "header-three" => Self::HeaderThree,
            "header-four" => Self::HeaderFour,
            "header-five" => Self::HeaderFive,
            "header-six" => Self::HeaderSix,
            "unordered-list-item" => Self::UnorderedListItem,
            "ordered-list-item" => Self::OrderedListItem,
            "blockquote" => Self::Blockquote,
            "code-block" => Self::CodeBlock,
            "atomic" => Self::Atomic,
            other => Self::Custom(CustomTag::new(other)),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for BlockType {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<&str> for BlockType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<BlockType> for String {
    fn from(value: BlockType) -> Self {
        match value {
            BlockType::Custom(tag) => tag.as_str().to_string(),
            other => other.as_str().to_string(),
        }
    }
}

/// Formatting attached to one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMetadata {
    pub style: StyleSet,
    pub entity: Option<String>,
}

impl CharacterMetadata {
    pub fn styled(style: StyleSet) -> Self {
        Self {
            style,
            entity: None,
        }
    }
}

/// Text with its per-char metadata, detached from any block.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TextRun {
    pub(crate) text: String,
    pub(crate) characters: Vec<CharacterMetadata>,
}

impl TextRun {
    pub(crate) fn push_run(&mut self, other: TextRun) {
        self.text.push_str(&other.text);
        self.characters.extend(other.characters);
    }
}

/// One block of text. Offsets are counted in `char`s.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub(crate) key: String,
    pub(crate) block_type: BlockType,
    pub(crate) text: String,
    pub(crate) characters: Vec<CharacterMetadata>,
    pub(crate) depth: u32,
    pub(crate) data: Map<String, Value>,
}

impl ContentBlock {
    /// Unstyled block whose characters carry no formatting.
    pub fn unstyled(key: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let characters = vec![CharacterMetadata::default(); text.chars().count()];
        Self {
            key: key.into(),
            block_type: BlockType::Unstyled,
            text,
            characters,
            depth: 0,
            data: Map::new(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn characters(&self) -> &[CharacterMetadata] {
        &self.characters
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Style of the char at `offset`; empty past the end.
    pub fn style_at(&self, offset: usize) -> StyleSet {
        self.characters
            .get(offset)
            .map(|meta| meta.style.clone())
            .unwrap_or_default()
    }

    pub fn entity_at(&self, offset: usize) -> Option<&str> {
        self.characters
            .get(offset)
            .and_then(|meta| meta.entity.as_deref())
    }

    /// Return `true` when every char in `range` carries `style`.
    pub fn range_has_style(&self, range: Range<usize>, style: &InlineStyle) -> bool {
        let end = range.end.min(self.len());
        self.characters[range.start.min(end)..end]
            .iter()
            .all(|meta| meta.style.has(style))
    }

    /// Copy with a different block type.
    pub fn with_block_type(&self, block_type: BlockType) -> Self {
        Self {
            block_type,
            ..self.clone()
        }
    }

    /// Copy with a different depth.
    pub fn with_depth(&self, depth: u32) -> Self {
        Self {
            depth,
            ..self.clone()
        }
    }

    /// Copy with each char in `range` restyled through `restyle`.
    pub(crate) fn map_styles<F>(&self, range: Range<usize>, restyle: F) -> Self
    where
        F: Fn(&StyleSet) -> StyleSet,
    {
        let mut next = self.clone();
        let end = range.end.min(next.characters.len());
        for meta in &mut next.characters[range.start.min(end)..end] {
            meta.style = restyle(&meta.style);
        }
        next
    }

    /// Split into the chars before and from `offset`.
    pub(crate) fn split_at(&self, offset: usize) -> (TextRun, TextRun) {
        let offset = offset.min(self.len());
        let byte = char_to_byte(&self.text, offset);
        (
            TextRun {
                text: self.text[..byte].to_string(),
                characters: self.characters[..offset].to_vec(),
            },
            TextRun {
                text: self.text[byte..].to_string(),
                characters: self.characters[offset..].to_vec(),
            },
        )
    }
}

/// Byte index of the char at `char_offset`, or the text length past the end.
pub(crate) fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
