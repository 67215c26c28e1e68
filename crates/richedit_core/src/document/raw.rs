//! Raw JSON-compatible form of document content.
//!
//! The raw form stores styles and entities as ranges over each block's text
//! rather than per character. It is the persisted shape of a document.

use super::block::{BlockType, CharacterMetadata, ContentBlock};
use super::content::{ContentState, Entity};
use super::key::unique_block_key;
use super::style::InlineStyle;
use crate::error::DeserializeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Whole-document raw form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: BTreeMap<String, Entity>,
}

/// One block in raw form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawInlineStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<RawEntityRange>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInlineStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: RawEntityKey,
}

/// Entity reference; written as a number, accepted as number or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntityKey {
    Index(u64),
    Name(String),
}

impl fmt::Display for RawEntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Collapse runs of equal values into `(offset, length, value)` ranges.
fn runs<'a, T, F>(characters: &'a [CharacterMetadata], mut pick: F) -> Vec<(usize, usize, T)>
where
    T: PartialEq,
    F: FnMut(&'a CharacterMetadata) -> Option<T>,
{
    let mut out: Vec<(usize, usize, T)> = Vec::new();
    let mut open: Option<(usize, T)> = None;
    for (index, meta) in characters.iter().enumerate() {
        let value = pick(meta);
        let continues = matches!((&open, &value), (Some((_, a)), Some(b)) if a == b);
        if continues {
            continue;
        }
        if let Some((start, prev)) = open.take() {
            out.push((start, index - start, prev));
        }
        open = value.map(|v| (index, v));
    }
    if let Some((start, prev)) = open {
        out.push((start, characters.len() - start, prev));
    }
    out
}

/// Convert content into its raw form.
///
/// Entity keys are renumbered `0..` in order of first use; entities no text
/// refers to are dropped.
pub fn convert_to_raw(content: &ContentState) -> RawContent {
    let mut entity_index: HashMap<&str, u64> = HashMap::new();
    let mut entity_map = BTreeMap::new();
    let mut blocks = Vec::with_capacity(content.blocks().len());

    for block in content.blocks() {
        let styles: HashSet<&InlineStyle> = block
            .characters()
            .iter()
            .flat_map(|meta| meta.style.iter())
            .collect();
        let mut inline_style_ranges: Vec<RawInlineStyleRange> = styles
            .into_iter()
            .flat_map(|style| {
                runs(block.characters(), |meta| meta.style.has(style).then_some(()))
                    .into_iter()
                    .map(move |(offset, length, ())| RawInlineStyleRange {
                        offset,
                        length,
                        style: style.clone(),
                    })
            })
            .collect();
        inline_style_ranges.sort_by(|a, b| {
            a.offset
                .cmp(&b.offset)
                .then_with(|| a.style.as_str().cmp(b.style.as_str()))
        });

        let mut entity_ranges = Vec::new();
        for (offset, length, key) in runs(block.characters(), |meta| meta.entity.as_deref()) {
            let Some(entity) = content.entity(key) else {
                continue;
            };
            let next = entity_index.len() as u64;
            let index = *entity_index.entry(key).or_insert_with(|| {
                entity_map.insert(next.to_string(), entity.clone());
                next
            });
            entity_ranges.push(RawEntityRange {
                offset,
                length,
                key: RawEntityKey::Index(index),
            });
        }

        blocks.push(RawBlock {
            key: block.key().to_string(),
            text: block.text().to_string(),
            block_type: block.block_type().clone(),
            depth: block.depth(),
            inline_style_ranges,
            entity_ranges,
            data: block.data().clone(),
        });
    }

    RawContent { blocks, entity_map }
}

/// Build content from a raw form, validating ranges and entity references.
///
/// Missing or duplicate block keys are replaced with fresh ones.
///
/// # Errors
/// Returns [`DeserializeError::InvalidRaw`] when there are no blocks, a range
/// falls outside its block text, a style name is empty, or an entity range
/// points at a key missing from the entity map.
pub fn convert_from_raw(raw: RawContent) -> Result<ContentState, DeserializeError> {
    if raw.blocks.is_empty() {
        return Err(DeserializeError::InvalidRaw(
            "raw content has no blocks".to_string(),
        ));
    }

    let mut taken: HashSet<String> = HashSet::new();
    let mut blocks = Vec::with_capacity(raw.blocks.len());
    for (index, raw_block) in raw.blocks.into_iter().enumerate() {
        let len = raw_block.text.chars().count();
        let mut characters = vec![CharacterMetadata::default(); len];

        for range in &raw_block.inline_style_ranges {
            if range.style.as_str().is_empty() {
                return Err(DeserializeError::InvalidRaw(format!(
                    "block {} has an empty style name",
                    index
                )));
            }
            let span = checked_span(index, range.offset, range.length, len)?;
            for meta in &mut characters[span] {
                meta.style = meta.style.with(range.style.clone());
            }
        }

        for range in &raw_block.entity_ranges {
            let key = range.key.to_string();
            if !raw.entity_map.contains_key(&key) {
                return Err(DeserializeError::InvalidRaw(format!(
                    "block {} references unknown entity '{}'",
                    index, key
                )));
            }
            let span = checked_span(index, range.offset, range.length, len)?;
            for meta in &mut characters[span] {
                meta.entity = Some(key.clone());
            }
        }

        let key = if raw_block.key.is_empty() || taken.contains(&raw_block.key) {
            unique_block_key(&mut taken)
        } else {
            taken.insert(raw_block.key.clone());
            raw_block.key
        };

        blocks.push(ContentBlock {
            key,
            block_type: raw_block.block_type,
            text: raw_block.text,
            characters,
            depth: raw_block.depth,
            data: raw_block.data,
        });
    }

    Ok(ContentState::from_parts(blocks, raw.entity_map))
}

fn checked_span(
    block: usize,
    offset: usize,
    length: usize,
    len: usize,
) -> Result<std::ops::Range<usize>, DeserializeError> {
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(DeserializeError::InvalidRaw(format!(
            "block {} range {}+{} exceeds text length {}",
            block, offset, length, len
        ))),
    }
}
