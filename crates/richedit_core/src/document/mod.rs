//! Immutable rich-text document model.
//!
//! A [`DocumentState`] pairs [`ContentState`] (blocks and entities) with a
//! [`SelectionState`]. Every edit yields a new snapshot; nothing is mutated
//! in place.

mod block;
mod commands;
mod content;
mod key;
pub mod modifier;
pub mod raw;
mod selection;
mod state;
mod style;

pub use block::{BlockType, CharacterMetadata, ContentBlock};
pub use commands::{
    handle_key_command, toggle_block_type, toggle_inline_style, KeyCommand, KeyCommandResult,
    UnknownKeyCommand,
};
pub use content::{ContentState, Entity, EntityMutability};
pub use key::generate_block_key;
pub use raw::{convert_from_raw, convert_to_raw, RawContent};
pub use selection::SelectionState;
pub use state::DocumentState;
pub use style::{CustomTag, InlineStyle, StyleSet};
