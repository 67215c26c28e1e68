//! Rich-text editing commands: style toggles and key commands.
//!
//! These are the only transitions the editor widget and toolbars issue
//! directly; each takes a snapshot and returns a new one.

use super::block::BlockType;
use super::modifier;
use super::state::DocumentState;
use super::style::InlineStyle;
use std::fmt;
use std::str::FromStr;

/// Toggle `style` at the selection.
///
/// A collapsed caret toggles the style for the next insertion. A range loses
/// the style everywhere if the current inline style has it, and gains it
/// everywhere otherwise. A blank style changes nothing.
pub fn toggle_inline_style(state: &DocumentState, style: &InlineStyle) -> DocumentState {
    if style.is_blank() {
        return state.clone();
    }
    let current = state.current_inline_style();
    let selection = state.selection();
    if selection.is_collapsed() {
        return state.with_inline_style_override(current.toggled(style));
    }
    let content = if current.has(style) {
        modifier::remove_inline_style(state.content(), selection, style)
    } else {
        modifier::apply_inline_style(state.content(), selection, style)
    };
    state.push(content, selection.clone())
}

/// Set the selected blocks to `block_type`, or back to `unstyled` when the
/// start block already has that type.
pub fn toggle_block_type(state: &DocumentState, block_type: &BlockType) -> DocumentState {
    let selection = state.selection();
    let content = state.content();
    let active = content
        .block_for_key(selection.start_key())
        .map(|block| block.block_type() == block_type)
        .unwrap_or(false);
    let target = if active {
        BlockType::Unstyled
    } else {
        block_type.clone()
    };
    let next = modifier::set_block_type(content, selection, &target);
    state.push(next, selection.clone())
}

/// Editing commands understood by [`handle_key_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Backspace,
    BackspaceWord,
    BackspaceToStartOfLine,
    Delete,
    DeleteWord,
    DeleteToEndOfBlock,
}

impl KeyCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Code => "code",
            Self::Strikethrough => "strikethrough",
            Self::Backspace => "backspace",
            Self::BackspaceWord => "backspace-word",
            Self::BackspaceToStartOfLine => "backspace-to-start-of-line",
            Self::Delete => "delete",
            Self::DeleteWord => "delete-word",
            Self::DeleteToEndOfBlock => "delete-to-end-of-block",
        }
    }

    /// Inline style toggled by this command, if it is a formatting command.
    pub fn inline_style(&self) -> Option<InlineStyle> {
        match self {
            Self::Bold => Some(InlineStyle::Bold),
            Self::Italic => Some(InlineStyle::Italic),
            Self::Underline => Some(InlineStyle::Underline),
            Self::Code => Some(InlineStyle::Code),
            Self::Strikethrough => Some(InlineStyle::Strikethrough),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for command names that are not editing commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyCommand(pub String);

impl fmt::Display for UnknownKeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key command '{}'", self.0)
    }
}

impl std::error::Error for UnknownKeyCommand {}

impl FromStr for KeyCommand {
    type Err = UnknownKeyCommand;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "underline" => Ok(Self::Underline),
            "code" => Ok(Self::Code),
            "strikethrough" => Ok(Self::Strikethrough),
            "backspace" => Ok(Self::Backspace),
            "backspace-word" => Ok(Self::BackspaceWord),
            "backspace-to-start-of-line" => Ok(Self::BackspaceToStartOfLine),
            "delete" => Ok(Self::Delete),
            "delete-word" => Ok(Self::DeleteWord),
            "delete-to-end-of-block" => Ok(Self::DeleteToEndOfBlock),
            other => Err(UnknownKeyCommand(other.to_string())),
        }
    }
}

/// Outcome of [`handle_key_command`].
#[derive(Debug, Clone)]
pub enum KeyCommandResult {
    Handled(DocumentState),
    NotHandled,
}

impl KeyCommandResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    pub fn into_state(self) -> Option<DocumentState> {
        match self {
            Self::Handled(state) => Some(state),
            Self::NotHandled => None,
        }
    }
}

/// Translate a named editing command into a state transition.
///
/// Unknown commands, and known ones that do not apply at the current
/// selection, report [`KeyCommandResult::NotHandled`].
pub fn handle_key_command(state: &DocumentState, command: &str) -> KeyCommandResult {
    let Ok(command) = command.parse::<KeyCommand>() else {
        return KeyCommandResult::NotHandled;
    };
    if let Some(style) = command.inline_style() {
        return KeyCommandResult::Handled(toggle_inline_style(state, &style));
    }
    let next = match command {
        KeyCommand::Backspace | KeyCommand::BackspaceWord | KeyCommand::BackspaceToStartOfLine => {
            on_backspace(state)
        }
        KeyCommand::Delete | KeyCommand::DeleteWord | KeyCommand::DeleteToEndOfBlock => {
            on_delete(state)
        }
        _ => None,
    };
    next.map_or(KeyCommandResult::NotHandled, KeyCommandResult::Handled)
}

/// Backspace at the start of a block: drop a preceding atomic block, or
/// clear the block style of a styled first/empty block.
fn on_backspace(state: &DocumentState) -> Option<DocumentState> {
    let selection = state.selection();
    if !selection.is_collapsed() || selection.start_offset() != 0 {
        return None;
    }
    let content = state.content();
    let key = selection.start_key();
    let block = content.block_for_key(key)?;

    if let Some(before) = content.block_before(key) {
        if before.block_type() == &BlockType::Atomic {
            let next = modifier::remove_block(content, before.key());
            return Some(state.push(next, selection.clone()));
        }
    }

    let is_first = content.first_block().key() == key;
    let is_styled = block.block_type() != &BlockType::Unstyled || block.depth() > 0;
    if is_styled && (is_first || block.is_empty()) {
        let next = modifier::reset_block(content, key);
        return Some(state.push(next, selection.clone()));
    }
    None
}

/// Delete at the end of a block removes a following atomic block.
fn on_delete(state: &DocumentState) -> Option<DocumentState> {
    let selection = state.selection();
    if !selection.is_collapsed() {
        return None;
    }
    let content = state.content();
    let key = selection.start_key();
    let block = content.block_for_key(key)?;
    if selection.start_offset() != block.len() {
        return None;
    }
    let after = content.block_after(key)?;
    if after.block_type() != &BlockType::Atomic {
        return None;
    }
    let next = modifier::remove_block(content, after.key());
    Some(state.push(next, selection.clone()))
}

#[cfg(test)]
mod tests;
