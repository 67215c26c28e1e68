use super::*;
use crate::document::content::ContentState;
use crate::document::selection::SelectionState;

fn select(state: &DocumentState, block: usize, from: usize, to: usize) -> DocumentState {
    let key = state.content().blocks()[block].key().to_string();
    let selection = SelectionState::range(state.content(), (&key, from), (&key, to));
    state.with_selection(selection)
}

fn caret(state: &DocumentState, block: usize, offset: usize) -> DocumentState {
    let key = state.content().blocks()[block].key().to_string();
    state.with_selection(SelectionState::collapsed(key, offset))
}

#[test]
fn collapsed_toggle_sets_override_without_touching_content() {
    let state = DocumentState::create_from_text("hello");
    let toggled = toggle_inline_style(&state, &InlineStyle::Bold);
    assert!(toggled.current_inline_style().has(&InlineStyle::Bold));
    assert!(toggled.content().is_equivalent(state.content()));
    assert!(!toggled.same_identity(&state));

    let back = toggle_inline_style(&toggled, &InlineStyle::Bold);
    assert!(back.is_equivalent(&state));
}

#[test]
fn range_toggle_applies_then_removes() {
    let state = select(&DocumentState::create_from_text("hello world"), 0, 0, 5);
    let bold = toggle_inline_style(&state, &InlineStyle::Bold);
    assert!(bold
        .content()
        .first_block()
        .range_has_style(0..5, &InlineStyle::Bold));
    assert!(!bold.content().first_block().style_at(5).has(&InlineStyle::Bold));

    let plain = toggle_inline_style(&bold, &InlineStyle::Bold);
    assert!(plain.is_equivalent(&state));
}

#[test]
fn block_toggle_switches_back_to_unstyled() {
    let state = DocumentState::create_from_text("title");
    let header = toggle_block_type(&state, &BlockType::HeaderOne);
    assert_eq!(
        header.content().first_block().block_type(),
        &BlockType::HeaderOne
    );
    let back = toggle_block_type(&header, &BlockType::HeaderOne);
    assert_eq!(
        back.content().first_block().block_type(),
        &BlockType::Unstyled
    );
    assert!(back.is_equivalent(&state));
}

#[test]
fn block_toggle_replaces_a_different_active_type() {
    let state = toggle_block_type(&DocumentState::create_from_text("x"), &BlockType::Blockquote);
    let list = toggle_block_type(&state, &BlockType::UnorderedListItem);
    assert_eq!(
        list.content().first_block().block_type(),
        &BlockType::UnorderedListItem
    );
}

#[test]
fn formatting_commands_are_handled() {
    let state = select(&DocumentState::create_from_text("abc"), 0, 0, 3);
    for (command, style) in [
        ("bold", InlineStyle::Bold),
        ("italic", InlineStyle::Italic),
        ("underline", InlineStyle::Underline),
        ("code", InlineStyle::Code),
        ("strikethrough", InlineStyle::Strikethrough),
    ] {
        match handle_key_command(&state, command) {
            KeyCommandResult::Handled(next) => {
                assert!(
                    next.current_inline_style().has(&style),
                    "command: {}",
                    command
                );
            }
            KeyCommandResult::NotHandled => panic!("command not handled: {}", command),
        }
    }
}

#[test]
fn unknown_commands_are_not_handled() {
    let state = DocumentState::create_from_text("abc");
    for command in ["", "split-block", "BOLD", "transpose-characters"] {
        assert!(
            !handle_key_command(&state, command).is_handled(),
            "command: {}",
            command
        );
    }
}

#[test]
fn backspace_at_start_of_styled_first_block_resets_it() {
    let header = toggle_block_type(&DocumentState::create_from_text("Title"), &BlockType::HeaderTwo);
    let at_start = caret(&header, 0, 0);
    let next = handle_key_command(&at_start, "backspace")
        .into_state()
        .expect("handled");
    assert_eq!(next.content().first_block().block_type(), &BlockType::Unstyled);
    assert_eq!(next.plain_text(), "Title");
}

#[test]
fn backspace_mid_text_or_in_plain_block_is_not_handled() {
    let state = DocumentState::create_from_text("plain\ntext");
    assert!(!handle_key_command(&caret(&state, 0, 0), "backspace").is_handled());
    assert!(!handle_key_command(&caret(&state, 1, 2), "backspace-word").is_handled());
    assert!(!handle_key_command(&select(&state, 0, 0, 2), "backspace").is_handled());
}

#[test]
fn backspace_after_atomic_block_removes_it() {
    let state = DocumentState::create_from_text("media\nafter");
    let atomic = toggle_block_type(&caret(&state, 0, 0), &BlockType::Atomic);
    let next = handle_key_command(&caret(&atomic, 1, 0), "backspace")
        .into_state()
        .expect("handled");
    assert_eq!(next.content().blocks().len(), 1);
    assert_eq!(next.plain_text(), "after");
}

#[test]
fn delete_before_atomic_block_removes_it() {
    let state = DocumentState::create_from_text("before\nmedia");
    let atomic = toggle_block_type(&caret(&state, 1, 0), &BlockType::Atomic);
    let at_end = caret(&atomic, 0, 6);
    let next = handle_key_command(&at_end, "delete")
        .into_state()
        .expect("handled");
    assert_eq!(next.plain_text(), "before");
    assert!(!handle_key_command(&caret(&atomic, 0, 2), "delete").is_handled());
}

#[test]
fn key_command_names_round_trip() {
    for command in [
        KeyCommand::Bold,
        KeyCommand::BackspaceToStartOfLine,
        KeyCommand::DeleteToEndOfBlock,
    ] {
        assert_eq!(command.as_str().parse::<KeyCommand>(), Ok(command));
    }
    assert_eq!(
        "nope".parse::<KeyCommand>(),
        Err(UnknownKeyCommand("nope".to_string()))
    );
}

#[test]
fn toggles_on_multi_block_content_do_not_panic_on_stale_selection() {
    let content = ContentState::create_from_text("a\nb");
    let state = DocumentState::create_with_content(content)
        .with_selection(SelectionState::collapsed("missing", 9));
    let next = toggle_block_type(&state, &BlockType::CodeBlock);
    assert_eq!(next.content().first_block().block_type(), &BlockType::CodeBlock);
}

#[test]
fn blank_style_toggle_changes_nothing_and_survives_reload() {
    let state = select(&DocumentState::create_from_text("important text"), 0, 0, 9);
    let toggled = toggle_inline_style(&state, &InlineStyle::from(""));
    assert!(toggled.same_identity(&state));

    let caret_state = caret(&state, 0, 3);
    let collapsed = toggle_inline_style(&caret_state, &InlineStyle::from(""));
    assert!(collapsed.same_identity(&caret_state));

    let raw = crate::serialization::serialize_document(&toggled);
    let reloaded = crate::serialization::deserialize_document(&raw);
    assert_eq!(reloaded.plain_text(), "important text");
}

#[test]
fn custom_styles_spelled_like_built_ins_are_the_built_ins() {
    let state = select(&DocumentState::create_from_text("alias"), 0, 0, 5);
    let toggled = toggle_inline_style(&state, &InlineStyle::from("BOLD"));
    assert!(toggled.current_inline_style().has(&InlineStyle::Bold));

    let raw = crate::serialization::serialize_document(&toggled);
    let reloaded = crate::serialization::deserialize_document(&raw);
    assert!(reloaded.content().is_equivalent(toggled.content()));
}
