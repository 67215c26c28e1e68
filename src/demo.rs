//! Scripted walkthroughs of the editor in each configuration.
//!
//! Each walkthrough drives the widget the way a UI would (typing, selecting,
//! pressing toolbar controls) and writes what it observes to `out`.

use crate::{
    AsyncContentCoordinator, AsyncStatus, BlockType, Config, ContentRecord, ContentService,
    DocumentState, EditorProps, EditorView, FakeContentService, FakeServiceOptions, InlineStyle,
    ToolbarControl, ToolbarProps, ToolbarView, WysiwygEditor,
};
use anyhow::anyhow;
use richedit_core::serialization::{character_count, serialize_document};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Walkthrough selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Demo {
    All,
    Uncontrolled,
    Controlled,
    ReadOnly,
    CustomToolbar,
    Async,
}

/// Inputs shared by the walkthroughs.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub placeholder: String,
    pub content_id: String,
    pub title: String,
    pub service: FakeServiceOptions,
}

impl DemoOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            placeholder: config.placeholder.clone(),
            content_id: crate::fixtures::WELCOME_ID.to_string(),
            title: "My Doc".to_string(),
            service: FakeServiceOptions::from(config),
        }
    }
}

fn pressed(view: &EditorView, test_id: &str) -> bool {
    view.toolbar
        .as_ref()
        .and_then(|toolbar| toolbar.control(test_id))
        .map(|control| control.aria_pressed)
        .unwrap_or(false)
}

/// Dispatch the action of toolbar control `test_id`, as a click would.
fn press(editor: &mut WysiwygEditor, test_id: &str) -> anyhow::Result<()> {
    let action = editor
        .render()
        .toolbar
        .and_then(|toolbar| toolbar.control(test_id).map(|control| control.action.clone()))
        .ok_or_else(|| anyhow!("no toolbar control '{}'", test_id))?;
    editor.dispatch(action)?;
    Ok(())
}

fn move_to_end(editor: &mut WysiwygEditor) {
    let end = editor.editor_state().move_selection_to_end();
    editor.select(end.selection().clone());
}

pub fn uncontrolled(options: &DemoOptions, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "== uncontrolled ==")?;
    let mut editor = WysiwygEditor::new(EditorProps::new().placeholder(options.placeholder.as_str()));
    writeln!(out, "placeholder: {:?}", editor.render().placeholder)?;

    editor.input_text("Hello rich text")?;
    let all = editor.editor_state().select_all();
    editor.select(all.selection().clone());
    press(&mut editor, "bold-button")?;

    let view = editor.render();
    writeln!(out, "text: {}", view.plain_text)?;
    writeln!(out, "bold pressed: {}", pressed(&view, "bold-button"))?;
    writeln!(out, "raw: {}", serialize_document(&editor.editor_state()))?;
    Ok(())
}

pub fn controlled(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "== controlled ==")?;
    let initial = DocumentState::create_from_text("Owned by the caller");
    let external = Arc::new(Mutex::new(initial.clone()));
    let changes = Arc::new(AtomicUsize::new(0));

    let sink = Arc::clone(&external);
    let counter = Arc::clone(&changes);
    let mut editor = WysiwygEditor::new(EditorProps::new().value(initial).on_change(
        move |state| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = state;
            counter.fetch_add(1, Ordering::SeqCst);
        },
    ));
    let sync = |editor: &mut WysiwygEditor| {
        let latest = external
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        editor.set_value(latest)
    };

    move_to_end(&mut editor);
    sync(&mut editor)?;
    editor.input_text(", edited")?;
    sync(&mut editor)?;
    editor.handle_key_command("italic");
    sync(&mut editor)?;
    editor.input_text("!")?;
    sync(&mut editor)?;

    let state = editor.editor_state();
    writeln!(out, "mode: {}", editor.mode())?;
    writeln!(out, "changes reported: {}", changes.load(Ordering::SeqCst))?;
    writeln!(out, "text: {}", state.plain_text())?;
    writeln!(out, "characters: {}", character_count(&state))?;
    Ok(())
}

pub fn read_only(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "== read-only ==")?;
    let mut editor = WysiwygEditor::new(
        EditorProps::new()
            .default_value(DocumentState::create_from_text("This text cannot be edited."))
            .read_only(true)
            .aria_label("Read-only document"),
    );
    let view = editor.render();
    writeln!(out, "toolbar shown: {}", view.has_toolbar())?;
    writeln!(
        out,
        "bold command handled: {}",
        editor.handle_key_command("bold").is_handled()
    )?;
    match editor.input_text("typed") {
        Ok(()) => writeln!(out, "typing accepted")?,
        Err(err) => writeln!(out, "typing rejected: {}", err)?,
    }
    writeln!(out, "text: {}", editor.editor_state().plain_text())?;
    Ok(())
}

fn formatting_toolbar(props: &ToolbarProps) -> ToolbarView {
    ToolbarView::new(vec![
        ToolbarControl::block_type(props, "h1-button", "Heading", BlockType::HeaderOne),
        ToolbarControl::block_type(props, "quote-button", "Quote", BlockType::Blockquote),
        ToolbarControl::inline_style(props, "code-button", "Code", InlineStyle::Code),
        ToolbarControl::inline_style(
            props,
            "strike-button",
            "Strikethrough",
            InlineStyle::Strikethrough,
        ),
    ])
    .with_class_name("custom-toolbar")
}

pub fn custom_toolbar(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "== custom toolbar ==")?;
    let mut editor = WysiwygEditor::new(
        EditorProps::new()
            .default_value(DocumentState::create_from_text("Section title"))
            .render_toolbar(formatting_toolbar),
    );
    let labels: Vec<String> = editor
        .render()
        .toolbar
        .map(|toolbar| toolbar.controls.into_iter().map(|c| c.label).collect())
        .unwrap_or_default();
    writeln!(out, "controls: {}", labels.join(", "))?;

    press(&mut editor, "h1-button")?;
    let first = editor.editor_state().content().first_block().block_type().clone();
    writeln!(out, "after heading: {}", first)?;
    writeln!(out, "heading pressed: {}", pressed(&editor.render(), "h1-button"))?;

    press(&mut editor, "h1-button")?;
    let first = editor.editor_state().content().first_block().block_type().clone();
    writeln!(out, "after second press: {}", first)?;
    Ok(())
}

fn report(out: &mut impl Write, step: &str, status: &AsyncStatus) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<10} loading={} saving={} error={:?} last_saved={:?} id={:?}",
        step,
        status.is_loading,
        status.is_saving,
        status.error,
        status.last_saved.map(|at| at.to_rfc3339()),
        status.current_content_id,
    )
}

pub async fn async_content(options: &DemoOptions, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "== async content ==")?;
    let service = Arc::new(FakeContentService::new(options.service.clone()));
    let coordinator = AsyncContentCoordinator::new(Arc::clone(&service));

    match service.list().await {
        Ok(items) => {
            for item in items {
                writeln!(out, "available: {} ({})", item.id, item.title)?;
            }
        }
        Err(err) => writeln!(out, "listing failed: {}", err)?,
    }

    coordinator.save(&options.title).await;
    report(out, "early save", &coordinator.status())?;
    coordinator.clear_error();

    coordinator.load(&options.content_id).await;
    let status = coordinator.status();
    report(out, "load", &status)?;
    if status.error.is_some() {
        return Ok(());
    }
    writeln!(out, "loaded text: {}", coordinator.editor_state().plain_text())?;

    let mut editor = WysiwygEditor::new(
        EditorProps::new()
            .value(coordinator.editor_state())
            .on_change(coordinator.change_handler()),
    );
    move_to_end(&mut editor);
    editor.set_value(coordinator.editor_state())?;
    editor.input_text(" Edited in the walkthrough.")?;
    editor.set_value(coordinator.editor_state())?;
    writeln!(out, "can save: {}", coordinator.can_save())?;

    coordinator.save(&options.title).await;
    report(out, "save", &coordinator.status())?;

    let copy = ContentRecord::new(
        format!("{} (copy)", options.title),
        serialize_document(&coordinator.editor_state()),
    );
    match service.save(copy).await {
        Ok(saved) => writeln!(out, "copy saved: {} as {}", saved.title, saved.id)?,
        Err(err) => writeln!(out, "copy failed: {}", err)?,
    }
    Ok(())
}

/// Run the selected walkthrough(s).
pub async fn run(demo: Demo, options: &DemoOptions, out: &mut impl Write) -> anyhow::Result<()> {
    let all = demo == Demo::All;
    if all || demo == Demo::Uncontrolled {
        uncontrolled(options, out)?;
    }
    if all || demo == Demo::Controlled {
        controlled(out)?;
    }
    if all || demo == Demo::ReadOnly {
        read_only(out)?;
    }
    if all || demo == Demo::CustomToolbar {
        custom_toolbar(out)?;
    }
    if all || demo == Demo::Async {
        async_content(options, out).await?;
    }
    Ok(())
}
