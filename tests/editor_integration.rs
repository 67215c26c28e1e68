use richedit::demo::{self, Demo, DemoOptions};
use richedit::fixtures::WELCOME_ID;
use richedit::serialization::{deserialize_document, serialize_document};
use richedit::{
    AsyncContentCoordinator, Config, DocumentState, EditorProps, FakeContentService,
    FakeServiceOptions, InlineStyle, OwnershipMode, SelectionState, WysiwygEditor,
};
use std::sync::{Arc, Mutex};

fn instant_options() -> DemoOptions {
    DemoOptions {
        service: FakeServiceOptions::instant(),
        ..DemoOptions::from_config(&Config::default())
    }
}

async fn transcript(demo: Demo, options: &DemoOptions) -> String {
    let mut out = Vec::new();
    demo::run(demo, options, &mut out).await.expect("walkthrough");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn facade_editor_round_trips_styled_text() {
    let mut editor =
        WysiwygEditor::new(EditorProps::new().default_value(DocumentState::create_from_text("Hello")));
    let state = editor.editor_state();
    let key = state.content().first_block().key().to_string();
    editor.select(SelectionState::range(state.content(), (&key, 0), (&key, 5)));
    editor.toggle_inline_style(InlineStyle::Bold).expect("editable");

    let before = editor.editor_state();
    let restored = deserialize_document(&serialize_document(&before));
    assert!(restored.content().is_equivalent(before.content()));
}

#[test]
fn both_props_route_changes_only_to_the_callback() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let value = DocumentState::create_from_text("owned");
    let mut editor = WysiwygEditor::new(
        EditorProps::new()
            .value(value.clone())
            .default_value(DocumentState::create_from_text("slot"))
            .on_change(move |state: DocumentState| sink.lock().expect("sink").push(state.plain_text())),
    );
    assert_eq!(editor.mode(), OwnershipMode::Controlled);

    editor.input_text("!").expect("editable");
    editor.split_block().expect("editable");
    assert!(editor.editor_state().same_identity(&value));
    assert_eq!(seen.lock().expect("seen").len(), 2);
}

#[tokio::test]
async fn load_then_save_against_seeded_service() {
    let coordinator =
        AsyncContentCoordinator::new(FakeContentService::new(FakeServiceOptions::instant()));
    coordinator.save("My Doc").await;
    assert_eq!(coordinator.service().save_calls(), 0);

    coordinator.load(WELCOME_ID).await;
    let loaded = coordinator.status();
    assert_eq!(loaded.current_content_id.as_deref(), Some(WELCOME_ID));
    assert_eq!(loaded.error, None);

    coordinator.save("My Doc").await;
    let saved = coordinator.status();
    assert_eq!(saved.error, None);
    assert!(saved.last_saved > loaded.last_saved);
    assert_eq!(coordinator.service().save_calls(), 1);
}

#[tokio::test]
async fn every_walkthrough_reports_expected_outcomes() {
    let output = transcript(Demo::All, &instant_options()).await;

    assert!(output.contains("== uncontrolled =="));
    assert!(output.contains("placeholder: Some(\"Start typing...\")"));
    assert!(output.contains("bold pressed: true"));

    assert!(output.contains("mode: controlled"));
    assert!(output.contains("changes reported: 4"));
    assert!(output.contains("text: Owned by the caller, edited!"));

    assert!(output.contains("toolbar shown: false"));
    assert!(output.contains("bold command handled: false"));
    assert!(output.contains("typing rejected: editor is read-only"));

    assert!(output.contains("controls: Heading, Quote, Code, Strikethrough"));
    assert!(output.contains("after heading: header-one"));
    assert!(output.contains("heading pressed: true"));
    assert!(output.contains("after second press: unstyled"));

    assert!(output.contains("No content ID specified for saving"));
    assert!(output.contains("loaded text: Welcome to the WYSIWYG Editor!"));
    assert!(output.contains("can save: true"));
    assert!(output.contains("copy saved: My Doc (copy) as "));
}

#[tokio::test]
async fn offline_walkthrough_stops_after_failed_load() {
    let options = DemoOptions {
        service: FakeServiceOptions::instant().with_offline(true),
        ..instant_options()
    };
    let output = transcript(Demo::Async, &options).await;

    assert!(output.contains("listing failed"));
    assert!(output.contains("Network error: Unable to load content"));
    assert!(!output.contains("can save"));
    assert!(!output.contains("== uncontrolled =="));
}
