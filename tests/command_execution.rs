use std::sync::Arc;

use canvas_studio::command::{Command, CommandOutcome};
use canvas_studio::config::EditorConfig;
use canvas_studio::element::properties::{FieldValue, patch_field};
use canvas_studio::element::{
    Element, ElementKind, ElementPatch, ShapePatch, ShapeType, TextPatch, factory,
};
use canvas_studio::event::EditorEvent;
use canvas_studio::id_generator::ElementId;
use canvas_studio::state::EditorSession;
use canvas_studio::template::TemplateCatalog;
use egui::Pos2;
use parking_lot::Mutex;

// Instagram Post: 1080x1080 with `bg1` and `text1`
fn instagram_session() -> EditorSession {
    let config = EditorConfig::default();
    let template = TemplateCatalog::builtin()
        .unwrap()
        .resolve(Some(1), &config)
        .unwrap();
    EditorSession::new(template, config)
}

fn blank_session() -> EditorSession {
    EditorSession::blank(EditorConfig::default())
}

fn record_events(session: &EditorSession) -> Arc<Mutex<Vec<EditorEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    session.subscribe(Box::new(move |event: &EditorEvent| sink.lock().push(event.clone())));
    events
}

#[test]
fn test_template_scenario() {
    let mut session = instagram_session();
    let seed = session.elements().to_vec();

    assert_eq!(session.dimensions().width, 1080);
    assert_eq!(session.dimensions().height, 1080);
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].id(), &ElementId::new("bg1"));
    assert_eq!(seed[1].id(), &ElementId::new("text1"));
    assert_eq!(session.history().len(), 1);
    assert!(!session.can_undo());

    let id = session.add_element(factory::create_shape_at(ShapeType::Rectangle, 150, 150));
    assert_eq!(session.elements().len(), 3);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.selected_id(), Some(&id));
    let after_add = session.elements().to_vec();

    assert!(session.undo());
    assert_eq!(session.elements(), seed.as_slice());

    assert!(session.redo());
    assert_eq!(session.elements(), after_add.as_slice());
    assert_eq!(session.elements()[2].position(), Some((150, 150)));
}

#[test]
fn test_undo_all_returns_seed_and_redo_all_returns_final() {
    let mut session = instagram_session();
    let seed = session.elements().to_vec();

    session.add_text();
    assert!(session.update_element(
        &ElementId::new("text1"),
        ElementPatch::Text(TextPatch {
            font_size: Some(64),
            ..Default::default()
        }),
    ));
    let shape = session.add_shape(ShapeType::Star);
    assert!(session.duplicate_element(&shape).is_some());
    assert!(session.remove_element(&ElementId::new("text1")));
    let steps = 5;
    assert_eq!(session.history().len(), steps + 1);
    let final_elements = session.elements().to_vec();

    for _ in 0..steps {
        assert!(session.undo());
    }
    assert_eq!(session.elements(), seed.as_slice());
    assert!(!session.can_undo());

    for _ in 0..steps {
        assert!(session.redo());
    }
    assert_eq!(session.elements(), final_elements.as_slice());
    assert!(!session.can_redo());
}

#[test]
fn test_undo_redo_inverse() {
    let mut session = blank_session();
    session.add_text();
    let shape = session.add_shape(ShapeType::Circle);
    session.update_element(
        &shape,
        ElementPatch::Shape(ShapePatch {
            width: Some(240),
            ..Default::default()
        }),
    );

    let current = session.elements().to_vec();
    assert!(session.undo());
    assert_ne!(session.elements(), current.as_slice());
    assert!(session.redo());
    assert_eq!(session.elements(), current.as_slice());

    assert!(session.undo());
    let previous = session.elements().to_vec();
    assert!(session.redo());
    assert!(session.undo());
    assert_eq!(session.elements(), previous.as_slice());
}

#[test]
fn test_mutation_after_undo_truncates_redo() {
    let mut session = blank_session();
    session.add_text();
    session.add_shape(ShapeType::Rectangle);
    session.undo();
    assert!(session.can_redo());

    session.add_shape(ShapeType::Star);
    assert!(!session.can_redo());
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().index(), 2);
    assert!(!session.redo());
}

#[test]
fn test_history_boundaries_are_noops() {
    let mut session = blank_session();
    let initial = session.elements().to_vec();

    assert!(!session.undo());
    assert_eq!(session.elements(), initial.as_slice());
    assert_eq!(session.history().index(), 0);

    session.add_text();
    let latest = session.elements().to_vec();
    assert!(!session.redo());
    assert_eq!(session.elements(), latest.as_slice());
    assert_eq!(session.history().index(), 1);

    assert_eq!(session.execute(Command::Redo), CommandOutcome::Unchanged);
}

#[test]
fn test_remove_selected_clears_selection() {
    let mut session = blank_session();
    let id = session.add_text();
    assert_eq!(session.selected_id(), Some(&id));

    assert!(session.remove_element(&id));
    assert!(session.selection().is_empty());
    assert!(session.selected_element().is_none());
}

#[test]
fn test_remove_other_keeps_selection() {
    let mut session = blank_session();
    let text = session.add_text();
    let shape = session.add_shape(ShapeType::Rectangle);
    session.select(Some(&text));

    assert!(session.remove_element(&shape));
    assert_eq!(session.selected_id(), Some(&text));
}

#[test]
fn test_duplicate_offsets_and_selects_copy() {
    let mut session = blank_session();
    let source = session.add_shape(ShapeType::Triangle);
    let history_len = session.history().len();

    let copy = session.duplicate_element(&source).unwrap();
    assert_ne!(copy, source);
    assert_eq!(session.selected_id(), Some(&copy));
    assert_eq!(session.history().len(), history_len + 1);

    let copied = session.document().find_element_by_id(&copy).unwrap();
    assert_eq!(copied.position(), Some((170, 170)));
}

#[test]
fn test_duplicate_uses_configured_offset() {
    let config = EditorConfig {
        duplicate_offset: 5,
        ..Default::default()
    };
    let mut session = EditorSession::blank(config);
    let text = session.add_text();
    let copy = session.duplicate_selected().unwrap();

    assert_ne!(copy, text);
    let copied = session.document().find_element_by_id(&copy).unwrap();
    assert_eq!(copied.position(), Some((105, 105)));
}

fn move_to(session: &mut EditorSession, id: &ElementId, x: i32, y: i32) {
    for (name, value) in [("x", x), ("y", y)] {
        let patch = patch_field(ElementKind::Shape, name, FieldValue::Integer(value)).unwrap();
        assert!(session.update_element(id, patch));
    }
}

#[test]
fn test_duplicate_at_position_limit_saturates() {
    let mut session = blank_session();
    let source = session.add_shape(ShapeType::Rectangle);
    move_to(&mut session, &source, i32::MAX, i32::MAX);

    let copy = session.duplicate_element(&source).unwrap();
    let copied = session.document().find_element_by_id(&copy).unwrap();
    assert_eq!(copied.position(), Some((i32::MAX, i32::MAX)));
}

#[test]
fn test_negative_duplicate_offset_saturates_at_minimum() {
    let config = EditorConfig {
        duplicate_offset: -20,
        ..Default::default()
    };
    let mut session = EditorSession::blank(config);
    let source = session.add_shape(ShapeType::Circle);
    move_to(&mut session, &source, i32::MIN, 40);

    let copy = session.duplicate_element(&source).unwrap();
    let copied = session.document().find_element_by_id(&copy).unwrap();
    assert_eq!(copied.position(), Some((i32::MIN, 20)));
}

#[test]
fn test_unchanged_update_is_not_recorded() {
    let mut session = blank_session();
    let text = session.add_text();
    session.undo();
    session.redo();
    session.undo();
    assert!(session.can_redo());

    // The text is gone after undo, so this targets a missing id
    assert!(!session.update_element(
        &text,
        ElementPatch::Text(TextPatch {
            content: Some("x".to_string()),
            ..Default::default()
        })
    ));
    assert!(session.can_redo());

    session.redo();
    let len = session.history().len();
    let same = ElementPatch::Text(TextPatch {
        content: Some("New Text".to_string()),
        ..Default::default()
    });
    assert!(!session.update_element(&text, same));
    assert_eq!(session.history().len(), len);

    let mismatched = ElementPatch::Shape(ShapePatch {
        width: Some(300),
        ..Default::default()
    });
    assert!(!session.update_element(&text, mismatched));
    assert_eq!(session.history().len(), len);
}

#[test]
fn test_undo_drops_selection_of_vanished_element() {
    let mut session = blank_session();
    let text = session.add_text();
    assert_eq!(session.selected_id(), Some(&text));

    session.undo();
    assert!(session.selected_id().is_none());

    session.redo();
    assert!(session.selected_id().is_none());
}

#[test]
fn test_undo_keeps_selection_of_surviving_element() {
    let mut session = instagram_session();
    let text1 = ElementId::new("text1");
    session.update_element(
        &text1,
        ElementPatch::Text(TextPatch {
            font_size: Some(72),
            ..Default::default()
        }),
    );
    session.select(Some(&text1));

    session.undo();
    assert_eq!(session.selected_id(), Some(&text1));
    match session.selected_element() {
        Some(Element::Text(text)) => assert_eq!(text.font_size, 48),
        other => panic!("expected text1, got {other:?}"),
    }
}

#[test]
fn test_select_missing_id_clears_selection() {
    let mut session = blank_session();
    let text = session.add_text();
    assert_eq!(session.selected_id(), Some(&text));

    session.select(Some(&ElementId::new("ghost")));
    assert!(session.selected_id().is_none());
}

#[test]
fn test_add_element_with_taken_id_is_rekeyed() {
    let mut session = instagram_session();
    let mut element = factory::create_text();
    if let Element::Text(text) = &mut element {
        text.id = ElementId::new("text1");
    }

    let id = session.add_element(element);
    assert_ne!(id, ElementId::new("text1"));
    assert_eq!(session.elements().len(), 3);
    assert!(session.document().contains(&ElementId::new("text1")));
    assert!(session.document().contains(&id));
}

#[test]
fn test_select_at_picks_topmost_foreground() {
    let mut session = blank_session();
    let lower = session.add_element(factory::create_shape_at(ShapeType::Rectangle, 100, 100));
    let upper = session.add_element(factory::create_shape_at(ShapeType::Circle, 150, 150));

    assert_eq!(session.select_at(Pos2::new(175.0, 175.0)), Some(upper.clone()));
    assert_eq!(session.selected_id(), Some(&upper));

    assert_eq!(session.select_at(Pos2::new(110.0, 110.0)), Some(lower.clone()));
    assert_eq!(session.selected_id(), Some(&lower));

    // Only the background is here
    assert_eq!(session.select_at(Pos2::new(900.0, 700.0)), None);
    assert!(session.selected_id().is_none());
}

#[test]
fn test_view_changes_are_not_recorded() {
    let mut session = blank_session();
    let len = session.history().len();

    assert_eq!(session.execute(Command::ZoomIn), CommandOutcome::Presentation);
    assert_eq!(session.view().zoom(), 125);
    assert_eq!(session.execute(Command::ToggleGrid), CommandOutcome::Presentation);
    assert!(!session.view().show_grid());
    assert_eq!(session.execute(Command::SetZoom(500)), CommandOutcome::Presentation);
    assert_eq!(session.view().zoom(), 200);
    assert_eq!(session.execute(Command::ZoomIn), CommandOutcome::Unchanged);

    assert_eq!(session.history().len(), len);
    session.add_text();
    session.undo();
    assert_eq!(session.view().zoom(), 200);
    assert!(!session.view().show_grid());
}

#[test]
fn test_commands_report_outcomes() {
    let mut session = blank_session();

    let id = match session.execute(Command::AddText) {
        CommandOutcome::Created(id) => id,
        other => panic!("expected a created element, got {other:?}"),
    };
    assert!(Command::AddText.is_recorded());
    assert!(!Command::Select(None).is_recorded());

    let patch = ElementPatch::Text(TextPatch {
        color: Some("#EF4444".to_string()),
        ..Default::default()
    });
    assert_eq!(
        session.execute(Command::UpdateElement {
            id: id.clone(),
            patch: patch.clone(),
        }),
        CommandOutcome::Recorded
    );
    assert_eq!(
        session.execute(Command::UpdateElement {
            id: id.clone(),
            patch,
        }),
        CommandOutcome::Unchanged
    );
    assert_eq!(session.execute(Command::Select(None)), CommandOutcome::Presentation);
    assert_eq!(session.execute(Command::Select(None)), CommandOutcome::Unchanged);
    assert_eq!(session.execute(Command::Undo), CommandOutcome::Moved);
    assert_eq!(session.execute(Command::RemoveElement(id.clone())), CommandOutcome::Recorded);
    assert_eq!(session.execute(Command::RemoveElement(id)), CommandOutcome::Unchanged);
}

#[test]
fn test_command_serialization() {
    let command = Command::UpdateElement {
        id: ElementId::new("text1"),
        patch: ElementPatch::Text(TextPatch {
            font_size: Some(32),
            ..Default::default()
        }),
    };
    let json = serde_json::to_string(&command).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();
    assert_eq!(back, command);
}

#[test]
fn test_event_order_for_add() {
    let mut session = blank_session();
    let events = record_events(&session);

    let id = session.add_text();

    let events = events.lock();
    assert_eq!(
        *events,
        vec![
            EditorEvent::DocumentLoaded {
                template: "Blank Canvas".to_string(),
            },
            EditorEvent::HistoryMoved { index: 1, len: 2 },
            EditorEvent::ElementAdded { id: id.clone() },
            EditorEvent::SelectionChanged {
                old: None,
                new: Some(id),
            },
        ]
    );
}

#[test]
fn test_events_for_undo_and_view() {
    let mut session = blank_session();
    let id = session.add_text();
    let events = record_events(&session);

    session.undo();
    session.zoom_out();

    let events = events.lock();
    assert_eq!(
        events[1..],
        [
            EditorEvent::HistoryMoved { index: 0, len: 2 },
            EditorEvent::SelectionChanged {
                old: Some(id),
                new: None,
            },
            EditorEvent::ViewChanged {
                zoom: 75,
                show_grid: true,
            },
        ]
    );
}
