use std::thread;
use std::time::{Duration, Instant};

use canvas_studio::backend::{DesignBackend, ExportFormat, MemoryBackend, Outbox};
use canvas_studio::config::EditorConfig;
use canvas_studio::element::ShapeType;
use canvas_studio::error::BackendError;
use canvas_studio::notification::NotificationLevel;
use canvas_studio::state::EditorSession;
use canvas_studio::template::TemplateCatalog;
use futures::executor::block_on;

fn instagram_session() -> EditorSession {
    let config = EditorConfig::default();
    let template = TemplateCatalog::builtin()
        .unwrap()
        .resolve(Some(1), &config)
        .unwrap();
    EditorSession::new(template, config)
}

// Polls until every request has been delivered
fn drain(outbox: &mut Outbox, session: &mut EditorSession) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !outbox.is_idle() {
        outbox.poll(session);
        assert!(Instant::now() < deadline, "backend requests did not finish");
        thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn test_save_stores_payload() {
    let backend = MemoryBackend::new();
    let mut session = instagram_session();
    session.add_shape(ShapeType::Rectangle);

    let payload = session.design_payload("Launch post");
    assert_eq!(payload.template_id, Some(1));
    assert_eq!(payload.template_name, "Instagram Post");
    assert_eq!(payload.elements.len(), 3);

    let saved = block_on(backend.save_design(payload.clone())).unwrap();
    assert_eq!(saved.name, "Launch post");
    assert_eq!(backend.design_count(), 1);
    assert_eq!(backend.load_design(saved.id).unwrap(), payload);
}

#[test]
fn test_blank_payload_has_no_template_id() {
    let session = EditorSession::blank(EditorConfig::default());
    let payload = session.design_payload("Untitled");
    assert_eq!(payload.template_id, None);

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("templateId").is_none());
    assert_eq!(json["templateName"], "Blank Canvas");
}

#[test]
fn test_save_rejects_empty_name() {
    let backend = MemoryBackend::new();
    let session = instagram_session();

    let result = block_on(backend.save_design(session.design_payload("   ")));
    assert!(matches!(result, Err(BackendError::InvalidRequest(_))));
    assert_eq!(backend.design_count(), 0);
}

#[test]
fn test_load_unknown_design() {
    let backend = MemoryBackend::new();
    let id = uuid::Uuid::new_v4();
    assert!(matches!(
        backend.load_design(id),
        Err(BackendError::NotFound(missing)) if missing == id
    ));
}

#[test]
fn test_export_formats() {
    let backend = MemoryBackend::new();
    let session = instagram_session();

    for format in ExportFormat::ALL {
        let request = session.export_request("Instagram Post", format);
        let image = block_on(backend.export_design(request)).unwrap();
        assert_eq!(image.file_name, format!("instagram-post.{}", format.extension()));
        assert_eq!(image.content_type, format.content_type());
        assert!(!image.data.is_empty());
    }
    assert_eq!(backend.export_count(), 3);
}

#[test]
fn test_export_is_named_after_the_design() {
    let backend = MemoryBackend::new();
    let session = instagram_session();

    let request = session.export_request("Launch post", ExportFormat::Png);
    assert_eq!(request.design.name, "Launch post");
    assert_eq!(request.design.template_name, "Instagram Post");

    let image = block_on(backend.export_design(request)).unwrap();
    assert_eq!(image.file_name, "launch-post.png");
}

#[test]
fn test_export_validates_request() {
    let backend = MemoryBackend::new();
    let session = instagram_session();

    let mut request = session.export_request("Launch post", ExportFormat::Jpg);
    assert_eq!(request.quality, 100);
    assert_eq!(request.output_dimensions().width, 1080);

    request.quality = 0;
    assert!(matches!(
        block_on(backend.export_design(request.clone())),
        Err(BackendError::InvalidRequest(_))
    ));

    request.quality = 90;
    request.width = Some(0);
    assert!(matches!(
        block_on(backend.export_design(request)),
        Err(BackendError::InvalidRequest(_))
    ));
    assert_eq!(backend.export_count(), 0);
}

#[test]
fn test_outbox_delivers_save_notification() {
    let backend = MemoryBackend::new();
    let mut session = instagram_session();
    let mut outbox = Outbox::new();

    outbox.save(&backend, session.design_payload("Launch post"));
    assert_eq!(outbox.in_flight(), 1);
    drain(&mut outbox, &mut session);

    let notifications = session.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Success);
    let id = session.design_id().unwrap();
    assert!(backend.load_design(id).is_ok());
    assert!(session.notifications().is_empty());
}

#[test]
fn test_failed_requests_leave_state_untouched() {
    let backend = MemoryBackend::new();
    backend.set_offline(true);
    let mut session = instagram_session();
    let shape = session.add_shape(ShapeType::Circle);

    let elements = session.elements().to_vec();
    let history_len = session.history().len();
    let history_index = session.history().index();

    let mut outbox = Outbox::new();
    outbox.save(&backend, session.design_payload("Offline"));
    outbox.export(&backend, session.export_request("Offline", ExportFormat::Png));
    drain(&mut outbox, &mut session);

    let notifications = session.drain_notifications();
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n.is_error()));

    assert_eq!(session.elements(), elements.as_slice());
    assert_eq!(session.history().len(), history_len);
    assert_eq!(session.history().index(), history_index);
    assert_eq!(session.selected_id(), Some(&shape));
    assert!(session.design_id().is_none());
    assert_eq!(backend.design_count(), 0);
}

#[test]
fn test_outbox_poll_is_nonblocking_when_idle() {
    let mut session = instagram_session();
    let mut outbox = Outbox::new();
    assert!(outbox.is_idle());
    assert_eq!(outbox.poll(&mut session), 0);
}
