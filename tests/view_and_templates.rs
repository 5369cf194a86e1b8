use std::io::Write;

use canvas_studio::config::{EditorConfig, ZoomSettings};
use canvas_studio::document::Dimensions;
use canvas_studio::element::{BackgroundFill, Element, ShapeType, factory};
use canvas_studio::error::{ConfigError, TemplateError};
use canvas_studio::geometry::{element_bounds, topmost_hit};
use canvas_studio::renderer::{gradient_stops, parse_hex_color};
use canvas_studio::template::{Template, TemplateCatalog};
use canvas_studio::view::ViewTransform;
use egui::{Color32, Pos2};

#[test]
fn test_zoom_steps_and_clamps() {
    let mut view = ViewTransform::default();
    assert_eq!(view.zoom(), 100);

    for expected in [125, 150, 175, 200] {
        assert!(view.zoom_in());
        assert_eq!(view.zoom(), expected);
    }
    assert!(!view.zoom_in());
    assert!(!view.can_zoom_in());
    assert_eq!(view.zoom(), 200);

    assert!(view.set_zoom(0));
    assert_eq!(view.zoom(), 25);
    assert!(!view.zoom_out());
    assert!(!view.can_zoom_out());
}

#[test]
fn test_grid_toggle() {
    let mut view = ViewTransform::default();
    assert!(view.show_grid());
    view.toggle_grid();
    assert!(!view.show_grid());
    view.toggle_grid();
    assert!(view.show_grid());
}

#[test]
fn test_screen_document_mapping() {
    let mut view = ViewTransform::default();
    view.set_zoom(50);
    let origin = Pos2::new(40.0, 60.0);

    let screen = view.document_to_screen(origin, Pos2::new(200.0, 100.0));
    assert_eq!(screen, Pos2::new(140.0, 110.0));
    assert_eq!(view.screen_to_document(origin, screen), Pos2::new(200.0, 100.0));

    let size = view.canvas_size(Dimensions::new(1080, 1080));
    assert_eq!((size.x, size.y), (540.0, 540.0));
    assert_eq!(view.grid_step(), 10.0);
}

#[test]
fn test_text_bounds_follow_font_size() {
    let mut text = factory::create_text();
    if let Element::Text(t) = &mut text {
        t.content = "abcd".to_string();
        t.font_size = 10;
    }
    let bounds = element_bounds(&text, Dimensions::default());
    assert_eq!(bounds.min, Pos2::new(100.0, 100.0));
    assert!((bounds.width() - 24.0).abs() < 0.001);
    assert!((bounds.height() - 12.0).abs() < 0.001);
}

#[test]
fn test_hit_testing_ignores_background() {
    let dimensions = Dimensions::new(400, 400);
    let background = factory::create_background("#FFFFFF");
    let shape = factory::create_shape_at(ShapeType::Rectangle, 10, 10);
    let elements = vec![background, shape.clone()];

    assert_eq!(topmost_hit(&elements, dimensions, Pos2::new(20.0, 20.0)), Some(&shape));
    assert_eq!(topmost_hit(&elements, dimensions, Pos2::new(300.0, 300.0)), None);
}

#[test]
fn test_builtin_catalog() {
    let catalog = TemplateCatalog::builtin().unwrap();
    assert_eq!(catalog.len(), 6);
    assert!(catalog.categories().contains(&"social"));

    let instagram = catalog.get(1).unwrap();
    assert_eq!(instagram.name, "Instagram Post");
    assert_eq!(instagram.dimensions, Dimensions::new(1080, 1080));
    match &instagram.elements[1] {
        Element::Text(text) => {
            assert_eq!(text.content, "Sua Mensagem Aqui");
            assert_eq!(text.font_size, 48);
        }
        other => panic!("expected text1, got {other:?}"),
    }

    for template in catalog.iter() {
        assert!(template.dimensions.width > 0 && template.dimensions.height > 0);
        assert!(template.elements.iter().any(Element::is_background));
    }
}

#[test]
fn test_resolve_blank_and_unknown() {
    let catalog = TemplateCatalog::builtin().unwrap();
    let config = EditorConfig::default();

    let blank = catalog.resolve(None, &config).unwrap();
    assert!(blank.is_blank());
    assert_eq!(blank.dimensions, Dimensions::new(1200, 800));
    assert_eq!(blank.elements.len(), 1);
    match &blank.elements[0] {
        Element::Background(background) => {
            assert_eq!(background.fill, BackgroundFill::Color("#FFFFFF".to_string()));
        }
        other => panic!("expected background, got {other:?}"),
    }
    assert_eq!(catalog.resolve(Some(0), &config).unwrap(), blank);

    match catalog.resolve(Some(42), &config) {
        Err(TemplateError::UnknownTemplate(42)) => {}
        other => panic!("expected unknown template, got {other:?}"),
    }
}

#[test]
fn test_blank_uses_configured_canvas() {
    let config = EditorConfig {
        default_dimensions: Dimensions::new(640, 480),
        blank_background: "#000000".to_string(),
        ..Default::default()
    };
    let blank = Template::blank(&config);
    assert_eq!(blank.dimensions, Dimensions::new(640, 480));
    assert_eq!(blank.to_document().len(), 1);
}

#[test]
fn test_bad_catalog_json() {
    assert!(matches!(TemplateCatalog::from_json("{"), Err(TemplateError::Parse(_))));
}

#[test]
fn test_config_defaults_and_partial_json() {
    let config = EditorConfig::default();
    assert_eq!(config.default_dimensions, Dimensions::new(1200, 800));
    assert_eq!(
        config.zoom,
        ZoomSettings {
            min: 25,
            max: 200,
            step: 25,
            default: 100,
        }
    );
    assert!(config.show_grid);
    assert_eq!(config.duplicate_offset, 20);
    assert_eq!(config.export_quality, 100);

    let json = r#"{ "show_grid": false, "zoom": { "step": 50 } }"#;
    let partial = EditorConfig::from_json_str(json).unwrap();
    assert!(!partial.show_grid);
    assert_eq!(partial.zoom.step, 50);
    assert_eq!(partial.zoom.max, 200);
    assert_eq!(partial.duplicate_offset, 20);

    let json = config.to_json_string().unwrap();
    assert_eq!(EditorConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "duplicate_offset": 8, "export_quality": 80 }}"#).unwrap();

    let config = EditorConfig::load(file.path()).unwrap();
    assert_eq!(config.duplicate_offset, 8);
    assert_eq!(config.export_quality, 80);

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(EditorConfig::load(missing), Err(ConfigError::Read(_))));
}

#[test]
fn test_hex_colors() {
    assert_eq!(parse_hex_color("#4F46E5"), Some(Color32::from_rgb(0x4F, 0x46, 0xE5)));
    assert_eq!(parse_hex_color("#fff"), Some(Color32::WHITE));
    assert_eq!(
        parse_hex_color("#00000080"),
        Some(Color32::from_rgba_unmultiplied(0, 0, 0, 0x80))
    );
    assert_eq!(parse_hex_color("4F46E5"), None);
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#GGGGGG"), None);
}

#[test]
fn test_gradient_stops() {
    let stops = gradient_stops("linear-gradient(135deg, #667eea 0%, #764ba2 100%)").unwrap();
    assert_eq!(stops.angle_deg, 135.0);
    assert_eq!(stops.from, Color32::from_rgb(0x66, 0x7e, 0xea));
    assert_eq!(stops.to, Color32::from_rgb(0x76, 0x4b, 0xa2));

    assert!(gradient_stops("radial-gradient(#fff, #000)").is_none());
    assert!(gradient_stops("linear-gradient(90deg)").is_none());
}
