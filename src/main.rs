#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use canvas_studio::{DesignApp, EditorConfig};

/// Env var naming a JSON editor config to start from
const CONFIG_ENV: &str = "CANVAS_STUDIO_CONFIG";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional template id as the first argument; anything else opens a blank canvas.
    let template_id = std::env::args().nth(1).and_then(|arg| match arg.parse::<u32>() {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("Ignoring template id '{}': {}", arg, err);
            None
        }
    });

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => EditorConfig::load(&path).unwrap_or_else(|err| {
            log::warn!("Could not load config from {:?}: {}", path, err);
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Canvas Studio")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "canvas_studio",
        native_options,
        Box::new(move |cc| Ok(Box::new(DesignApp::new(cc, template_id, config)))),
    )
}
