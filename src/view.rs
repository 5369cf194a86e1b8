use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::ZoomSettings;
use crate::document::Dimensions;

/// Distance between grid dots, in document pixels
pub const GRID_SPACING: f32 = 20.0;

/// Zoom level and grid toggle. Purely presentational: never recorded in the
/// history and untouched by undo/redo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    zoom: u32,
    show_grid: bool,
    settings: ZoomSettings,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomSettings::default(), true)
    }
}

impl ViewTransform {
    pub fn new(settings: ZoomSettings, show_grid: bool) -> Self {
        Self {
            zoom: settings.clamp(settings.default),
            show_grid,
            settings,
        }
    }

    /// Zoom in percent
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }

    /// Returns true if the zoom level changed.
    pub fn set_zoom(&mut self, zoom: u32) -> bool {
        let zoom = self.settings.clamp(zoom);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_add(self.settings.step))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom.saturating_sub(self.settings.step))
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.settings.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.settings.min
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Document pixels to screen pixels
    pub fn scale(&self) -> f32 {
        self.zoom as f32 / 100.0
    }

    /// Rendered size of the canvas at the current zoom
    pub fn canvas_size(&self, dimensions: Dimensions) -> Vec2 {
        Vec2::new(dimensions.width as f32, dimensions.height as f32) * self.scale()
    }

    /// `origin` is the screen position of the canvas' top-left corner.
    pub fn document_to_screen(&self, origin: Pos2, point: Pos2) -> Pos2 {
        origin + point.to_vec2() * self.scale()
    }

    pub fn screen_to_document(&self, origin: Pos2, point: Pos2) -> Pos2 {
        ((point - origin) / self.scale()).to_pos2()
    }

    /// Grid spacing on screen
    pub fn grid_step(&self) -> f32 {
        GRID_SPACING * self.scale()
    }
}
