use egui::{Pos2, Rect, Vec2};

use crate::document::Dimensions;
use crate::element::Element;

// Text has no measured layout here, so its box is estimated from the font size.
pub const TEXT_CHAR_WIDTH_FACTOR: f32 = 0.6;
pub const TEXT_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Bounding box of an element in document space
pub fn element_bounds(element: &Element, dimensions: Dimensions) -> Rect {
    match element {
        Element::Background(_) => Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(dimensions.width as f32, dimensions.height as f32),
        ),
        Element::Text(text) => {
            let size = text.font_size as f32;
            let chars = text.content.chars().count().max(1) as f32;
            Rect::from_min_size(
                Pos2::new(text.x as f32, text.y as f32),
                Vec2::new(chars * size * TEXT_CHAR_WIDTH_FACTOR, size * TEXT_LINE_HEIGHT_FACTOR),
            )
        }
        Element::Shape(shape) => Rect::from_min_size(
            Pos2::new(shape.x as f32, shape.y as f32),
            Vec2::new(shape.width as f32, shape.height as f32),
        ),
    }
}

/// Topmost text or shape under `point`. Backgrounds never count as a hit.
pub fn topmost_hit(elements: &[Element], dimensions: Dimensions, point: Pos2) -> Option<&Element> {
    elements
        .iter()
        .rev()
        .filter(|element| !element.is_background())
        .find(|element| element_bounds(element, dimensions).contains(point))
}
