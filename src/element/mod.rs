use log::warn;
use serde::{Deserialize, Serialize};

pub mod background;
pub mod common;
pub mod properties;
pub mod shape;
pub mod text;

pub use background::{Background, BackgroundFill, BackgroundPatch};
pub use shape::{Shape, ShapePatch, ShapeType};
pub use text::{FontFamily, FontWeight, Text, TextPatch};

use crate::id_generator::ElementId;

/// Discriminant of [`Element`], used for id prefixes and the property panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Background,
    Text,
    Shape,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Background => "background",
            ElementKind::Text => "text",
            ElementKind::Shape => "shape",
        }
    }
}

/// Enumeration of all element types in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Background(Background),
    Text(Text),
    Shape(Shape),
}

/// Partial update for one element. The variant must match the element's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementPatch {
    Background(BackgroundPatch),
    Text(TextPatch),
    Shape(ShapePatch),
}

impl ElementPatch {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementPatch::Background(_) => ElementKind::Background,
            ElementPatch::Text(_) => ElementKind::Text,
            ElementPatch::Shape(_) => ElementKind::Shape,
        }
    }

    /// Moves a text or shape element; backgrounds have no position.
    pub fn position(kind: ElementKind, x: i32, y: i32) -> Option<ElementPatch> {
        match kind {
            ElementKind::Text => Some(ElementPatch::Text(TextPatch {
                x: Some(x),
                y: Some(y),
                ..Default::default()
            })),
            ElementKind::Shape => Some(ElementPatch::Shape(ShapePatch {
                x: Some(x),
                y: Some(y),
                ..Default::default()
            })),
            ElementKind::Background => None,
        }
    }
}

impl Element {
    pub fn id(&self) -> &ElementId {
        match self {
            Element::Background(b) => &b.id,
            Element::Text(t) => &t.id,
            Element::Shape(s) => &s.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Background(_) => ElementKind::Background,
            Element::Text(_) => ElementKind::Text,
            Element::Shape(_) => ElementKind::Shape,
        }
    }

    /// Get the element type as a string
    pub fn element_type(&self) -> &'static str {
        self.kind().name()
    }

    /// Document-space position; `None` for the background, which fills the canvas.
    pub fn position(&self) -> Option<(i32, i32)> {
        match self {
            Element::Background(_) => None,
            Element::Text(t) => Some((t.x, t.y)),
            Element::Shape(s) => Some((s.x, s.y)),
        }
    }

    pub fn is_background(&self) -> bool {
        matches!(self, Element::Background(_))
    }

    /// Name shown in the layers list
    pub fn label(&self) -> &str {
        match self {
            Element::Text(t) => &t.content,
            other => other.element_type(),
        }
    }

    /// Returns a copy with the patch merged in. A patch for another element
    /// type leaves the copy unchanged.
    pub fn apply(&self, patch: &ElementPatch) -> Element {
        match (self, patch) {
            (Element::Background(b), ElementPatch::Background(p)) => {
                Element::Background(b.apply(p))
            }
            (Element::Text(t), ElementPatch::Text(p)) => Element::Text(t.apply(p)),
            (Element::Shape(s), ElementPatch::Shape(p)) => Element::Shape(s.apply(p)),
            (element, patch) => {
                warn!(
                    "Ignoring {} patch for {} element {}",
                    patch.kind().name(),
                    element.element_type(),
                    element.id()
                );
                element.clone()
            }
        }
    }

    /// Copy under a new id, shifted by `offset` on both axes. Positions
    /// saturate at the `i32` bounds.
    pub fn duplicate(&self, id: ElementId, offset: i32) -> Option<Element> {
        match self {
            Element::Background(_) => None,
            Element::Text(t) => Some(Element::Text(Text {
                id,
                x: t.x.saturating_add(offset),
                y: t.y.saturating_add(offset),
                ..t.clone()
            })),
            Element::Shape(s) => Some(Element::Shape(Shape {
                id,
                x: s.x.saturating_add(offset),
                y: s.y.saturating_add(offset),
                ..s.clone()
            })),
        }
    }
}

/// Factory functions for creating elements with fresh ids
pub mod factory {
    use super::*;
    use crate::element::common::*;
    use crate::id_generator::generate_id;

    pub fn create_background(color: &str) -> Element {
        Element::Background(Background::new(
            generate_id(ElementKind::Background.name()),
            BackgroundFill::Color(color.to_string()),
        ))
    }

    pub fn create_background_with_id(id: ElementId, fill: BackgroundFill) -> Element {
        Element::Background(Background::new(id, fill))
    }

    pub fn create_text() -> Element {
        let (x, y) = TEXT_DEFAULT_POSITION;
        Element::Text(Text {
            id: generate_id(ElementKind::Text.name()),
            x,
            y,
            content: TEXT_DEFAULT_CONTENT.to_string(),
            font_size: TEXT_DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            font_weight: FontWeight::default(),
            color: TEXT_DEFAULT_COLOR.to_string(),
        })
    }

    pub fn create_shape(shape_type: ShapeType) -> Element {
        let (x, y) = SHAPE_DEFAULT_POSITION;
        Element::Shape(Shape {
            id: generate_id(ElementKind::Shape.name()),
            x,
            y,
            shape_type,
            width: SHAPE_DEFAULT_SIZE,
            height: SHAPE_DEFAULT_SIZE,
            color: SHAPE_DEFAULT_COLOR.to_string(),
            border_color: SHAPE_DEFAULT_BORDER_COLOR.to_string(),
            border_width: 0,
        })
    }

    /// Shape placed at an explicit position, otherwise using the defaults
    pub fn create_shape_at(shape_type: ShapeType, x: i32, y: i32) -> Element {
        match create_shape(shape_type) {
            Element::Shape(shape) => Element::Shape(Shape { x, y, ..shape }),
            other => other,
        }
    }
}
