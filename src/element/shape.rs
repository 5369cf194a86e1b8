use serde::{Deserialize, Serialize};

use crate::id_generator::ElementId;

/// Rendering hint; every kind shares the same data layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Rectangle,
    Circle,
    Triangle,
    Star,
    Arrow,
    Heart,
}

impl ShapeType {
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Rectangle,
        ShapeType::Circle,
        ShapeType::Triangle,
        ShapeType::Star,
        ShapeType::Arrow,
        ShapeType::Heart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Circle => "Circle",
            ShapeType::Triangle => "Triangle",
            ShapeType::Star => "Star",
            ShapeType::Arrow => "Arrow",
            ShapeType::Heart => "Heart",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ShapeType::Rectangle => "⬜",
            ShapeType::Circle => "⭕",
            ShapeType::Triangle => "🔺",
            ShapeType::Star => "⭐",
            ShapeType::Arrow => "➡",
            ShapeType::Heart => "❤",
        }
    }
}

/// Shape element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: ElementId,
    pub x: i32,
    pub y: i32,
    pub shape_type: ShapeType,
    pub width: u32,
    pub height: u32,
    pub color: String,
    pub border_color: String,
    /// Zero disables the border
    #[serde(default)]
    pub border_width: u32,
}

impl Shape {
    pub(crate) fn apply(&self, patch: &ShapePatch) -> Shape {
        let mut shape = self.clone();
        if let Some(x) = patch.x {
            shape.x = x;
        }
        if let Some(y) = patch.y {
            shape.y = y;
        }
        if let Some(shape_type) = patch.shape_type {
            shape.shape_type = shape_type;
        }
        if let Some(width) = patch.width {
            shape.width = width;
        }
        if let Some(height) = patch.height {
            shape.height = height;
        }
        if let Some(color) = &patch.color {
            shape.color = color.clone();
        }
        if let Some(border_color) = &patch.border_color {
            shape.border_color = border_color.clone();
        }
        if let Some(border_width) = patch.border_width {
            shape.border_width = border_width;
        }
        shape
    }

    pub fn has_border(&self) -> bool {
        self.border_width > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<ShapeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}
