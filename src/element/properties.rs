//! Editable fields per element type, with the ranges the UI enforces.

use super::common::{
    COLOR_PALETTE, FONT_SIZE_MAX, FONT_SIZE_MIN, GRADIENT_PALETTE, SHAPE_SIZE_MAX, SHAPE_SIZE_MIN,
};
use super::{
    BackgroundPatch, Element, ElementKind, ElementPatch, FontFamily, FontWeight, ShapePatch,
    TextPatch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Whole number within an inclusive range
    Integer { min: i32, max: i32 },
    /// One of a fixed set of names
    Choice(&'static [&'static str]),
    /// Hex colour picked from a palette
    Color(&'static [&'static str]),
    /// CSS gradient picked from a palette
    Gradient(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the attribute
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Coerces a value into the field's range. Non-integer fields return it unchanged.
    pub fn clamp(&self, value: i32) -> i32 {
        match self.kind {
            FieldKind::Integer { min, max } => value.clamp(min, max),
            _ => value,
        }
    }
}

const POSITION_X: FieldSpec = FieldSpec {
    name: "x",
    label: "X",
    kind: FieldKind::Integer {
        min: i32::MIN,
        max: i32::MAX,
    },
};

const POSITION_Y: FieldSpec = FieldSpec {
    name: "y",
    label: "Y",
    kind: FieldKind::Integer {
        min: i32::MIN,
        max: i32::MAX,
    },
};

const FONT_SIZE: FieldKind = FieldKind::Integer {
    min: FONT_SIZE_MIN as i32,
    max: FONT_SIZE_MAX as i32,
};

const SHAPE_SIZE: FieldKind = FieldKind::Integer {
    min: SHAPE_SIZE_MIN as i32,
    max: SHAPE_SIZE_MAX as i32,
};

static TEXT_FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "content",
        label: "Text",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "fontSize",
        label: "Font size",
        kind: FONT_SIZE,
    },
    FieldSpec {
        name: "fontFamily",
        label: "Font",
        kind: FieldKind::Choice(&FontFamily::NAMES),
    },
    FieldSpec {
        name: "fontWeight",
        label: "Font weight",
        kind: FieldKind::Choice(&FontWeight::NAMES),
    },
    FieldSpec {
        name: "color",
        label: "Text colour",
        kind: FieldKind::Color(&COLOR_PALETTE),
    },
    POSITION_X,
    POSITION_Y,
];

static SHAPE_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "color",
        label: "Shape colour",
        kind: FieldKind::Color(&COLOR_PALETTE),
    },
    FieldSpec {
        name: "width",
        label: "Width",
        kind: SHAPE_SIZE,
    },
    FieldSpec {
        name: "height",
        label: "Height",
        kind: SHAPE_SIZE,
    },
    POSITION_X,
    POSITION_Y,
];

static BACKGROUND_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        name: "color",
        label: "Background colour",
        kind: FieldKind::Color(&COLOR_PALETTE),
    },
    FieldSpec {
        name: "gradient",
        label: "Gradients",
        kind: FieldKind::Gradient(&GRADIENT_PALETTE),
    },
];

/// Fields the property panel shows for an element of this kind
pub fn fields_for(kind: ElementKind) -> &'static [FieldSpec] {
    match kind {
        ElementKind::Text => &TEXT_FIELDS,
        ElementKind::Shape => &SHAPE_FIELDS,
        ElementKind::Background => &BACKGROUND_FIELDS,
    }
}

/// Looks up one field by its wire name
pub fn field(kind: ElementKind, name: &str) -> Option<&'static FieldSpec> {
    fields_for(kind).iter().find(|spec| spec.name == name)
}

/// Current value of a field as the panel edits it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i32),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

/// Reads a field off an element. `None` for fields the element does not have,
/// and for the inactive source of a background.
pub fn read_field(element: &Element, name: &str) -> Option<FieldValue> {
    let text = |s: &str| Some(FieldValue::Text(s.to_string()));
    let int = |v: i64| {
        let v = v.clamp(i32::MIN as i64, i32::MAX as i64);
        Some(FieldValue::Integer(v as i32))
    };
    match element {
        Element::Background(background) => match name {
            "color" => background.fill.color().and_then(text),
            "gradient" => background.fill.gradient().and_then(text),
            _ => None,
        },
        Element::Text(t) => match name {
            "content" => text(&t.content),
            "fontSize" => int(t.font_size as i64),
            "fontFamily" => text(t.font_family.name()),
            "fontWeight" => text(t.font_weight.name()),
            "color" => text(&t.color),
            "x" => int(t.x as i64),
            "y" => int(t.y as i64),
            _ => None,
        },
        Element::Shape(shape) => match name {
            "color" => text(&shape.color),
            "width" => int(shape.width as i64),
            "height" => int(shape.height as i64),
            "x" => int(shape.x as i64),
            "y" => int(shape.y as i64),
            _ => None,
        },
    }
}

/// Builds the single-field patch for an edit. Integers are clamped to the
/// field's range; unknown names and mistyped values yield `None`.
pub fn patch_field(kind: ElementKind, name: &str, value: FieldValue) -> Option<ElementPatch> {
    let spec = field(kind, name)?;
    let value = match value {
        FieldValue::Integer(v) => FieldValue::Integer(spec.clamp(v)),
        other => other,
    };
    let size = |v: &FieldValue| v.as_integer().map(|v| v.max(0) as u32);

    let patch = match kind {
        ElementKind::Background => match name {
            "color" => {
                ElementPatch::Background(BackgroundPatch::Color(value.as_text()?.to_string()))
            }
            "gradient" => {
                ElementPatch::Background(BackgroundPatch::Gradient(value.as_text()?.to_string()))
            }
            _ => return None,
        },
        ElementKind::Text => {
            let mut patch = TextPatch::default();
            match name {
                "content" => patch.content = Some(value.as_text()?.to_string()),
                "fontSize" => patch.font_size = Some(size(&value)?),
                "fontFamily" => {
                    patch.font_family = Some(FontFamily::from_name(value.as_text()?)?)
                }
                "fontWeight" => {
                    patch.font_weight = Some(FontWeight::from_name(value.as_text()?)?)
                }
                "color" => patch.color = Some(value.as_text()?.to_string()),
                "x" => patch.x = Some(value.as_integer()?),
                "y" => patch.y = Some(value.as_integer()?),
                _ => return None,
            }
            ElementPatch::Text(patch)
        }
        ElementKind::Shape => {
            let mut patch = ShapePatch::default();
            match name {
                "color" => patch.color = Some(value.as_text()?.to_string()),
                "width" => patch.width = Some(size(&value)?),
                "height" => patch.height = Some(size(&value)?),
                "x" => patch.x = Some(value.as_integer()?),
                "y" => patch.y = Some(value.as_integer()?),
                _ => return None,
            }
            ElementPatch::Shape(patch)
        }
    };
    Some(patch)
}
