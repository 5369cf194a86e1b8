use serde::{Deserialize, Serialize};

use crate::id_generator::ElementId;

/// Font families the editor can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Helvetica,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Georgia,
    Verdana,
    Tahoma,
    #[serde(rename = "Trebuchet MS")]
    TrebuchetMs,
    Impact,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    #[serde(rename = "Courier New")]
    CourierNew,
}

impl FontFamily {
    pub const ALL: [FontFamily; 10] = [
        FontFamily::Arial,
        FontFamily::Helvetica,
        FontFamily::TimesNewRoman,
        FontFamily::Georgia,
        FontFamily::Verdana,
        FontFamily::Tahoma,
        FontFamily::TrebuchetMs,
        FontFamily::Impact,
        FontFamily::ComicSansMs,
        FontFamily::CourierNew,
    ];

    pub const NAMES: [&'static str; 10] = [
        "Arial",
        "Helvetica",
        "Times New Roman",
        "Georgia",
        "Verdana",
        "Tahoma",
        "Trebuchet MS",
        "Impact",
        "Comic Sans MS",
        "Courier New",
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Georgia => "Georgia",
            FontFamily::Verdana => "Verdana",
            FontFamily::Tahoma => "Tahoma",
            FontFamily::TrebuchetMs => "Trebuchet MS",
            FontFamily::Impact => "Impact",
            FontFamily::ComicSansMs => "Comic Sans MS",
            FontFamily::CourierNew => "Courier New",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }

    /// True for fixed-pitch families
    pub fn is_monospace(self) -> bool {
        matches!(self, FontFamily::CourierNew)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Lighter,
}

impl FontWeight {
    pub const ALL: [FontWeight; 3] = [FontWeight::Normal, FontWeight::Bold, FontWeight::Lighter];
    pub const NAMES: [&'static str; 3] = ["normal", "bold", "lighter"];

    pub fn name(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
            FontWeight::Lighter => "lighter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|weight| weight.name() == name)
    }
}

/// Text element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub id: ElementId,
    pub x: i32,
    pub y: i32,
    pub content: String,
    pub font_size: u32,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default)]
    pub font_weight: FontWeight,
    pub color: String,
}

impl Text {
    pub(crate) fn apply(&self, patch: &TextPatch) -> Text {
        let mut text = self.clone();
        if let Some(x) = patch.x {
            text.x = x;
        }
        if let Some(y) = patch.y {
            text.y = y;
        }
        if let Some(content) = &patch.content {
            text.content = content.clone();
        }
        if let Some(font_size) = patch.font_size {
            text.font_size = font_size;
        }
        if let Some(font_family) = patch.font_family {
            text.font_family = font_family;
        }
        if let Some(font_weight) = patch.font_weight {
            text.font_weight = font_weight;
        }
        if let Some(color) = &patch.color {
            text.color = color.clone();
        }
        text
    }
}

/// Partial update for a text element; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
