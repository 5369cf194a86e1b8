use serde::{Deserialize, Serialize};

use crate::element::common::DEFAULT_BACKGROUND_COLOR;
use crate::id_generator::ElementId;

/// What paints the background. Exactly one source is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundFill {
    Color(String),
    Gradient(String),
}

impl BackgroundFill {
    pub fn color(&self) -> Option<&str> {
        match self {
            BackgroundFill::Color(color) => Some(color),
            BackgroundFill::Gradient(_) => None,
        }
    }

    pub fn gradient(&self) -> Option<&str> {
        match self {
            BackgroundFill::Gradient(gradient) => Some(gradient),
            BackgroundFill::Color(_) => None,
        }
    }
}

/// Full-canvas background element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBackground", into = "RawBackground")]
pub struct Background {
    pub id: ElementId,
    pub fill: BackgroundFill,
}

impl Background {
    pub(crate) fn new(id: ElementId, fill: BackgroundFill) -> Self {
        Self { id, fill }
    }

    pub(crate) fn apply(&self, patch: &BackgroundPatch) -> Background {
        let fill = match patch {
            BackgroundPatch::Color(color) => BackgroundFill::Color(color.clone()),
            BackgroundPatch::Gradient(gradient) => BackgroundFill::Gradient(gradient.clone()),
        };
        Background::new(self.id.clone(), fill)
    }
}

/// Setting either source replaces the other one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundPatch {
    Color(String),
    Gradient(String),
}

// Wire shape: `{"color": .., "gradient": ..}` with the inactive one null.
#[derive(Serialize, Deserialize)]
struct RawBackground {
    id: ElementId,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    gradient: Option<String>,
}

impl From<RawBackground> for Background {
    fn from(raw: RawBackground) -> Self {
        // Templates may carry both; the gradient is what gets painted.
        let fill = match (raw.gradient, raw.color) {
            (Some(gradient), _) => BackgroundFill::Gradient(gradient),
            (None, Some(color)) => BackgroundFill::Color(color),
            (None, None) => BackgroundFill::Color(DEFAULT_BACKGROUND_COLOR.to_string()),
        };
        Background::new(raw.id, fill)
    }
}

impl From<Background> for RawBackground {
    fn from(background: Background) -> Self {
        let (color, gradient) = match background.fill {
            BackgroundFill::Color(color) => (Some(color), None),
            BackgroundFill::Gradient(gradient) => (None, Some(gradient)),
        };
        RawBackground {
            id: background.id,
            color,
            gradient,
        }
    }
}
