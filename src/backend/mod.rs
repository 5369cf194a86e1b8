//! Boundary to the save/export collaborator.
//!
//! The editor never waits on these calls: requests are built from a
//! snapshot of the session, run elsewhere, and their outcome comes back as
//! a notification.

mod memory;
mod outbox;

pub use memory::MemoryBackend;
pub use outbox::Outbox;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::Dimensions;
use crate::element::Element;
use crate::error::BackendError;

/// A design as handed to the backend for saving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub template_id: Option<u32>,
    pub template_name: String,
    pub dimensions: Dimensions,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDesign {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpg,
    Svg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpg, ExportFormat::Svg];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpg => "image/jpeg",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpg => "JPEG",
            ExportFormat::Svg => "SVG",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub design: DesignPayload,
    pub format: ExportFormat,
    /// 1..=100
    pub quality: u8,
    /// Output size override; defaults to the design's dimensions
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ExportRequest {
    /// Output size after applying the overrides
    pub fn output_dimensions(&self) -> Dimensions {
        Dimensions::new(
            self.width.unwrap_or(self.design.dimensions.width),
            self.height.unwrap_or(self.design.dimensions.height),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Persistence and export service the editor talks to
pub trait DesignBackend: Send + Sync {
    fn save_design(
        &self,
        design: DesignPayload,
    ) -> BoxFuture<'static, Result<SavedDesign, BackendError>>;

    fn export_design(
        &self,
        request: ExportRequest,
    ) -> BoxFuture<'static, Result<ExportedImage, BackendError>>;
}
