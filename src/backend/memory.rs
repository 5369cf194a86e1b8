use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use log::debug;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{DesignBackend, DesignPayload, ExportRequest, ExportedImage, SavedDesign};
use crate::error::BackendError;

/// In-process backend keeping saved designs in memory.
///
/// Exports carry the design serialized as JSON instead of rendered pixels.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    designs: Arc<RwLock<HashMap<Uuid, DesignPayload>>>,
    offline: Arc<AtomicBool>,
    exports: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every request fails with [`BackendError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn load_design(&self, id: Uuid) -> Result<DesignPayload, BackendError> {
        self.check_online()?;
        self.designs.read().get(&id).cloned().ok_or(BackendError::NotFound(id))
    }

    pub fn design_count(&self) -> usize {
        self.designs.read().len()
    }

    pub fn export_count(&self) -> usize {
        self.exports.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), BackendError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(BackendError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn store(&self, design: DesignPayload) -> Result<SavedDesign, BackendError> {
        self.check_online()?;
        if design.name.trim().is_empty() {
            return Err(BackendError::InvalidRequest("design name is empty".to_string()));
        }
        let id = Uuid::new_v4();
        let name = design.name.clone();
        self.designs.write().insert(id, design);
        debug!("Stored design {} ({})", id, name);
        Ok(SavedDesign { id, name })
    }

    fn render(&self, request: ExportRequest) -> Result<ExportedImage, BackendError> {
        self.check_online()?;
        if !(1..=100).contains(&request.quality) {
            return Err(BackendError::InvalidRequest(format!(
                "quality {} outside 1..=100",
                request.quality
            )));
        }
        let size = request.output_dimensions();
        if size.width == 0 || size.height == 0 {
            return Err(BackendError::InvalidRequest(format!(
                "cannot export a {}x{} image",
                size.width, size.height
            )));
        }

        let data = serde_json::to_vec(&request.design)?;
        self.exports.fetch_add(1, Ordering::SeqCst);
        let stem = file_stem(&request.design.name);
        Ok(ExportedImage {
            file_name: format!("{}.{}", stem, request.format.extension()),
            content_type: request.format.content_type().to_string(),
            data,
        })
    }
}

impl DesignBackend for MemoryBackend {
    fn save_design(
        &self,
        design: DesignPayload,
    ) -> BoxFuture<'static, Result<SavedDesign, BackendError>> {
        let backend = self.clone();
        async move { backend.store(design) }.boxed()
    }

    fn export_design(
        &self,
        request: ExportRequest,
    ) -> BoxFuture<'static, Result<ExportedImage, BackendError>> {
        let backend = self.clone();
        async move { backend.render(request) }.boxed()
    }
}

/// Lowercase, dash-separated file name for a design
fn file_stem(name: &str) -> String {
    let stem: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase();
    if stem.is_empty() { "design".to_string() } else { stem }
}
