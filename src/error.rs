use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while loading templates
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(u32),

    #[error("Failed to parse template data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures reported by the save/export collaborator
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Design not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to serialize design: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Request was dropped before completing")]
    Cancelled,
}
