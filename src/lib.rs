#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod backend;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod notification;
pub mod panels;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod template;
pub mod view;

pub use app::DesignApp;
pub use backend::{DesignBackend, MemoryBackend, Outbox};
pub use command::{Command, CommandOutcome, History};
pub use config::EditorConfig;
pub use document::{Dimensions, Document};
pub use element::{Element, ElementKind, ElementPatch};
pub use id_generator::ElementId;
pub use renderer::CanvasRenderer;
pub use selection::Selection;
pub use state::EditorSession;
pub use template::{Template, TemplateCatalog};
pub use view::ViewTransform;
