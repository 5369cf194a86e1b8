//! The editing session: one document, its history, the selection and the
//! view, driven by UI intents.
//!
//! Every mutating call applies a pure [`Document`] operation, records the
//! resulting element sequence in the [`History`] and fixes up the
//! [`Selection`] before returning, so no caller can observe or record a
//! half-applied step.

use egui::Pos2;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::backend::{DesignPayload, ExportFormat, ExportRequest, ExportedImage, SavedDesign};
use crate::command::{Command, CommandOutcome, History};
use crate::config::EditorConfig;
use crate::document::{Dimensions, Document};
use crate::element::{Element, ElementPatch, ShapeType, factory};
use crate::error::BackendError;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::geometry::topmost_hit;
use crate::id_generator::ElementId;
use crate::notification::Notification;
use crate::selection::Selection;
use crate::template::Template;
use crate::view::ViewTransform;

#[derive(Debug)]
pub struct EditorSession {
    template_id: u32,
    template_name: String,
    document: Document,
    history: History,
    selection: Selection,
    view: ViewTransform,
    config: EditorConfig,
    /// Set once the design has been saved successfully
    design_id: Option<Uuid>,
    notifications: Vec<Notification>,
    events: EventBus,
}

impl EditorSession {
    /// Seeds a session from a template and records the initial history entry.
    pub fn new(template: Template, config: EditorConfig) -> Self {
        let document = template.to_document();
        let history = History::new(document.elements());
        info!(
            "Loaded template '{}' ({}x{}, {} elements)",
            template.name,
            document.dimensions().width,
            document.dimensions().height,
            document.len()
        );
        Self {
            template_id: template.id,
            template_name: template.name,
            document,
            history,
            selection: Selection::default(),
            view: ViewTransform::new(config.zoom, config.show_grid),
            config,
            design_id: None,
            notifications: Vec::new(),
            events: EventBus::new(),
        }
    }

    /// Blank 1200x800 (or configured) canvas with a white background
    pub fn blank(config: EditorConfig) -> Self {
        let template = Template::blank(&config);
        Self::new(template, config)
    }

    /// Register a handler for editor events. The handler is told which
    /// document is loaded right away.
    pub fn subscribe(&self, mut handler: Box<dyn EventHandler>) {
        handler.handle_event(&EditorEvent::DocumentLoaded {
            template: self.template_name.clone(),
        });
        self.events.subscribe(handler);
    }

    // ------------------------------------------------------------------
    // Read access

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn elements(&self) -> &[Element] {
        self.document.elements()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.document.dimensions()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selection.id()
    }

    /// The selected element, resolved against the live document
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.resolve(&self.document)
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn template_id(&self) -> u32 {
        self.template_id
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn design_id(&self) -> Option<Uuid> {
        self.design_id
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        debug!("Executing {:?}", command);
        command.execute(self)
    }

    // ------------------------------------------------------------------
    // Selection

    /// Selects an element by id, or clears the selection with `None`.
    /// An id that is not in the document clears the selection too.
    pub fn select(&mut self, id: Option<&ElementId>) {
        let next = match id {
            Some(id) if self.document.contains(id) => Some(id.clone()),
            Some(id) => {
                debug!("Cannot select missing element {}", id);
                None
            }
            None => None,
        };
        self.set_selection(next);
    }

    /// Selects the topmost text or shape under a document-space point, or
    /// clears the selection when only the background is there.
    pub fn select_at(&mut self, point: Pos2) -> Option<ElementId> {
        let hit = topmost_hit(self.document.elements(), self.document.dimensions(), point)
            .map(|element| element.id().clone());
        self.set_selection(hit.clone());
        hit
    }

    fn set_selection(&mut self, next: Option<ElementId>) {
        if self.selection.id() == next.as_ref() {
            return;
        }
        let old = self.selection.id().cloned();
        self.selection.set(next.clone());
        self.events.emit(&EditorEvent::SelectionChanged { old, new: next });
    }

    // ------------------------------------------------------------------
    // Mutations

    fn commit(&mut self, next: Document) {
        self.history.record(next.elements());
        self.document = next;
        self.emit_history();
    }

    fn emit_history(&self) {
        self.events.emit(&EditorEvent::HistoryMoved {
            index: self.history.index(),
            len: self.history.len(),
        });
    }

    /// Appends the element on top and selects it.
    ///
    /// An element whose id is already taken gets a fresh one.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let element = if self.document.contains(element.id()) {
            let fresh = self.document.fresh_id(element.element_type());
            warn!("Element id {} already in use, re-keying as {}", element.id(), fresh);
            rekey(element, fresh)
        } else {
            element
        };

        let id = element.id().clone();
        let next = self.document.add_element(element);
        self.commit(next);
        self.events.emit(&EditorEvent::ElementAdded { id: id.clone() });
        self.set_selection(Some(id.clone()));
        id
    }

    pub fn add_text(&mut self) -> ElementId {
        self.add_element(factory::create_text())
    }

    pub fn add_shape(&mut self, shape_type: ShapeType) -> ElementId {
        self.add_element(factory::create_shape(shape_type))
    }

    /// Applies a partial update. Records only when the sequence actually
    /// changed; returns whether it did.
    pub fn update_element(&mut self, id: &ElementId, patch: ElementPatch) -> bool {
        if !self.document.contains(id) {
            debug!("Update of missing element {} ignored", id);
            return false;
        }
        let next = self.document.update_element(id, &patch);
        if next == self.document {
            return false;
        }
        self.commit(next);
        self.events.emit(&EditorEvent::ElementUpdated { id: id.clone() });
        true
    }

    /// Removes the element, clearing the selection if it was the selected one.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        if !self.document.contains(id) {
            debug!("Removal of missing element {} ignored", id);
            return false;
        }
        let next = self.document.remove_element(id);
        self.commit(next);
        self.events.emit(&EditorEvent::ElementRemoved { id: id.clone() });
        if self.selection.is_selected(id) {
            self.set_selection(None);
        }
        true
    }

    /// Copies the element at the configured offset and selects the copy.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<ElementId> {
        let Some(source) = self.document.find_element_by_id(id) else {
            debug!("Duplicate of missing element {} ignored", id);
            return None;
        };
        let new_id = self.document.fresh_id(source.element_type());
        let Some((next, new_id)) =
            self.document.duplicate_element(id, new_id, self.config.duplicate_offset)
        else {
            debug!("Element {} cannot be duplicated", id);
            return None;
        };
        self.commit(next);
        self.events.emit(&EditorEvent::ElementAdded { id: new_id.clone() });
        self.set_selection(Some(new_id.clone()));
        Some(new_id)
    }

    /// Convenience for removing whatever is selected
    pub fn remove_selected(&mut self) -> bool {
        match self.selection.id().cloned() {
            Some(id) => self.remove_element(&id),
            None => false,
        }
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let id = self.selection.id().cloned()?;
        self.duplicate_element(&id)
    }

    // ------------------------------------------------------------------
    // History

    pub fn undo(&mut self) -> bool {
        let Some(elements) = self.history.undo() else {
            debug!("Nothing to undo");
            return false;
        };
        let elements = elements.to_vec();
        self.restore(elements);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(elements) = self.history.redo() else {
            debug!("Nothing to redo");
            return false;
        };
        let elements = elements.to_vec();
        self.restore(elements);
        true
    }

    fn restore(&mut self, elements: Vec<Element>) {
        self.document = self.document.with_elements(elements);
        self.emit_history();
        if let Some(old) = self.selection.id().cloned() {
            if self.selection.retain_in(&self.document) {
                self.events.emit(&EditorEvent::SelectionChanged {
                    old: Some(old),
                    new: None,
                });
            }
        }
    }

    // ------------------------------------------------------------------
    // View

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.view.zoom_in();
        self.emit_view(changed);
        changed
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.view.zoom_out();
        self.emit_view(changed);
        changed
    }

    pub fn set_zoom(&mut self, zoom: u32) -> bool {
        let changed = self.view.set_zoom(zoom);
        self.emit_view(changed);
        changed
    }

    pub fn toggle_grid(&mut self) {
        self.view.toggle_grid();
        self.emit_view(true);
    }

    fn emit_view(&self, changed: bool) {
        if changed {
            self.events.emit(&EditorEvent::ViewChanged {
                zoom: self.view.zoom(),
                show_grid: self.view.show_grid(),
            });
        }
    }

    // ------------------------------------------------------------------
    // Save / export

    /// Current design as the save collaborator expects it
    pub fn design_payload(&self, name: impl Into<String>) -> DesignPayload {
        DesignPayload {
            name: name.into(),
            template_id: (self.template_id != 0).then_some(self.template_id),
            template_name: self.template_name.clone(),
            dimensions: self.document.dimensions(),
            elements: self.document.elements().to_vec(),
        }
    }

    /// Export of the current design under `name`, which also names the file
    pub fn export_request(&self, name: impl Into<String>, format: ExportFormat) -> ExportRequest {
        ExportRequest {
            design: self.design_payload(name),
            format,
            quality: self.config.export_quality,
            width: None,
            height: None,
        }
    }

    /// Reports the outcome of a save. Local editing state is never touched.
    pub fn complete_save(&mut self, result: Result<SavedDesign, BackendError>) {
        match result {
            Ok(saved) => {
                info!("Design '{}' saved as {}", saved.name, saved.id);
                self.design_id = Some(saved.id);
                self.notify(Notification::success(
                    "Design saved",
                    "Your design was saved successfully.",
                ));
            }
            Err(err) => {
                warn!("Saving design failed: {}", err);
                self.notify(Notification::error("Save failed", err.to_string()));
            }
        }
    }

    pub fn complete_export(&mut self, result: Result<ExportedImage, BackendError>) {
        match result {
            Ok(image) => {
                info!("Exported {} ({} bytes)", image.file_name, image.data.len());
                self.notify(Notification::success(
                    "Export finished",
                    format!("Your design was exported as {}.", image.file_name),
                ));
            }
            Err(err) => {
                warn!("Exporting design failed: {}", err);
                self.notify(Notification::error("Export failed", err.to_string()));
            }
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.events.emit(&EditorEvent::Notified(notification.clone()));
        self.notifications.push(notification);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

fn rekey(element: Element, id: ElementId) -> Element {
    match element {
        Element::Background(mut b) => {
            b.id = id;
            Element::Background(b)
        }
        Element::Text(mut t) => {
            t.id = id;
            Element::Text(t)
        }
        Element::Shape(mut s) => {
            s.id = id;
            Element::Shape(s)
        }
    }
}
