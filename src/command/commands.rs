use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementPatch, ShapeType};
use crate::id_generator::ElementId;
use crate::state::EditorSession;

/// User intents the editor understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add a default text element and select it
    AddText,
    /// Add a default shape of this type and select it
    AddShape(ShapeType),
    /// Add an already built element and select it
    AddElement(Element),
    UpdateElement {
        id: ElementId,
        patch: ElementPatch,
    },
    RemoveElement(ElementId),
    DuplicateElement(ElementId),
    /// Select an element, or clear the selection with `None`
    Select(Option<ElementId>),
    Undo,
    Redo,
    ZoomIn,
    ZoomOut,
    SetZoom(u32),
    ToggleGrid,
}

/// What a command ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The element sequence changed and a history entry was recorded
    Recorded,
    /// An element was created (and recorded)
    Created(ElementId),
    /// Undo/redo moved through the history
    Moved,
    /// Selection or view changed; nothing recorded
    Presentation,
    /// Nothing happened (unknown id, history boundary, ...)
    Unchanged,
}

impl Command {
    /// Execute the command against the session
    pub fn execute(self, session: &mut EditorSession) -> CommandOutcome {
        match self {
            Command::AddText => CommandOutcome::Created(session.add_text()),
            Command::AddShape(shape_type) => CommandOutcome::Created(session.add_shape(shape_type)),
            Command::AddElement(element) => CommandOutcome::Created(session.add_element(element)),
            Command::UpdateElement { id, patch } => {
                if session.update_element(&id, patch) {
                    CommandOutcome::Recorded
                } else {
                    CommandOutcome::Unchanged
                }
            }
            Command::RemoveElement(id) => {
                if session.remove_element(&id) {
                    CommandOutcome::Recorded
                } else {
                    CommandOutcome::Unchanged
                }
            }
            Command::DuplicateElement(id) => match session.duplicate_element(&id) {
                Some(new_id) => CommandOutcome::Created(new_id),
                None => CommandOutcome::Unchanged,
            },
            Command::Select(id) => {
                let before = session.selected_id().cloned();
                session.select(id.as_ref());
                presentation_if(before.as_ref() != session.selected_id())
            }
            Command::Undo => moved_if(session.undo()),
            Command::Redo => moved_if(session.redo()),
            Command::ZoomIn => presentation_if(session.zoom_in()),
            Command::ZoomOut => presentation_if(session.zoom_out()),
            Command::SetZoom(zoom) => presentation_if(session.set_zoom(zoom)),
            Command::ToggleGrid => {
                session.toggle_grid();
                CommandOutcome::Presentation
            }
        }
    }

    /// Returns true if the command writes to the history when it succeeds
    pub fn is_recorded(&self) -> bool {
        matches!(
            self,
            Command::AddText
                | Command::AddShape(_)
                | Command::AddElement(_)
                | Command::UpdateElement { .. }
                | Command::RemoveElement(_)
                | Command::DuplicateElement(_)
        )
    }
}

fn moved_if(moved: bool) -> CommandOutcome {
    if moved {
        CommandOutcome::Moved
    } else {
        CommandOutcome::Unchanged
    }
}

fn presentation_if(changed: bool) -> CommandOutcome {
    if changed {
        CommandOutcome::Presentation
    } else {
        CommandOutcome::Unchanged
    }
}
