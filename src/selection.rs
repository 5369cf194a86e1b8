use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::element::Element;
use crate::id_generator::ElementId;

/// At most one selected element, held by id and resolved against the live
/// document on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    id: Option<ElementId>,
}

impl Selection {
    pub fn id(&self) -> Option<&ElementId> {
        self.id.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.id.as_ref() == Some(id)
    }

    pub fn set(&mut self, id: Option<ElementId>) {
        self.id = id;
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    /// The selected element as it exists in `document` right now
    pub fn resolve<'a>(&self, document: &'a Document) -> Option<&'a Element> {
        self.id.as_ref().and_then(|id| document.find_element_by_id(id))
    }

    /// Drops the id if `document` no longer contains it. Returns true if it was dropped.
    pub fn retain_in(&mut self, document: &Document) -> bool {
        match &self.id {
            Some(id) if !document.contains(id) => {
                self.id = None;
                true
            }
            _ => false,
        }
    }
}
