use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementPatch};
use crate::id_generator::{ElementId, generate_id};

/// Canvas size in document pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

/// Ordered element sequence of the canvas being edited. The first element
/// paints at the bottom.
///
/// Every mutation returns a new document and leaves `self` untouched, so
/// snapshots taken from it never alias the live state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    dimensions: Dimensions,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(dimensions: Dimensions, elements: Vec<Element>) -> Self {
        Self {
            dimensions,
            elements,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn find_element_by_id(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.find_element_by_id(id).is_some()
    }

    /// First background element, if any
    pub fn background(&self) -> Option<&Element> {
        self.elements.iter().find(|element| element.is_background())
    }

    /// Generates an id that no element of this document uses yet.
    pub fn fresh_id(&self, prefix: &str) -> ElementId {
        loop {
            let id = generate_id(prefix);
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Same canvas with a different element sequence
    pub fn with_elements(&self, elements: Vec<Element>) -> Document {
        Document::new(self.dimensions, elements)
    }

    /// Appends on top of everything else.
    pub fn add_element(&self, element: Element) -> Document {
        let mut elements = self.elements.clone();
        elements.push(element);
        self.with_elements(elements)
    }

    /// Merges the patch into the element with this id. Unknown ids are ignored.
    pub fn update_element(&self, id: &ElementId, patch: &ElementPatch) -> Document {
        let elements = self
            .elements
            .iter()
            .map(|element| {
                if element.id() == id {
                    element.apply(patch)
                } else {
                    element.clone()
                }
            })
            .collect();
        self.with_elements(elements)
    }

    /// Drops the element with this id. Unknown ids are ignored.
    pub fn remove_element(&self, id: &ElementId) -> Document {
        let elements = self
            .elements
            .iter()
            .filter(|element| element.id() != id)
            .cloned()
            .collect();
        self.with_elements(elements)
    }

    /// Appends a copy of the element shifted by `offset`, under `new_id`.
    ///
    /// Returns `None` when the id is unknown or names a background.
    pub fn duplicate_element(
        &self,
        id: &ElementId,
        new_id: ElementId,
        offset: i32,
    ) -> Option<(Document, ElementId)> {
        let copy = self.find_element_by_id(id)?.duplicate(new_id.clone(), offset)?;
        Some((self.add_element(copy), new_id))
    }
}
