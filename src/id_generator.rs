use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

// Single static counter for all elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Identifier of an element inside a document.
///
/// Ids coming from templates are kept verbatim (`"bg1"`, `"text1"`); ids
/// generated at runtime are type-prefixed (`"text_12"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Produces the next id for an element of the given type.
pub fn generate_id(prefix: &str) -> ElementId {
    let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst);
    ElementId(format!("{prefix}_{n}"))
}
