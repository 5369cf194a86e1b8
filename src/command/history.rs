use log::debug;

use crate::element::Element;

/// Linear snapshot history of the element sequence.
///
/// Each entry is an independent deep copy. `index` points at the entry that
/// matches the live document.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Vec<Element>>,
    index: usize,
}

impl History {
    /// History whose first (and only undo-floor) entry is `initial`
    pub fn new(initial: &[Element]) -> Self {
        Self {
            entries: vec![initial.to_vec()],
            index: 0,
        }
    }

    /// Records the state after a mutation, discarding anything redoable.
    pub fn record(&mut self, elements: &[Element]) {
        if self.entries.is_empty() {
            self.entries.push(elements.to_vec());
            self.index = 0;
            return;
        }

        let discarded = self.entries.len() - (self.index + 1);
        if discarded > 0 {
            debug!("Discarding {} redo entries", discarded);
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(elements.to_vec());
        self.index = self.entries.len() - 1;
    }

    /// Steps back one entry. `None` at the first entry.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Steps forward one entry. `None` at the last entry.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Entry matching the live document
    pub fn current(&self) -> Option<&[Element]> {
        self.entries.get(self.index).map(Vec::as_slice)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeType, factory};

    fn snapshot(len: usize) -> Vec<Element> {
        (0..len).map(|_| factory::create_shape(ShapeType::Rectangle)).collect()
    }

    #[test]
    fn test_empty_history_has_no_moves() {
        let mut history = History::default();
        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());

        history.record(&snapshot(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn test_record_moves_index_to_tail() {
        let mut history = History::new(&snapshot(0));
        history.record(&snapshot(1));
        history.record(&snapshot(2));
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().map(<[Element]>::len), Some(2));
    }

    #[test]
    fn test_record_after_undo_truncates() {
        let mut history = History::new(&snapshot(0));
        history.record(&snapshot(1));
        history.record(&snapshot(2));

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.record(&snapshot(5));
        assert_eq!(history.len(), 2);
        assert_eq!(history.index(), 1);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut live = snapshot(1);
        let mut history = History::new(&live);
        live.push(factory::create_text());
        history.record(&live);
        live.clear();

        assert_eq!(history.current().map(<[Element]>::len), Some(2));
        assert_eq!(history.undo().map(<[Element]>::len), Some(1));
    }
}
