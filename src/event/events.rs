use crate::id_generator::ElementId;
use crate::notification::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A template or blank canvas was loaded into the session
    DocumentLoaded {
        template: String,
    },
    ElementAdded {
        id: ElementId,
    },
    ElementUpdated {
        id: ElementId,
    },
    ElementRemoved {
        id: ElementId,
    },
    SelectionChanged {
        old: Option<ElementId>,
        new: Option<ElementId>,
    },
    /// The history index or length changed (record, undo or redo)
    HistoryMoved {
        index: usize,
        len: usize,
    },
    ViewChanged {
        zoom: u32,
        show_grid: bool,
    },
    Notified(Notification),
}
