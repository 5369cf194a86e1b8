use std::cell::RefCell;

use crate::event::{EditorEvent, EventHandler};

/// Per-session fan-out of editor events. Handlers run synchronously, in the
/// order they subscribed, while the session is being mutated.
pub(crate) struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.borrow().len())
            .finish()
    }
}

impl EventBus {
    pub(crate) fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub(crate) fn emit(&self, event: &EditorEvent) {
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler.handle_event(event);
        }
    }
}
