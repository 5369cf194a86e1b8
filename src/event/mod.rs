mod bus;
mod events;

pub(crate) use bus::EventBus;
pub use events::EditorEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&EditorEvent) + Send,
{
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
