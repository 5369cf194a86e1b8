use std::thread;

use futures::channel::oneshot;
use futures::future::BoxFuture;
use log::{debug, warn};

use super::{DesignBackend, DesignPayload, ExportRequest, ExportedImage, SavedDesign};
use crate::error::BackendError;
use crate::state::EditorSession;

enum Pending {
    Save(oneshot::Receiver<Result<SavedDesign, BackendError>>),
    Export(oneshot::Receiver<Result<ExportedImage, BackendError>>),
}

impl Pending {
    /// Hands a finished result to the session. Returns false while still running.
    fn try_complete(&mut self, session: &mut EditorSession) -> bool {
        match self {
            Pending::Save(rx) => match rx.try_recv() {
                Ok(Some(result)) => {
                    session.complete_save(result);
                    true
                }
                Ok(None) => false,
                Err(oneshot::Canceled) => {
                    session.complete_save(Err(BackendError::Cancelled));
                    true
                }
            },
            Pending::Export(rx) => match rx.try_recv() {
                Ok(Some(result)) => {
                    session.complete_export(result);
                    true
                }
                Ok(None) => false,
                Err(oneshot::Canceled) => {
                    session.complete_export(Err(BackendError::Cancelled));
                    true
                }
            },
        }
    }
}

/// Backend requests in flight. Each one runs on its own worker thread; the
/// UI polls once per frame and never blocks on them.
#[derive(Default)]
pub struct Outbox {
    pending: Vec<Pending>,
}

impl std::fmt::Debug for Outbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outbox")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, backend: &dyn DesignBackend, design: DesignPayload) {
        debug!("Dispatching save of '{}'", design.name);
        let rx = spawn_request("save", backend.save_design(design));
        self.pending.push(Pending::Save(rx));
    }

    pub fn export(&mut self, backend: &dyn DesignBackend, request: ExportRequest) {
        debug!("Dispatching {} export", request.format.name());
        let rx = spawn_request("export", backend.export_design(request));
        self.pending.push(Pending::Export(rx));
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Delivers finished requests to the session. Returns how many finished.
    pub fn poll(&mut self, session: &mut EditorSession) -> usize {
        let before = self.pending.len();
        self.pending.retain_mut(|pending| !pending.try_complete(session));
        before - self.pending.len()
    }
}

fn spawn_request<T: Send + 'static>(
    name: &str,
    future: BoxFuture<'static, Result<T, BackendError>>,
) -> oneshot::Receiver<Result<T, BackendError>> {
    let (tx, rx) = oneshot::channel();
    let spawned = thread::Builder::new()
        .name(format!("backend-{name}"))
        .spawn(move || {
            let result = futures::executor::block_on(future);
            // The receiver may already be gone if the outbox was dropped.
            let _ = tx.send(result);
        });
    if let Err(err) = spawned {
        // Dropping the sender makes the request complete as cancelled.
        warn!("Could not start {} request: {}", name, err);
    }
    rx
}
