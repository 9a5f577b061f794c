//! Upload zone state for the tray window

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dropcore::events::EventSink;
use dropcore::upload::{SharedProgress, UploadZoneController, ZoneStatus};
use floem::action::exec_after;
use floem::prelude::*;
use uuid::Uuid;

use super::ConfigState;
use crate::gui::scheduler::FloemScheduler;

/// Files dropped together arrive as separate events within a few ms
const DROP_BATCH_WINDOW: Duration = Duration::from_millis(50);

/// UI mirror of the upload zone controller.
///
/// The controller is the source of truth; the signals are refreshed after
/// every operation.
#[derive(Clone)]
pub struct UploadState {
    controller: Rc<RefCell<UploadZoneController>>,
    pending_drop: Rc<RefCell<Vec<PathBuf>>>,

    pub status: RwSignal<ZoneStatus>,
    pub status_text: RwSignal<String>,
    /// Id of the running session; a new id restarts the progress bar polling
    pub session: RwSignal<Option<Uuid>>,
    pub progress: SharedProgress,
}

impl UploadState {
    pub fn new(config: &ConfigState, sink: Arc<dyn EventSink>) -> Self {
        let controller = UploadZoneController::new(Arc::new(FloemScheduler), sink)
            .with_history(Arc::clone(&config.history));
        let progress = controller.progress_handle();

        Self {
            controller: Rc::new(RefCell::new(controller)),
            pending_drop: Rc::new(RefCell::new(Vec::new())),
            status: RwSignal::new(ZoneStatus::Pending),
            status_text: RwSignal::new(String::new()),
            session: RwSignal::new(None),
            progress,
        }
    }

    /// Collect one dropped path. The batch is handed to the controller once
    /// the drop settles.
    pub fn queue_dropped(&self, path: PathBuf) {
        let first = {
            let mut pending = self.pending_drop.borrow_mut();
            pending.push(path);
            pending.len() == 1
        };
        if first {
            let state = self.clone();
            exec_after(DROP_BATCH_WINDOW, move |_| {
                let paths = std::mem::take(&mut *state.pending_drop.borrow_mut());
                state.accept_paths(paths);
            });
        }
    }

    /// Start a session with files picked outside the drop zone
    pub fn accept_paths(&self, paths: Vec<PathBuf>) {
        self.controller.borrow_mut().accept_paths(paths);
        self.sync();
    }

    pub fn cancel(&self) {
        self.controller.borrow_mut().cancel();
        self.sync();
    }

    fn sync(&self) {
        let controller = self.controller.borrow();
        self.status.set(controller.status());
        self.session.set(controller.session_id());
        self.status_text
            .set(controller.status_text().unwrap_or_default());
    }
}
