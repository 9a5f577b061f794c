//! Upload zone controller
//!
//! Owns the queue and the synthetic progress of the current session.
//!
//! State machine (status is derived, never stored):
//!
//! ```text
//! Pending --drag_enter--> Active --drag_leave--> Pending
//! Pending|Active --accept_drop--> Accepted
//! Accepted --cancel--> Pending (Active while a drag is still hovering)
//! ```
//!
//! Each accepted drop starts a session and schedules the fixed progress
//! timeline. Cancelling, or dropping again, invalidates the session so its
//! remaining steps never emit.

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::{
    ProgressSchedule, SharedProgress, UploadFile, UploadQueue, UploadSession, ZoneStatus,
};
use crate::error::{Error, Result};
use crate::events::{EventSink, HostEvent, emit_or_log};
use crate::history::RecentUploads;
use crate::scheduler::Scheduler;

pub struct UploadZoneController {
    queue: UploadQueue,
    dragging: bool,
    progress: SharedProgress,
    session: Option<UploadSession>,
    schedule: ProgressSchedule,
    scheduler: Arc<dyn Scheduler>,
    sink: Arc<dyn EventSink>,
    history: Arc<Mutex<RecentUploads>>,
}

impl UploadZoneController {
    pub fn new(scheduler: Arc<dyn Scheduler>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            queue: UploadQueue::new(),
            dragging: false,
            progress: SharedProgress::new(),
            session: None,
            schedule: ProgressSchedule::default(),
            scheduler,
            sink,
            history: Arc::new(Mutex::new(RecentUploads::default())),
        }
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: ProgressSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Share a history that completed sessions are recorded into.
    #[must_use]
    pub fn with_history(mut self, history: Arc<Mutex<RecentUploads>>) -> Self {
        self.history = history;
        self
    }

    pub fn status(&self) -> ZoneStatus {
        ZoneStatus::derive(!self.queue.is_empty(), self.dragging)
    }

    pub fn queue(&self) -> &UploadQueue {
        &self.queue
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current progress percentage
    pub fn progress(&self) -> u8 {
        self.progress.get_pct()
    }

    /// Handle for polling progress from elsewhere
    pub fn progress_handle(&self) -> SharedProgress {
        self.progress.clone()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(UploadSession::id)
    }

    pub fn history(&self) -> Arc<Mutex<RecentUploads>> {
        Arc::clone(&self.history)
    }

    pub fn schedule(&self) -> ProgressSchedule {
        self.schedule
    }

    /// Status line for the accepted state; `None` when nothing is queued.
    pub fn status_text(&self) -> Option<String> {
        self.queue.status_text()
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
        tracing::debug!("Drag entered zone, status {}", self.status());
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
        tracing::debug!("Drag left zone, status {}", self.status());
    }

    /// Replace the queue with `files` and start a new session.
    ///
    /// An empty list is rejected and leaves the controller untouched.
    pub fn try_accept_drop(&mut self, files: Vec<UploadFile>) -> Result<Uuid> {
        if files.is_empty() {
            return Err(Error::InvalidDropPayload("no files in drop".to_string()));
        }

        if let Some(previous) = self.session.take() {
            tracing::info!("Upload session {} replaced by a new drop", previous.id());
            previous.cancel();
        }

        let session = UploadSession::start();
        let id = session.id();
        tracing::info!(
            "Upload session {} started: {} file(s), {} bytes",
            id,
            files.len(),
            files.iter().map(|f| f.size).sum::<u64>()
        );

        self.progress.reset();
        self.queue.replace(files);
        self.dragging = false;
        self.schedule_steps(&session);
        self.session = Some(session);

        Ok(id)
    }

    /// [`Self::try_accept_drop`], logging a rejected payload instead of
    /// returning it.
    pub fn accept_drop(&mut self, files: Vec<UploadFile>) {
        if let Err(e) = self.try_accept_drop(files) {
            tracing::warn!("Ignoring drop: {}", e);
        }
    }

    /// Accept files from disk. Unreadable paths and directories are skipped.
    pub fn accept_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let files = paths
            .into_iter()
            .filter_map(|p| {
                UploadFile::from_path(p.as_ref())
                    .inspect_err(|e| {
                        tracing::warn!("Skipping {}: {}", p.as_ref().display(), e);
                    })
                    .ok()
            })
            .collect();
        self.accept_drop(files);
    }

    /// Clear the queue and invalidate the running session.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel();
            tracing::info!(
                "Upload session {} cancelled at {}%",
                session.id(),
                self.progress.get_pct()
            );
        }
        self.queue.clear();
        self.progress.reset();
    }

    fn schedule_steps(&self, session: &UploadSession) {
        let id = session.id();

        for (delay, value) in self.schedule.ticks() {
            let token = session.token().clone();
            let progress = self.progress.clone();
            let sink = Arc::clone(&self.sink);
            // The final step also records the session in the history
            let completion = (value == 100)
                .then(|| (self.queue.files().to_vec(), Arc::clone(&self.history)));

            self.scheduler.schedule(
                delay,
                Box::new(move || {
                    // Holding the token keeps cancel() from slipping in
                    // between the check and the raise
                    let ran = token.run_unless_cancelled(|| {
                        // History is written before 100% becomes observable
                        if let Some((files, history)) = completion {
                            if let Ok(mut history) = history.lock() {
                                history.record(&files, Utc::now());
                            }
                            tracing::info!("Upload session {} finished", id);
                        }

                        emit_or_log(sink.as_ref(), HostEvent::Progress { progress: value });
                        progress.raise_to(value);
                    });
                    if !ran {
                        tracing::debug!("Session {} step {}% skipped", id, value);
                    }
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MemorySink;
    use crate::scheduler::ManualScheduler;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const STEP: Duration = Duration::from_millis(500);

    fn fixture() -> (UploadZoneController, Arc<ManualScheduler>, Arc<MemorySink>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let sink = Arc::new(MemorySink::new());
        let zone = UploadZoneController::new(scheduler.clone(), sink.clone());
        (zone, scheduler, sink)
    }

    fn files(names: &[&str]) -> Vec<UploadFile> {
        names.iter().map(|n| UploadFile::new(*n, 1)).collect()
    }

    #[test]
    fn test_initial_state() {
        let (zone, _, _) = fixture();
        assert_eq!(zone.status(), ZoneStatus::Pending);
        assert_eq!(zone.progress(), 0);
        assert!(zone.session_id().is_none());
    }

    #[test]
    fn test_drag_toggles_only_while_empty() {
        let (mut zone, _, _) = fixture();
        zone.drag_enter();
        assert_eq!(zone.status(), ZoneStatus::Active);
        zone.drag_leave();
        assert_eq!(zone.status(), ZoneStatus::Pending);

        zone.accept_drop(files(&["a"]));
        zone.drag_enter();
        assert_eq!(zone.status(), ZoneStatus::Accepted);
    }

    #[test]
    fn test_accept_preserves_order() {
        let (mut zone, _, _) = fixture();
        let dropped = files(&["c", "a", "b"]);
        zone.drag_enter();
        zone.accept_drop(dropped.clone());

        assert_eq!(zone.status(), ZoneStatus::Accepted);
        assert_eq!(zone.queue().files(), dropped.as_slice());
    }

    #[test]
    fn test_empty_drop_is_ignored() {
        let (mut zone, scheduler, _) = fixture();
        assert!(matches!(
            zone.try_accept_drop(Vec::new()),
            Err(Error::InvalidDropPayload(_))
        ));
        zone.accept_drop(Vec::new());

        assert_eq!(zone.status(), ZoneStatus::Pending);
        assert_eq!(zone.status_text(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_timeline_values_and_spacing() {
        let (mut zone, scheduler, sink) = fixture();
        zone.accept_drop(files(&["a"]));

        for n in 1..=10u8 {
            scheduler.advance(STEP - Duration::from_millis(1));
            assert_eq!(sink.progress_values().len(), usize::from(n - 1));
            scheduler.advance(Duration::from_millis(1));
            assert_eq!(sink.progress_values().last(), Some(&(n * 10)));
            assert_eq!(zone.progress(), n * 10);
        }

        assert_eq!(sink.progress_values(), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        // Reaching 100 does not clear the queue
        assert_eq!(zone.status(), ZoneStatus::Accepted);
    }

    #[test]
    fn test_cancel_mid_session_silences_remaining_steps() {
        let (mut zone, scheduler, sink) = fixture();
        zone.accept_drop(files(&["a", "b"]));

        scheduler.advance(STEP * 3);
        zone.cancel();

        assert!(zone.queue().is_empty());
        assert_eq!(zone.status(), ZoneStatus::Pending);
        assert_eq!(zone.progress(), 0);

        scheduler.advance(STEP * 10);
        assert_eq!(sink.progress_values(), vec![10, 20, 30]);
        assert_eq!(zone.progress(), 0);
        assert!(zone.history().lock().unwrap().is_empty());
    }

    #[test]
    fn test_cancel_while_dragging_reverts_to_active() {
        let (mut zone, _, _) = fixture();
        zone.accept_drop(files(&["a"]));
        zone.drag_enter();
        zone.cancel();
        assert_eq!(zone.status(), ZoneStatus::Active);
    }

    #[test]
    fn test_redrop_restarts_timeline() {
        let (mut zone, scheduler, sink) = fixture();
        let first = zone.try_accept_drop(files(&["a"])).unwrap();
        scheduler.advance(STEP * 4);

        let second = zone.try_accept_drop(files(&["b"])).unwrap();
        assert_ne!(first, second);
        assert_eq!(zone.progress(), 0);

        scheduler.advance(STEP * 10);
        assert_eq!(
            sink.progress_values(),
            vec![10, 20, 30, 40, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
        );
    }

    #[test]
    fn test_completion_records_history() {
        let (mut zone, scheduler, _) = fixture();
        zone.accept_drop(files(&["one", "two"]));
        scheduler.advance(STEP * 10);

        let history = zone.history();
        let history = history.lock().unwrap();
        let names: Vec<_> = history.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn test_custom_schedule() {
        let scheduler = Arc::new(ManualScheduler::new());
        let sink = Arc::new(MemorySink::new());
        let mut zone = UploadZoneController::new(scheduler.clone(), sink.clone())
            .with_schedule(ProgressSchedule::new(4, Duration::from_millis(100)));

        zone.accept_drop(files(&["a"]));
        scheduler.advance(Duration::from_millis(400));
        assert_eq!(sink.progress_values(), vec![25, 50, 75, 100]);
    }
}
