use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use dropcore::events::{ChannelSink, EventSink, HostEvent, JsonLinesSink};
use dropcore::scheduler::ThreadScheduler;
use dropcore::upload::UploadZoneController;

use crate::config::PersistedConfig;

/// Slack on top of the schedule before giving up on the final step
const COMPLETION_GRACE: Duration = Duration::from_secs(2);

pub fn execute(files: &[PathBuf], cancel_after: Option<u64>) -> anyhow::Result<()> {
    let mut config = PersistedConfig::load();
    let history = Arc::new(Mutex::new(config.recent_uploads()));

    let (tx, rx) = mpsc::channel();
    let mut zone = UploadZoneController::new(
        Arc::new(ThreadScheduler::new()),
        Arc::new(ChannelSink::new(tx)),
    )
    .with_history(history.clone());

    zone.accept_paths(files);
    let Some(status) = zone.status_text() else {
        anyhow::bail!("none of the given paths is a readable file");
    };
    eprintln!("{status}");

    let wait = match cancel_after {
        Some(ms) => Duration::from_millis(ms),
        None => zone.schedule().total_duration() + COMPLETION_GRACE,
    };
    let out = JsonLinesSink::new(io::stdout());
    let finished = forward_until_complete(&rx, &out, Instant::now() + wait)?;

    if !finished {
        zone.cancel();
        if cancel_after.is_some() {
            eprintln!("✗ Upload cancelled");
            return Ok(());
        }
        anyhow::bail!("upload session did not finish in time");
    }

    if let Ok(history) = history.lock() {
        config.set_recent_uploads(&history);
    }
    config.save()?;

    eprintln!("✓ Upload complete");
    Ok(())
}

/// Copy events from the zone to `out` until the 100% event has been written
/// or `deadline` passes. Returns whether the session completed.
fn forward_until_complete(
    rx: &Receiver<HostEvent>,
    out: &dyn EventSink,
    deadline: Instant,
) -> dropcore::Result<bool> {
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(event) => {
                out.emit(event)?;
                if event == (HostEvent::Progress { progress: 100 }) {
                    return Ok(true);
                }
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropcore::events::MemorySink;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_forward_stops_after_final_event_is_written() {
        let (tx, rx) = mpsc::channel();
        for progress in [10, 50, 100, 10] {
            tx.send(HostEvent::Progress { progress }).unwrap();
        }

        let out = MemorySink::new();
        let deadline = Instant::now() + Duration::from_secs(5);
        assert!(forward_until_complete(&rx, &out, deadline).unwrap());
        assert_eq!(out.progress_values(), vec![10, 50, 100]);
    }

    #[test]
    fn test_forward_gives_up_at_deadline() {
        let (tx, rx) = mpsc::channel();
        tx.send(HostEvent::Progress { progress: 30 }).unwrap();

        let out = MemorySink::new();
        let deadline = Instant::now() + Duration::from_millis(20);
        assert!(!forward_until_complete(&rx, &out, deadline).unwrap());
        assert_eq!(out.progress_values(), vec![30]);
        drop(tx);
    }
}
