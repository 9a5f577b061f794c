//! Host events and the sinks that deliver them
//!
//! The upload zone never talks to the host process directly. It emits
//! [`HostEvent`]s into an [`EventSink`], fire-and-forget.

use std::io::{ErrorKind, Write};
use std::sync::Mutex;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Notification sent across the host boundary.
///
/// Serialized as `{"event":"progress","payload":{"progress":10}}` and
/// `{"event":"quit"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "lowercase")]
pub enum HostEvent {
    /// Synthetic upload progress, 0..=100.
    Progress { progress: u8 },
    /// The user asked the application to terminate.
    Quit,
}

/// Receiver side of the host boundary.
pub trait EventSink: Send + Sync {
    /// Deliver one event. No acknowledgement is expected.
    fn emit(&self, event: HostEvent) -> Result<()>;
}

/// Emit an event, logging delivery failures instead of propagating them.
pub fn emit_or_log(sink: &dyn EventSink, event: HostEvent) {
    if let Err(e) = sink.emit(event) {
        tracing::warn!("Dropped host event {:?}: {}", event, e);
    }
}

/// Sends events over an mpsc channel to a host thread.
pub struct ChannelSink {
    tx: Sender<HostEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<HostEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: HostEvent) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|_| Error::EmitChannelUnavailable)
    }
}

/// Writes one JSON object per line to any writer (stdout in the CLI).
pub struct JsonLinesSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the writer, e.g. to inspect a `Vec<u8>` in tests.
    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn emit(&self, event: HostEvent) -> Result<()> {
        let line = serde_json::to_string(&event)?;
        let mut out = self.out.lock().map_err(|_| Error::EmitChannelUnavailable)?;
        writeln!(out, "{line}")
            .and_then(|()| out.flush())
            .map_err(|e| match e.kind() {
                ErrorKind::BrokenPipe => Error::EmitChannelUnavailable,
                _ => Error::Io(e),
            })
    }
}

/// Records every event in memory.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<HostEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Only the progress payloads, in emission order
    pub fn progress_values(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Progress { progress } => Some(progress),
                HostEvent::Quit => None,
            })
            .collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: HostEvent) -> Result<()> {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    #[test]
    fn test_wire_format() {
        let progress = serde_json::to_string(&HostEvent::Progress { progress: 30 }).unwrap();
        assert_eq!(progress, r#"{"event":"progress","payload":{"progress":30}}"#);

        let quit = serde_json::to_string(&HostEvent::Quit).unwrap();
        assert_eq!(quit, r#"{"event":"quit"}"#);
    }

    #[test]
    fn test_channel_sink_reports_closed_host() {
        let (tx, rx) = mpsc::channel();
        let sink = ChannelSink::new(tx);

        sink.emit(HostEvent::Quit).unwrap();
        assert_eq!(rx.recv().unwrap(), HostEvent::Quit);

        drop(rx);
        assert!(matches!(
            sink.emit(HostEvent::Quit),
            Err(Error::EmitChannelUnavailable)
        ));
    }

    #[test]
    fn test_json_lines_sink() {
        let sink = JsonLinesSink::new(Vec::new());
        sink.emit(HostEvent::Progress { progress: 10 }).unwrap();
        sink.emit(HostEvent::Quit).unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "{\"event\":\"progress\",\"payload\":{\"progress\":10}}\n{\"event\":\"quit\"}\n"
        );
    }
}
