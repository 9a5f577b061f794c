//! Host side of the event boundary
//!
//! The upload zone and the menu emit [`HostEvent`]s into a channel. A host
//! thread drains it: progress is logged and forwarded to an observer, a
//! quit event ends the loop and runs the quit hook.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use dropcore::events::{ChannelSink, EventSink, HostEvent};

/// Running host thread plus the sink that feeds it.
pub struct HostBridge {
    sink: Arc<ChannelSink>,
    handle: JoinHandle<()>,
}

impl HostBridge {
    /// Start the host thread.
    ///
    /// `on_progress` sees every progress value; `on_quit` runs once when a
    /// quit event arrives.
    pub fn spawn<P, Q>(on_progress: P, on_quit: Q) -> Self
    where
        P: Fn(u8) + Send + 'static,
        Q: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::spawn(move || run_host(&rx, on_progress, on_quit));
        Self {
            sink: Arc::new(ChannelSink::new(tx)),
            handle,
        }
    }

    /// Sink to hand to the upload zone and the menu
    pub fn sink(&self) -> Arc<dyn EventSink> {
        self.sink.clone()
    }

    /// Drop the local sink and wait for the host thread to finish. Returns
    /// once every other sink clone is gone or a quit event was handled.
    pub fn join(self) {
        drop(self.sink);
        if self.handle.join().is_err() {
            tracing::error!("Host thread panicked");
        }
    }
}

fn run_host<P, Q>(rx: &Receiver<HostEvent>, on_progress: P, on_quit: Q)
where
    P: Fn(u8),
    Q: FnOnce(),
{
    for event in rx {
        match event {
            HostEvent::Progress { progress } => {
                tracing::info!("Upload progress {}%", progress);
                on_progress(progress);
            }
            HostEvent::Quit => {
                tracing::info!("Quit requested");
                on_quit();
                return;
            }
        }
    }
    tracing::debug!("Host channel closed");
}
