#![allow(non_snake_case)]
//! # DropCore
//!
//! The GUI-free engine behind TrayDrop.
//!
//! ## Components
//!
//! - **Upload sessions** - queue, derived zone status, timed progress with cancellation
//! - **Host events** - `progress`/`quit` notifications and the sinks that carry them
//! - **Shortcuts** - `mod+shift+v` style combinations, glyph rendering, conflict-checked registry
//! - **Menu** - actionable rows that bind a shortcut to a click action
//! - **History** - recently completed uploads
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use dropcore::prelude::*;
//!
//! let scheduler = Arc::new(ManualScheduler::new());
//! let sink = Arc::new(MemorySink::new());
//! let mut zone = UploadZoneController::new(scheduler.clone(), sink.clone());
//!
//! zone.accept_drop(vec![UploadFile::new("notes.txt", 42)]);
//! assert_eq!(zone.status(), ZoneStatus::Accepted);
//!
//! scheduler.advance(Duration::from_secs(5));
//! assert_eq!(sink.progress_values(), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
//! ```

pub mod error;
pub mod events;
pub mod history;
pub mod menu;
pub mod scheduler;
pub mod shortcut;
pub mod upload;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::events::{ChannelSink, EventSink, HostEvent, JsonLinesSink, MemorySink};
    pub use crate::history::{RecentUpload, RecentUploads};
    pub use crate::menu::{Callback, Menu, MenuAction, MenuItem, default_menu};
    pub use crate::scheduler::{ManualScheduler, Scheduler, ThreadScheduler};
    pub use crate::shortcut::{
        KeyChord, Modifiers, Platform, Shortcut, ShortcutRegistry, render_shortcut_glyph,
    };
    pub use crate::upload::{
        ProgressSchedule, UploadFile, UploadQueue, UploadZoneController, ZoneStatus,
    };
}
