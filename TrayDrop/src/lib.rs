//! TrayDrop - tray file uploader
//!
//! A drop zone with simulated upload progress and a shortcut-driven action
//! menu. The session and shortcut engine lives in [`dropcore`]; this crate
//! adds persisted configuration, clipboard access, the host-event bridge,
//! the floem GUI and the command line.

// Re-export dropcore
pub use dropcore;

pub mod clipboard;
pub mod config;
pub mod error;
pub mod host;

// Feature-gated modules
#[cfg(feature = "gui")]
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
