//! Shared application state for TrayDrop

mod config;
mod upload;

// Re-export all state types
pub use config::ConfigState;
pub use upload::UploadState;
