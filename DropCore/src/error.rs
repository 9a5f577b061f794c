//! Error types for `DropCore`

use thiserror::Error;

/// The error type for `DropCore` operations.
///
/// The first three variants are never surfaced to the user. Callers log them
/// and treat the operation that produced them as a no-op.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Upload Errors ====================
    /// A drop, pick or paste produced no usable files.
    #[error("invalid drop payload: {0}")]
    InvalidDropPayload(String),

    // ==================== Shortcut Errors ====================
    /// Two active bindings resolve to the same key chord.
    #[error("shortcut conflict: '{combo}' is already bound")]
    ShortcutConflict {
        /// The combination as it was written by the second binding.
        combo: String,
    },

    /// A combination contains an empty token (`"mod++"`, `"+v"`).
    #[error("invalid shortcut: '{0}'")]
    InvalidShortcut(String),

    /// A platform name that is neither macOS nor one of the others.
    #[error("unknown platform: '{0}'")]
    UnknownPlatform(String),

    // ==================== Host Boundary Errors ====================
    /// The host side of the event channel has gone away.
    #[error("event channel unavailable")]
    EmitChannelUnavailable,

    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `DropCore` operations.
pub type Result<T> = std::result::Result<T, Error>;
