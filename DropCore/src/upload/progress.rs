//! Shared progress value

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Progress as integer percentage, shared between the timer steps that
/// raise it and the UI that polls it.
#[derive(Debug, Clone, Default)]
pub struct SharedProgress {
    progress_pct: Arc<AtomicU32>,
}

impl SharedProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current progress percentage (0-100)
    pub fn get_pct(&self) -> u8 {
        self.progress_pct.load(Ordering::SeqCst).min(100) as u8
    }

    /// Raise progress to `pct`. Never lowers it.
    pub fn raise_to(&self, pct: u8) {
        self.progress_pct
            .fetch_max(u32::from(pct.min(100)), Ordering::SeqCst);
    }

    /// Reset progress
    pub fn reset(&self) {
        self.progress_pct.store(0, Ordering::SeqCst);
    }
}
