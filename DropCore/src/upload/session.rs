//! Upload session identity and cancellation

use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Shared cancellation flag. Every scheduled step holds a clone and runs
/// through [`CancelToken::run_unless_cancelled`].
///
/// Cancelling waits for a step that is already running, so once
/// [`CancelToken::cancel`] returns no step of the session has any effect left.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<Mutex<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        match self.cancelled.lock() {
            Ok(mut cancelled) => *cancelled = true,
            Err(poisoned) => *poisoned.into_inner() = true,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
            .lock()
            .map(|cancelled| *cancelled)
            .unwrap_or(true)
    }

    /// Run `step` while holding the flag, unless the token was cancelled.
    /// Returns whether `step` ran.
    pub fn run_unless_cancelled(&self, step: impl FnOnce()) -> bool {
        let Ok(cancelled) = self.cancelled.lock() else {
            return false;
        };
        if *cancelled {
            return false;
        }
        step();
        true
    }
}

/// One accepted drop, from `accept_drop` until cancel or the next drop.
#[derive(Debug, Clone)]
pub struct UploadSession {
    id: Uuid,
    token: CancelToken,
}

impl UploadSession {
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            token: CancelToken::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Invalidate the session; its pending steps become no-ops.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}
