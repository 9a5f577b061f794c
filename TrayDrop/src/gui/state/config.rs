//! Configuration state for TrayDrop

use std::sync::{Arc, Mutex};

use dropcore::history::{RecentUpload, RecentUploads};
use dropcore::shortcut::Platform;
use floem::prelude::*;

use crate::config::{PersistedConfig, Theme};
use crate::gui::shared::init_theme;

/// Configuration state
#[derive(Clone)]
pub struct ConfigState {
    /// Current theme
    pub theme: RwSignal<Theme>,
    /// Whether the settings panel is visible
    pub show_settings: RwSignal<bool>,
    /// Platform used for glyphs and shortcut resolution
    pub platform: Platform,
    /// Shared with the upload zone, which records finished sessions into it
    pub history: Arc<Mutex<RecentUploads>>,
}

impl ConfigState {
    pub fn new() -> Self {
        // Load persisted config
        let persisted = PersistedConfig::load();

        Self {
            theme: init_theme(persisted.theme),
            show_settings: RwSignal::new(false),
            platform: persisted.effective_platform(),
            history: Arc::new(Mutex::new(persisted.recent_uploads())),
        }
    }

    /// Recent uploads, most recent first
    pub fn recent_uploads(&self) -> Vec<RecentUpload> {
        self.history
            .lock()
            .map(|h| h.entries().to_vec())
            .unwrap_or_default()
    }

    /// Clear all recent uploads
    pub fn clear_recent_uploads(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
        self.save();
    }

    /// Set the theme and save
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.save();
    }

    /// Save current state to disk (preserves fields this state doesn't own)
    pub fn save(&self) {
        let mut persisted = PersistedConfig::load();
        persisted.theme = self.theme.get_untracked();
        if let Ok(history) = self.history.lock() {
            persisted.set_recent_uploads(&history);
        }

        if let Err(e) = persisted.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::new()
    }
}
