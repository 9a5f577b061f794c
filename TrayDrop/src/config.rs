//! Persisted configuration for TrayDrop

use std::fs;
use std::path::{Path, PathBuf};

use dropcore::history::{MAX_RECENT_UPLOADS, RecentUpload, RecentUploads};
use dropcore::shortcut::Platform;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Window theme, as picked in the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

impl Theme {
    /// Palette to draw with; `System` follows the desktop setting.
    pub fn effective(self) -> EffectiveTheme {
        match self {
            Self::Dark => EffectiveTheme::Dark,
            Self::Light => EffectiveTheme::Light,
            Self::System => {
                if is_system_dark_mode() {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        }
    }
}

/// Light or dark, after following the desktop setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Dark,
    Light,
}

/// `AppleInterfaceStyle` is only set while dark mode is on
#[cfg(target_os = "macos")]
fn is_system_dark_mode() -> bool {
    use std::process::Command;
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).contains("Dark"))
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
fn is_system_dark_mode() -> bool {
    // No portable query; the tray window is dark unless told otherwise
    true
}

fn default_max_recent() -> usize {
    MAX_RECENT_UPLOADS
}

/// Persistable configuration (saved to disk)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Overrides the compiled-in platform for glyphs and key resolution
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default = "default_max_recent")]
    pub max_recent: usize,
    #[serde(default)]
    pub recent_uploads: Vec<RecentUpload>,
}

impl Default for PersistedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            platform: None,
            max_recent: default_max_recent(),
            recent_uploads: Vec::new(),
        }
    }
}

impl PersistedConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("TrayDrop").join("config.json"))
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load from an explicit path. Missing or malformed files give defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("no config directory on this system".to_string()))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Platform used for glyphs and shortcut resolution
    pub fn effective_platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn recent_uploads(&self) -> RecentUploads {
        RecentUploads::from_entries(self.recent_uploads.clone(), self.max_recent)
    }

    pub fn set_recent_uploads(&mut self, history: &RecentUploads) {
        self.recent_uploads = history.entries().to_vec();
    }
}
