//! Files offered to the upload zone

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Names longer than this are shortened in the zone's status line
pub const DISPLAY_NAME_LIMIT: usize = 14;

/// A queued file. The payload itself is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            path: None,
        }
    }

    /// Describe a file on disk. Directories and missing paths are rejected.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(Error::InvalidDropPayload(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            size: metadata.len(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Name for the status line, cut after [`DISPLAY_NAME_LIMIT`] characters.
    pub fn display_name(&self) -> String {
        if self.name.chars().count() > DISPLAY_NAME_LIMIT {
            let head: String = self.name.chars().take(DISPLAY_NAME_LIMIT).collect();
            format!("{head} ... ")
        } else {
            self.name.clone()
        }
    }
}
