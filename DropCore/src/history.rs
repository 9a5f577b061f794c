//! Recently completed uploads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::upload::UploadFile;

/// Default number of entries kept
pub const MAX_RECENT_UPLOADS: usize = 10;

/// A file whose upload session ran to 100%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUpload {
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub path: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl RecentUpload {
    fn key(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

/// Most-recent-first list of completed uploads, bounded in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUploads {
    entries: Vec<RecentUpload>,
    max: usize,
}

impl RecentUploads {
    pub fn new(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            max,
        }
    }

    /// Restore from persisted entries, trimming to `max`.
    pub fn from_entries(mut entries: Vec<RecentUpload>, max: usize) -> Self {
        entries.truncate(max);
        Self { entries, max }
    }

    pub fn entries(&self) -> &[RecentUpload] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Put `files` at the front, in queue order, replacing older entries for
    /// the same path (or name, for files without a path).
    pub fn record(&mut self, files: &[UploadFile], at: DateTime<Utc>) {
        let mut fresh: Vec<RecentUpload> = files
            .iter()
            .map(|f| RecentUpload {
                name: f.name.clone(),
                size: f.size,
                path: f.path.as_ref().map(|p| p.display().to_string()),
                uploaded_at: at,
            })
            .collect();

        self.entries
            .retain(|old| fresh.iter().all(|new| new.key() != old.key()));
        fresh.append(&mut self.entries);
        fresh.truncate(self.max);
        self.entries = fresh;
    }
}

impl Default for RecentUploads {
    fn default() -> Self {
        Self::new(MAX_RECENT_UPLOADS)
    }
}
