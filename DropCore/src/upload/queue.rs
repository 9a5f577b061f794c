//! Files of the current upload session

use super::UploadFile;

/// Ordered files of the running upload. Empty means no upload.
///
/// Only ever replaced wholesale or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadQueue {
    files: Vec<UploadFile>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, files: Vec<UploadFile>) {
        self.files = files;
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total size of all queued files in bytes
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Status line for an upload in progress; `None` when nothing is queued.
    pub fn status_text(&self) -> Option<String> {
        match self.files.as_slice() {
            [] => None,
            [single] => Some(format!("Uploading {}", single.display_name())),
            many => Some(format!("Uploading {} file(s)...", many.len())),
        }
    }
}
