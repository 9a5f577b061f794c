//! Derived display status of the upload zone

use std::fmt;

/// Display mode of the upload zone. Never stored, always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneStatus {
    /// Nothing queued, nothing dragged over the zone
    Pending,
    /// Nothing queued, a drag is hovering the zone
    Active,
    /// Files are queued
    Accepted,
}

impl ZoneStatus {
    /// A non-empty queue wins over any drag in progress.
    pub const fn derive(has_files: bool, dragging: bool) -> Self {
        match (has_files, dragging) {
            (true, _) => Self::Accepted,
            (false, true) => Self::Active,
            (false, false) => Self::Pending,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Accepted => "accept",
        }
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_truth_table() {
        assert_eq!(ZoneStatus::derive(false, false), ZoneStatus::Pending);
        assert_eq!(ZoneStatus::derive(false, true), ZoneStatus::Active);
        assert_eq!(ZoneStatus::derive(true, false), ZoneStatus::Accepted);
        assert_eq!(ZoneStatus::derive(true, true), ZoneStatus::Accepted);
    }
}
