//! Snapshot entries and target classification

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// What kind of thing a query is about
///
/// Derived once per query so that the search root and the per-snapshot
/// existence check agree even if the path changes underneath us.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// Snapshots hold the directory itself: `<container>/<snapshot>/`
    Directory,
    /// Snapshots hold the file inside: `<container>/<snapshot>/<file name>`
    File,
}

impl TargetKind {
    /// Classifies `path`, following symlinks.
    ///
    /// Anything that is not readable as a directory is a `File`, including
    /// paths that do not exist at all. For those only the parent directory
    /// matters, which is exactly where a deleted file's snapshots live.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => TargetKind::Directory,
            _ => TargetKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TargetKind::Directory)
    }
}

/// One snapshot that holds a copy of the target
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    /// Name of the snapshot directory inside the container
    pub name: String,
    /// Path of the target's copy inside this snapshot
    pub path: PathBuf,
    /// Modification time of the copy
    pub modified: DateTime<Utc>,
    /// Byte size of the copy; `None` for directory targets
    pub size: Option<u64>,
    /// Point in time decoded from `name`, if any template matched
    pub timestamp: Option<DateTime<Utc>>,
}

impl SnapshotEntry {
    /// Best available time for display: the decoded snapshot time, falling
    /// back to the filesystem modification time.
    pub fn display_time(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(self.modified)
    }

    /// True when `other` is byte-identical as far as metadata can tell
    pub fn is_unchanged_from(&self, other: &SnapshotEntry) -> bool {
        self.size == other.size && self.modified == other.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn entry(name: &str, size: Option<u64>, secs: i64) -> SnapshotEntry {
        SnapshotEntry {
            name: name.to_string(),
            path: PathBuf::from("/snap").join(name),
            modified: Utc.timestamp_opt(secs, 0).unwrap(),
            size,
            timestamp: None,
        }
    }

    #[test]
    fn test_target_kind_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(TargetKind::of(temp_dir.path()), TargetKind::Directory);
    }

    #[test]
    fn test_target_kind_file_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert_eq!(TargetKind::of(&file), TargetKind::File);
        assert_eq!(TargetKind::of(&temp_dir.path().join("missing")), TargetKind::File);
    }

    #[test]
    fn test_display_time_prefers_parsed_timestamp() {
        let mut e = entry("a", Some(1), 100);
        assert_eq!(e.display_time(), e.modified);

        let parsed = Utc.with_ymd_and_hms(2026, 1, 23, 4, 0, 40).unwrap();
        e.timestamp = Some(parsed);
        assert_eq!(e.display_time(), parsed);
    }

    #[test]
    fn test_unchanged_requires_size_and_mtime() {
        let a = entry("a", Some(10), 100);
        assert!(a.is_unchanged_from(&entry("b", Some(10), 100)));
        assert!(!a.is_unchanged_from(&entry("b", Some(11), 100)));
        assert!(!a.is_unchanged_from(&entry("b", Some(10), 101)));
    }
}
