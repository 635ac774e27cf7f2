//! Snapshot container discovery and snapshot enumeration
//!
//! Copy-on-write file systems expose read-only snapshots through a
//! conventionally named directory next to the data:
//!
//! ```text
//! search_root/
//!   .snap/                  <- container
//!     scheduled-2026-01-23/ <- snapshot
//!       file.txt            <- copy of search_root/file.txt
//! ```
//!
//! For a directory target the search root is the directory itself and the
//! snapshot directory *is* the copy. For a file target the search root is the
//! parent directory and the copy lives inside each snapshot under the file's
//! name. Discovery never walks up or down from the search root.

use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::config::{DEFAULT_CONTAINER_NAMES, ESTIMATED_SNAPSHOT_COUNT};
use super::entry::{SnapshotEntry, TargetKind};
use crate::timestamp::{default_templates, parse_timestamp, TimestampTemplate};
use crate::utils::fs::{is_dir, normalize_path};

/// Naming conventions used by a [`SnapshotLocator`]
///
/// Both lists are ordered by priority and never change after construction.
#[derive(Clone, Debug)]
pub struct LocatorConfig {
    /// Container directory names relative to the search root, e.g. `.snap`
    pub container_names: Vec<String>,
    /// Templates for decoding timestamps out of snapshot names
    pub templates: Vec<TimestampTemplate>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            container_names: DEFAULT_CONTAINER_NAMES.iter().map(|s| s.to_string()).collect(),
            templates: default_templates(),
        }
    }
}

/// Finds snapshots that hold a copy of a file or directory
///
/// Every call reads the file system afresh; nothing is cached between calls.
/// File system errors are treated as absence, so the worst outcome of an
/// unreadable snapshot is that it is missing from the listing.
#[derive(Clone, Debug, Default)]
pub struct SnapshotLocator {
    config: LocatorConfig,
}

impl SnapshotLocator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Returns the snapshot container for `path`, if there is one.
    ///
    /// `path` may be a directory, a file, or not exist at all; in the last
    /// case its parent is searched, like for a file.
    pub fn find_container(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = normalize_path(path.as_ref());
        let kind = TargetKind::of(&path);
        self.container_for(&path, kind)
    }

    /// True if a snapshot container exists for `path`.
    ///
    /// This says nothing about whether any snapshot holds a copy of `path`;
    /// [`list_snapshots`](Self::list_snapshots) may still come back empty.
    pub fn has_snapshots(&self, path: impl AsRef<Path>) -> bool {
        self.find_container(path).is_some()
    }

    /// Lists the snapshots that hold a copy of `path`, sorted by snapshot
    /// name.
    pub fn list_snapshots(&self, path: impl AsRef<Path>) -> Vec<SnapshotEntry> {
        self.lookup(path).1
    }

    /// Container and snapshots for `path` in one query.
    ///
    /// The target kind is derived once, so the container and the listed
    /// copies always agree on whether `path` is a file or a directory.
    pub fn lookup(&self, path: impl AsRef<Path>) -> (Option<PathBuf>, Vec<SnapshotEntry>) {
        let path = normalize_path(path.as_ref());
        let kind = TargetKind::of(&path);

        match self.container_for(&path, kind) {
            Some(container) => {
                let snapshots = self.snapshots_in(&container, &path, kind);
                (Some(container), snapshots)
            }
            None => (None, Vec::new()),
        }
    }

    fn snapshots_in(&self, container: &Path, path: &Path, kind: TargetKind) -> Vec<SnapshotEntry> {
        let file_name = match kind {
            TargetKind::Directory => None,
            TargetKind::File => match path.file_name() {
                Some(name) => Some(name.to_os_string()),
                None => {
                    debug!("{} has no file name, nothing to look up", path.display());
                    return Vec::new();
                }
            },
        };

        let mut snapshots = Vec::with_capacity(ESTIMATED_SNAPSHOT_COUNT);
        for snapshot_name in snapshot_dirs(container) {
            let snapshot_dir = container.join(&snapshot_name);
            let copy_path = match &file_name {
                Some(file_name) => snapshot_dir.join(file_name),
                None => snapshot_dir,
            };

            let metadata = match fs::metadata(&copy_path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    trace!("Skipping {}: {e}", copy_path.display());
                    continue;
                }
            };
            let modified: DateTime<Utc> = match metadata.modified() {
                Ok(time) => time.into(),
                Err(e) => {
                    debug!("No modification time for {}: {e}", copy_path.display());
                    continue;
                }
            };

            let name = snapshot_name.to_string_lossy().into_owned();
            let timestamp = parse_timestamp(&name, &self.config.templates);
            if timestamp.is_none() {
                trace!("No template matches snapshot name {name}");
            }

            snapshots.push(SnapshotEntry {
                name,
                path: copy_path,
                modified,
                size: (!kind.is_dir()).then(|| metadata.len()),
                timestamp,
            });
        }

        debug!(
            "Found {} snapshot(s) of {} in {}",
            snapshots.len(),
            path.display(),
            container.display()
        );
        snapshots
    }

    /// Container lookup for an already normalized and classified path
    fn container_for(&self, path: &Path, kind: TargetKind) -> Option<PathBuf> {
        let search_root = match kind {
            TargetKind::Directory => path,
            TargetKind::File => path.parent()?,
        };

        let found = self
            .config
            .container_names
            .iter()
            .map(|name| normalize_path(&search_root.join(name)))
            .find(|candidate| is_dir(candidate));

        if found.is_none() {
            debug!("No snapshot container under {}", search_root.display());
        }
        found
    }
}

/// Names of the snapshot directories inside `container`, sorted by raw name
fn snapshot_dirs(container: &Path) -> Vec<OsString> {
    let entries = match fs::read_dir(container) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot read {}: {e}", container.display());
            return Vec::new();
        }
    };

    let mut names: Vec<OsString> = entries
        .filter_map(Result::ok)
        .filter(|entry| is_dir(&entry.path()))
        .map(|entry| entry.file_name())
        .collect();
    names.sort();
    names
}
