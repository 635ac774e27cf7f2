//! Test fixtures for snapshot directory layouts

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A scratch directory tree with automatic cleanup
pub struct SnapshotTree {
    pub temp_dir: TempDir,
}

impl SnapshotTree {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates a directory (and its parents) relative to the root
    pub fn dir(&self, rel: &str) -> Result<PathBuf> {
        let path = self.path().join(rel);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Creates a file relative to the root, creating parent directories
    pub fn file(&self, rel: &str, content: &str) -> Result<PathBuf> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Creates `<container>/<name>` for every snapshot name
    pub fn snapshots(&self, container: &str, names: &[&str]) -> Result<PathBuf> {
        let container_path = self.dir(container)?;
        for name in names {
            fs::create_dir_all(container_path.join(name))?;
        }
        Ok(container_path)
    }

    /// Pins the modification time of a file to `secs` after the epoch
    pub fn set_mtime(&self, rel: &str, secs: u64) -> Result<()> {
        let file = fs::OpenOptions::new().write(true).open(self.path().join(rel))?;
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))?;
        Ok(())
    }
}
