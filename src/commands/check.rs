//! Snapshot support check
//!
//! Answers the question a file manager asks before showing a snapshots page:
//! is there a snapshot container for this location at all?

use std::path::Path;

use crate::core::{SnapshotLocator, NOT_SUPPORTED_MESSAGE};

/// Prints the container for `path`. Returns whether one was found.
pub fn handle_check_command(locator: &SnapshotLocator, path: &Path) -> bool {
    match locator.find_container(path) {
        Some(container) => {
            println!("{}", container.display());
            true
        }
        None => {
            println!("{NOT_SUPPORTED_MESSAGE}");
            false
        }
    }
}
