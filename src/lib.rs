//! # snapshot-finder
//!
//! `snapshot-finder` locates filesystem snapshots (CephFS `.snap`, snapper
//! `.snapshots`, ZFS `.zfs/snapshot`, ...) that hold an earlier copy of a file
//! or directory. It powers the `snaps` CLI tool.
//!
//! ## Core Features
//!
//! - **Container Discovery**: Finds the snapshot directory next to a target.
//! - **Snapshot Listing**: Only snapshots that really contain the target.
//! - **Timestamps**: Decodes creation times from snapshot names via templates.
//! - **Grouping**: Folds runs of unchanged copies into one collapsible row.
//!
//! ## Example
//!
//! ```rust,no_run
//! use snapshot_finder::core::SnapshotLocator;
//! use snapshot_finder::display::group_entries;
//!
//! let locator = SnapshotLocator::default();
//! if locator.has_snapshots("notes.txt") {
//!     for item in group_entries(locator.list_snapshots("notes.txt")) {
//!         println!("{:?}", item.entries().first().map(|e| &e.name));
//!     }
//! }
//! ```

pub mod commands;
pub mod core;
pub mod display;
pub mod timestamp;
pub mod utils;
