//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Snapshot discovery (`SnapshotLocator`)
//! - The snapshot data model
//! - Settings loading
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{LocatorConfig, SnapshotLocator};

// Data model
pub use super::entry::{SnapshotEntry, TargetKind};

// Settings
pub use super::settings::{
    default_settings_path, load_locator_config, OffsetTemplate, Settings, SettingsSource,
    TemplateSetting,
};

// Built-in conventions
pub use super::config::{DEFAULT_CONTAINER_NAMES, DEFAULT_TIMESTAMP_TEMPLATES};

// User-facing messages
pub use super::config::NOT_SUPPORTED_MESSAGE;

/// True if a snapshot container exists for `path`, using built-in conventions
pub fn has_snapshots(path: impl AsRef<std::path::Path>) -> bool {
    SnapshotLocator::default().has_snapshots(path)
}

/// Snapshots holding a copy of `path`, using built-in conventions
pub fn list_snapshots(path: impl AsRef<std::path::Path>) -> Vec<SnapshotEntry> {
    SnapshotLocator::default().list_snapshots(path)
}

// Internal helpers for command and display modules
pub(crate) use super::config::{
    COLLAPSED_MARKER, DATE_DISPLAY_FORMAT, DEFAULT_LOG_FILTER, EXPANDED_MARKER,
    NAME_COLUMN_MIN_WIDTH, PATH_DISPLAY_WIDTH, VERBOSE_LOG_FILTER,
};
