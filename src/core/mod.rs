//! Core snapshot discovery
//!
//! This module provides:
//! - Snapshot container discovery relative to a target path
//! - Enumeration of snapshots holding a copy of the target
//! - Built-in naming conventions and the user settings file

// Internal modules - not part of public API
pub(crate) mod config;
pub(crate) mod discovery;
pub(crate) mod entry;
pub(crate) mod settings;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
