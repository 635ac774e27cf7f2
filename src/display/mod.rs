//! Presentation of snapshot listings
//!
//! Grouping of unchanged snapshots and plain-text rendering for the CLI.
//! Locale-aware formatting and widgets belong to whoever embeds the library.

pub mod group;
pub mod render;

pub use group::{flatten, group_entries, DisplayItem, SnapshotGroup};
pub use render::{format_time, render_listing, render_report, RenderOptions};
