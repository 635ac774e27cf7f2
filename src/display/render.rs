//! Plain-text rendering of snapshot listings

use chrono::{DateTime, Local, Utc};

use super::group::{group_entries, DisplayItem};
use crate::core::{
    SnapshotEntry, COLLAPSED_MARKER, DATE_DISPLAY_FORMAT, EXPANDED_MARKER, NAME_COLUMN_MIN_WIDTH,
    NOT_SUPPORTED_MESSAGE, PATH_DISPLAY_WIDTH,
};
use crate::utils::shorten_path;

const TREE_BRANCH: &str = "├─";
const TREE_LAST: &str = "└─";
const MEMBER_INDENT: usize = 3;

/// Rendering switches
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Fold runs of unchanged snapshots
    pub group: bool,
    /// Show group members below their summary row
    pub expand: bool,
    /// Add a column with the path of each copy
    pub paths: bool,
    /// Print times in UTC instead of local time
    pub utc: bool,
}

/// Renders the report for one target
///
/// `entries` is ignored when there is no container.
pub fn render_report(
    has_container: bool,
    entries: Vec<SnapshotEntry>,
    options: &RenderOptions,
) -> String {
    if !has_container {
        return NOT_SUPPORTED_MESSAGE.to_string();
    }

    let count = entries.len();
    let items = if options.group {
        group_entries(entries)
    } else {
        entries.into_iter().map(DisplayItem::Single).collect()
    };

    let mut out = format!("{count} snapshot(s) found:");
    let listing = render_listing(&items, options);
    if !listing.is_empty() {
        out.push('\n');
        out.push_str(&listing);
    }
    out
}

/// One line per row; expanded groups add a line per member
pub fn render_listing(items: &[DisplayItem], options: &RenderOptions) -> String {
    let width = name_column_width(items, options);
    let mut lines = Vec::new();

    for item in items {
        match item {
            DisplayItem::Single(entry) => {
                lines.push(row("  ", &entry.name, width, entry.display_time(), entry, options));
            }
            DisplayItem::Group(group) => {
                let expanded = options.expand || !group.is_collapsed();
                let marker = if expanded { EXPANDED_MARKER } else { COLLAPSED_MARKER };
                lines.push(format!(
                    "{marker} {:<width$}  {}",
                    group.summary(),
                    format_time(group.modified(), options.utc)
                ));

                if expanded {
                    let last = group.len() - 1;
                    for (i, entry) in group.entries().iter().enumerate() {
                        let tree = if i == last { TREE_LAST } else { TREE_BRANCH };
                        let lead = format!("  {tree} ");
                        lines.push(row(
                            &lead,
                            &entry.name,
                            width.saturating_sub(MEMBER_INDENT),
                            entry.display_time(),
                            entry,
                            options,
                        ));
                    }
                }
            }
        }
    }

    lines.join("\n")
}

fn row(
    lead: &str,
    label: &str,
    width: usize,
    time: DateTime<Utc>,
    entry: &SnapshotEntry,
    options: &RenderOptions,
) -> String {
    let mut line = format!("{lead}{label:<width$}  {}", format_time(time, options.utc));
    if options.paths {
        let path = entry.path.to_string_lossy();
        line.push_str("  ");
        line.push_str(&shorten_path(&path, PATH_DISPLAY_WIDTH));
    }
    line
}

fn name_column_width(items: &[DisplayItem], options: &RenderOptions) -> usize {
    items
        .iter()
        .map(|item| match item {
            DisplayItem::Single(entry) => entry.name.chars().count(),
            DisplayItem::Group(group) => {
                let summary = group.summary().chars().count();
                if options.expand || !group.is_collapsed() {
                    group
                        .entries()
                        .iter()
                        .map(|e| e.name.chars().count() + MEMBER_INDENT)
                        .fold(summary, usize::max)
                } else {
                    summary
                }
            }
        })
        .fold(NAME_COLUMN_MIN_WIDTH, usize::max)
}

/// Formats a time for display, in local time unless `utc` is set
pub fn format_time(time: DateTime<Utc>, utc: bool) -> String {
    if utc {
        time.format(DATE_DISPLAY_FORMAT).to_string()
    } else {
        time.with_timezone(&Local).format(DATE_DISPLAY_FORMAT).to_string()
    }
}
