//! Collapsing runs of unchanged snapshots
//!
//! Snapshots are usually taken on a schedule, so most of them hold the very
//! same copy of a file. Consecutive snapshots whose copy has the same size and
//! modification time are folded into one [`SnapshotGroup`].

use chrono::{DateTime, Utc};

use crate::core::SnapshotEntry;

/// One row of a grouped listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayItem {
    Single(SnapshotEntry),
    Group(SnapshotGroup),
}

impl DisplayItem {
    /// The snapshots behind this row, in listing order
    pub fn entries(&self) -> &[SnapshotEntry] {
        match self {
            DisplayItem::Single(entry) => std::slice::from_ref(entry),
            DisplayItem::Group(group) => group.entries(),
        }
    }

    pub fn into_entries(self) -> Vec<SnapshotEntry> {
        match self {
            DisplayItem::Single(entry) => vec![entry],
            DisplayItem::Group(group) => group.entries,
        }
    }
}

/// Two or more consecutive snapshots holding an identical copy
///
/// Groups start out collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotGroup {
    entries: Vec<SnapshotEntry>,
    modified: DateTime<Utc>,
    collapsed: bool,
}

impl SnapshotGroup {
    fn new(entries: Vec<SnapshotEntry>, modified: DateTime<Utc>) -> Self {
        Self {
            entries,
            modified,
            collapsed: true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Modification time shared by every member
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn summary(&self) -> String {
        format!("{} unchanged snapshots", self.len())
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn expand(&mut self) {
        self.collapsed = false;
    }

    pub fn collapse(&mut self) {
        self.collapsed = true;
    }
}

/// Folds maximal runs of unchanged snapshots into groups.
///
/// Single pass, order preserving. A run continues while the next entry has
/// exactly the size and modification time of the run's first entry.
pub fn group_entries(entries: Vec<SnapshotEntry>) -> Vec<DisplayItem> {
    let mut items = Vec::new();
    let mut run: Vec<SnapshotEntry> = Vec::new();

    for entry in entries {
        if run.first().is_some_and(|anchor| !anchor.is_unchanged_from(&entry)) {
            close_run(&mut items, std::mem::take(&mut run));
        }
        run.push(entry);
    }
    close_run(&mut items, run);

    items
}

fn close_run(items: &mut Vec<DisplayItem>, mut run: Vec<SnapshotEntry>) {
    match run.len() {
        0 => {}
        1 => {
            if let Some(entry) = run.pop() {
                items.push(DisplayItem::Single(entry));
            }
        }
        _ => {
            let modified = run[0].modified;
            items.push(DisplayItem::Group(SnapshotGroup::new(run, modified)));
        }
    }
}

/// Expands every group in place, giving back the original sequence
pub fn flatten(items: &[DisplayItem]) -> Vec<SnapshotEntry> {
    items
        .iter()
        .flat_map(|item| item.entries().iter().cloned())
        .collect()
}
