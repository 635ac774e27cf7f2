//! Snapshot listing command implementation
//!
//! Each target is looked up on a blocking worker so that several targets on
//! slow network mounts do not wait for each other. A single lookup is still
//! plain synchronous file system access.

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{SnapshotEntry, SnapshotLocator};
use crate::display::{render_report, RenderOptions};

/// Everything known about one target
#[derive(Clone, Debug, Serialize)]
pub struct TargetReport {
    pub path: PathBuf,
    pub container: Option<PathBuf>,
    pub snapshots: Vec<SnapshotEntry>,
}

impl TargetReport {
    pub fn is_supported(&self) -> bool {
        self.container.is_some()
    }
}

/// Looks up one target
pub fn collect_report(locator: &SnapshotLocator, path: &Path) -> TargetReport {
    let (container, snapshots) = locator.lookup(path);

    TargetReport {
        path: path.to_path_buf(),
        container,
        snapshots,
    }
}

/// Looks up all targets concurrently; reports come back in argument order
pub async fn collect_reports(
    locator: Arc<SnapshotLocator>,
    paths: Vec<PathBuf>,
) -> Result<Vec<TargetReport>> {
    let mut tasks: FuturesUnordered<_> = paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let locator = Arc::clone(&locator);
            async move {
                let report =
                    tokio::task::spawn_blocking(move || collect_report(&locator, &path)).await;
                (index, report)
            }
        })
        .collect();

    let mut indexed = Vec::with_capacity(tasks.len());
    while let Some((index, report)) = tasks.next().await {
        indexed.push((index, report.context("Snapshot lookup task failed")?));
    }

    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, report)| report).collect())
}

/// Formats reports as text or JSON
pub fn format_reports(
    reports: &[TargetReport],
    json: bool,
    options: &RenderOptions,
) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(reports).context("Failed to serialize snapshot list");
    }

    let with_headings = reports.len() > 1;
    let sections: Vec<String> = reports
        .iter()
        .map(|report| {
            let body = render_report(report.is_supported(), report.snapshots.clone(), options);
            if with_headings {
                format!("{}:\n{body}", report.path.display())
            } else {
                body
            }
        })
        .collect();

    Ok(sections.join("\n\n"))
}

/// Main handler for the list command
pub async fn handle_list_command(
    locator: Arc<SnapshotLocator>,
    paths: Vec<PathBuf>,
    json: bool,
    options: RenderOptions,
) -> Result<()> {
    let reports = collect_reports(locator, paths).await?;
    println!("{}", format_reports(&reports, json, &options)?);
    Ok(())
}
