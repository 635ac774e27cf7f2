//! Timestamp extraction from snapshot names
//!
//! Snapshot tools encode the creation time in the snapshot directory name,
//! each in its own way. A [`TimestampTemplate`] describes one such naming
//! scheme:
//!
//! - `*` as first character: any text may precede the date
//! - `*` as last character: any text may follow the date
//! - `yyyy` `MM` `dd` `HH` `mm` `ss`: fixed-width numeric fields
//! - `'text'`: literal text (`''` for a quote); other punctuation is literal
//!
//! ```rust
//! use snapshot_finder::timestamp::{parse_timestamp, TimestampTemplate};
//!
//! let scheduled = TimestampTemplate::new("*'scheduled-'yyyy-MM-dd-HH_mm_ss'_UTC'*").unwrap();
//! let templates = vec![scheduled];
//! let ts = parse_timestamp("scheduled-2026-01-23-04_00_40_UTC", &templates);
//! assert_eq!(ts.unwrap().to_rfc3339(), "2026-01-23T04:00:40+00:00");
//! ```

mod format;
mod template;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use crate::core::config::DEFAULT_TIMESTAMP_TEMPLATES;

pub use format::DateFormat;
pub use template::TimestampTemplate;

/// Problems with a template string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template format '{0}' is empty")]
    EmptyFormat(String),

    #[error("unterminated quote in template format '{0}'")]
    UnterminatedQuote(String),

    #[error("unknown token '{token}' at byte {position} of '{format}' (quote literal text)")]
    UnknownToken {
        format: String,
        token: char,
        position: usize,
    },

    #[error(
        "'*' is only allowed at the start or end of a template, \
         found at byte {position} of '{format}'"
    )]
    MisplacedWildcard { format: String, position: usize },

    #[error("field '{field}' appears more than once in '{format}'")]
    DuplicateField { format: String, field: &'static str },

    #[error("field '{field}' is required in '{format}'")]
    MissingField { format: String, field: &'static str },
}

/// Decodes the timestamp embedded in `name`.
///
/// Templates are tried in order and the first match wins. `None` means no
/// template matched; it is never conflated with the epoch.
pub fn parse_timestamp(name: &str, templates: &[TimestampTemplate]) -> Option<DateTime<Utc>> {
    templates.iter().find_map(|template| template.extract(name))
}

/// Built-in templates compiled from [`DEFAULT_TIMESTAMP_TEMPLATES`]
pub fn default_templates() -> Vec<TimestampTemplate> {
    DEFAULT_TIMESTAMP_TEMPLATES
        .iter()
        .filter_map(|pattern| match TimestampTemplate::new(pattern) {
            Ok(template) => Some(template),
            Err(e) => {
                warn!("Skipping built-in template {pattern}: {e}");
                None
            }
        })
        .collect()
}
