//! Snapshot name templates

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

use super::format::DateFormat;
use super::TemplateError;

const WILDCARD: char = '*';

/// How a timestamp is embedded in a snapshot name
///
/// Written as `[*]<format>[*]`: a leading `*` allows any text before the
/// date, a trailing `*` any text after it. The timezone defaults to UTC.
/// It is not part of the pattern, so `Display` prints the pattern alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimestampTemplate {
    allow_prefix: bool,
    allow_suffix: bool,
    format: DateFormat,
    offset: FixedOffset,
}

impl TimestampTemplate {
    pub fn new(pattern: &str) -> Result<Self, TemplateError> {
        let (allow_prefix, rest) = match pattern.strip_prefix(WILDCARD) {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let (allow_suffix, format) = match rest.strip_suffix(WILDCARD) {
            Some(format) => (true, format),
            None => (false, rest),
        };

        Ok(Self {
            allow_prefix,
            allow_suffix,
            format: DateFormat::compile(format)?,
            offset: utc(),
        })
    }

    /// Interpret parsed times at `offset` instead of UTC
    #[must_use]
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn allows_prefix(&self) -> bool {
        self.allow_prefix
    }

    pub fn allows_suffix(&self) -> bool {
        self.allow_suffix
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn is_utc(&self) -> bool {
        self.offset == utc()
    }

    /// Finds the timestamp in `name`.
    ///
    /// Prefix and suffix lengths are unknown, so every segmentation is tried:
    /// prefix lengths ascending, and for each of those suffix lengths
    /// ascending. The first middle part that parses wins, which favours the
    /// earliest and tightest match. Lengths count characters, never splitting
    /// a multi-byte one.
    pub fn extract(&self, name: &str) -> Option<DateTime<Utc>> {
        let bounds: Vec<usize> = name
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(name.len()))
            .collect();
        let chars = bounds.len() - 1;

        let max_prefix = if self.allow_prefix { chars } else { 0 };
        let max_suffix = if self.allow_suffix { chars } else { 0 };

        for prefix in 0..=max_prefix {
            for suffix in 0..=max_suffix {
                if prefix + suffix >= chars {
                    break;
                }
                let middle = &name[bounds[prefix]..bounds[chars - suffix]];
                if let Some(timestamp) = self.format.parse(middle).and_then(|n| self.to_utc(n)) {
                    return Some(timestamp);
                }
            }
        }

        None
    }

    fn to_utc(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl FromStr for TimestampTemplate {
    type Err = TemplateError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl fmt::Display for TimestampTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allow_prefix {
            write!(f, "{WILDCARD}")?;
        }
        write!(f, "{}", self.format.as_str())?;
        if self.allow_suffix {
            write!(f, "{WILDCARD}")?;
        }
        Ok(())
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}
