//! User settings file
//!
//! Settings override the built-in conventions and are read once at startup.
//! Lookup order:
//! 1. `--config FILE`
//! 2. `SNAPS_CONFIG` environment variable
//! 3. `<config dir>/snaps/config.toml` (e.g. `~/.config/snaps/config.toml`)
//!
//! A file named by 1 or 2 must exist. The default file is optional.
//!
//! ```toml
//! container_names = [".snap", ".snapshots"]
//! templates = [
//!     "*'scheduled-'yyyy-MM-dd-HH_mm_ss'_UTC'*",
//!     { pattern = "*yyyy-MM-dd_HH.mm.ss*", utc_offset = "+02:00" },
//! ]
//! ```
//!
//! A plain string template reads times as UTC.

use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::{SETTINGS_DIR_NAME, SETTINGS_ENV_VAR, SETTINGS_FILE_NAME};
use super::discovery::LocatorConfig;
use crate::timestamp::TimestampTemplate;

/// Where settings came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsSource {
    CommandLine(PathBuf),
    Environment(PathBuf),
    UserConfig(PathBuf),
    BuiltIn,
}

impl SettingsSource {
    /// Picks the settings file to read, without reading it
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return SettingsSource::CommandLine(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR).filter(|v| !v.is_empty()) {
            return SettingsSource::Environment(PathBuf::from(path));
        }

        match default_settings_path() {
            Some(path) => SettingsSource::UserConfig(path),
            None => SettingsSource::BuiltIn,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SettingsSource::CommandLine(path)
            | SettingsSource::Environment(path)
            | SettingsSource::UserConfig(path) => Some(path),
            SettingsSource::BuiltIn => None,
        }
    }

    /// Whether a missing file is an error
    fn is_required(&self) -> bool {
        matches!(
            self,
            SettingsSource::CommandLine(_) | SettingsSource::Environment(_)
        )
    }
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSource::CommandLine(path) => write!(f, "{} (--config)", path.display()),
            SettingsSource::Environment(path) => {
                write!(f, "{} (${SETTINGS_ENV_VAR})", path.display())
            }
            SettingsSource::UserConfig(path) => write!(f, "{}", path.display()),
            SettingsSource::BuiltIn => write!(f, "built-in defaults"),
        }
    }
}

/// Contents of the settings file. Absent keys keep the built-in values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub container_names: Option<Vec<String>>,
    pub templates: Option<Vec<TemplateSetting>>,
}

/// One `templates` entry: a bare pattern, or a pattern with its timezone
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TemplateSetting {
    Pattern(String),
    WithOffset(OffsetTemplate),
}

/// `{ pattern = "...", utc_offset = "+02:00" }`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetTemplate {
    pub pattern: String,
    pub utc_offset: String,
}

impl TemplateSetting {
    pub fn pattern(&self) -> &str {
        match self {
            TemplateSetting::Pattern(pattern) => pattern,
            TemplateSetting::WithOffset(entry) => &entry.pattern,
        }
    }

    fn to_template(&self) -> Result<TimestampTemplate> {
        let pattern = self.pattern();
        let template = TimestampTemplate::new(pattern)
            .with_context(|| format!("Invalid timestamp template '{pattern}'"))?;

        match self {
            TemplateSetting::Pattern(_) => Ok(template),
            TemplateSetting::WithOffset(entry) => {
                let offset: FixedOffset = entry.utc_offset.parse().with_context(|| {
                    format!("Invalid utc_offset '{}' for template '{pattern}'", entry.utc_offset)
                })?;
                Ok(template.with_offset(offset))
            }
        }
    }
}

impl Settings {
    /// Reads settings from `source`
    pub fn load(source: &SettingsSource) -> Result<Self> {
        let Some(path) = source.path() else {
            return Ok(Self::default());
        };

        if !path.exists() && !source.is_required() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies these settings on top of the built-in conventions
    pub fn into_locator_config(self) -> Result<LocatorConfig> {
        let mut config = LocatorConfig::default();

        if let Some(names) = self.container_names {
            config.container_names = names;
        }

        if let Some(entries) = self.templates {
            config.templates = entries
                .iter()
                .map(TemplateSetting::to_template)
                .collect::<Result<Vec<_>>>()?;
        }

        Ok(config)
    }
}

/// `<config dir>/snaps/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Locates, reads and applies settings in one go
pub fn load_locator_config(explicit: Option<&Path>) -> Result<(LocatorConfig, SettingsSource)> {
    let source = SettingsSource::locate(explicit);
    let config = Settings::load(&source)?.into_locator_config()?;
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DEFAULT_CONTAINER_NAMES, DEFAULT_TIMESTAMP_TEMPLATES};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_empty_settings_keep_builtins() {
        let config = Settings::from_toml("").unwrap().into_locator_config().unwrap();
        assert_eq!(config.container_names, DEFAULT_CONTAINER_NAMES);
        assert_eq!(config.templates.len(), DEFAULT_TIMESTAMP_TEMPLATES.len());
    }

    #[test]
    fn test_settings_override_builtins() {
        let settings = Settings::from_toml(
            r#"
container_names = ["@snapshots"]
templates = ["*yyyyMMdd*"]
"#,
        )
        .unwrap();
        let config = settings.into_locator_config().unwrap();

        assert_eq!(config.container_names, vec!["@snapshots".to_string()]);
        assert_eq!(config.templates.len(), 1);
        assert_eq!(config.templates[0].to_string(), "*yyyyMMdd*");
    }

    #[test]
    fn test_template_offset_from_settings() {
        let settings = Settings::from_toml(
            r#"
templates = [
    "*yyyyMMdd*",
    { pattern = "*yyyy-MM-dd_HH.mm.ss*", utc_offset = "+02:00" },
]
"#,
        )
        .unwrap();
        let config = settings.into_locator_config().unwrap();

        assert!(config.templates[0].is_utc());
        assert_eq!(
            config.templates[1].offset(),
            FixedOffset::east_opt(2 * 3600).unwrap()
        );
        assert_eq!(config.templates[1].to_string(), "*yyyy-MM-dd_HH.mm.ss*");
        assert_eq!(
            config.templates[1].extract("daily-2026-06-01_10.30.00"),
            Some(Utc.with_ymd_and_hms(2026, 6, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_bad_offset_is_reported() {
        let settings = Settings::from_toml(
            r#"templates = [{ pattern = "yyyy-MM-dd", utc_offset = "CEST" }]"#,
        )
        .unwrap();
        let err = format!("{:#}", settings.into_locator_config().unwrap_err());
        assert!(err.contains("CEST"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Settings::from_toml("containers = [\".snap\"]").is_err());
        assert!(Settings::from_toml(
            r#"templates = [{ pattern = "yyyy-MM-dd", offset = "+02:00" }]"#
        )
        .is_err());
    }

    #[test]
    fn test_bad_template_is_reported() {
        let settings = Settings {
            templates: Some(vec![TemplateSetting::Pattern("*snapshot-yyyy*".to_string())]),
            ..Settings::default()
        };
        let err = settings.into_locator_config().unwrap_err();
        assert!(err.to_string().contains("*snapshot-yyyy*"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let source = SettingsSource::locate(Some(&missing));

        assert_eq!(source, SettingsSource::CommandLine(missing.clone()));
        assert!(Settings::load(&source).is_err());
    }

    #[test]
    fn test_missing_default_file_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let source = SettingsSource::UserConfig(temp_dir.path().join("config.toml"));
        assert_eq!(Settings::load(&source).unwrap(), Settings::default());
        assert_eq!(Settings::load(&SettingsSource::BuiltIn).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "container_names = [\".snapshots\"]\n").unwrap();

        let (config, source) = load_locator_config(Some(&path)).unwrap();
        assert_eq!(source.path(), Some(path.as_path()));
        assert_eq!(config.container_names, vec![".snapshots".to_string()]);
    }
}
