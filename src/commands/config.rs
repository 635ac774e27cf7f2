//! Effective configuration display

use crate::core::{LocatorConfig, SettingsSource};

/// Describes the conventions in effect and where they came from
pub fn describe_config(config: &LocatorConfig, source: &SettingsSource) -> String {
    let mut lines = vec![format!("Settings: {source}"), String::new()];

    lines.push(format!("Container names ({}):", config.container_names.len()));
    for (i, name) in config.container_names.iter().enumerate() {
        lines.push(format!("   {}. {name}", i + 1));
    }

    lines.push(String::new());
    lines.push(format!("Timestamp templates ({}):", config.templates.len()));
    for (i, template) in config.templates.iter().enumerate() {
        if template.is_utc() {
            lines.push(format!("   {}. {template}", i + 1));
        } else {
            lines.push(format!("   {}. {template}  (UTC{})", i + 1, template.offset()));
        }
    }

    lines.join("\n")
}

/// Main handler for the config command
pub fn handle_config_command(config: &LocatorConfig, source: &SettingsSource) {
    println!("{}", describe_config(config, source));
}
