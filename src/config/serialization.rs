//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# catalog configuration

# Theme: Catalog Dark, Nord, Solarized Light
# External themes are read from ~/.config/catalog/themes/<name>.toml
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Thumbnail URL stamped on every created or updated product
placeholder_thumbnail = "{thumbnail}"

# Feature flags
[features]
logs_panel = {logs_panel}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = escape(&self.theme),
            use_bg = self.use_theme_background,
            thumbnail = escape(&self.placeholder_thumbnail),
            logs_panel = self.features.logs_panel,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
