//! Configuration for the catalog editor
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/catalog/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod features;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use features::{FileFeatures, Features};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "Catalog Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Catalog Dark", "Nord", "Solarized Light" or an external theme
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Thumbnail URL stamped on every created or updated product
    pub placeholder_thumbnail: String,

    /// Start with sample products in the catalog
    pub demo_mode: bool,

    /// Feature flags for optional panels
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            placeholder_thumbnail: crate::catalog::DEFAULT_THUMBNAIL.to_string(),
            demo_mode: false,
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub placeholder_thumbnail: Option<String>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/catalog/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("catalog").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        // Config is optional - a read-only home directory is not fatal
        if let Err(e) = Self::default().write_to(&path) {
            tracing::debug!("Could not write default config: {:#}", e);
        }
    }

    /// Write this config to `path` in the canonical TOML format
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load a config file. A missing file yields defaults; a broken one is an error.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge file settings with environment lookups
    ///
    /// `env` is injected so precedence can be tested without touching the
    /// process environment.
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("CATALOG_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Use theme background: file > default
        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        // Placeholder thumbnail: env > file > default
        let placeholder_thumbnail = env("CATALOG_THUMBNAIL")
            .filter(|v| !v.trim().is_empty())
            .or(file.placeholder_thumbnail)
            .unwrap_or(defaults.placeholder_thumbnail);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("CATALOG_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            theme,
            use_theme_background,
            placeholder_thumbnail,
            demo_mode,
            features: Features::from_file(file.features),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
