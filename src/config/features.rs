//! Feature flags configuration
//!
//! Optional UI panels (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional panels
#[derive(Debug, Clone)]
pub struct Features {
    /// System logs panel below the forms
    pub logs_panel: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self { logs_panel: true }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub logs_panel: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            logs_panel: file.logs_panel.unwrap_or(true),
        }
    }
}
