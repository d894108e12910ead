// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit semantic color definitions
// - Theme: resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/catalog/themes/*.toml
// 2. Bundled themes (compiled in, extracted on first run)
// 3. Hardcoded fallback

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::tui::app::Focus;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Element Colors ───────────────────────────────────
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused

    // ─── Feedback Colors ─────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // ─── Panel Identity Colors ───────────────────────────────
    pub panel_list: Color,
    pub panel_create: Color,
    pub panel_edit: Color,
    pub panel_logs: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name, falling back to the hardcoded default
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        tracing::debug!("Theme {:?} not found, using fallback", name);
        Self::hardcoded_default(config)
    }

    /// Load from an external TOML file or a bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        if let Some(themes_dir) = Self::themes_dir() {
            for stem in [name, normalized.as_str()] {
                let path = themes_dir.join(format!("{}.toml", stem));
                let Ok(contents) = std::fs::read_to_string(&path) else {
                    continue;
                };
                match TomlTheme::parse(&contents) {
                    Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                    Err(e) => tracing::warn!("Ignoring broken theme {}: {}", path.display(), e),
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::parse(t.content).ok())
            .map(|toml_theme| Self::from_toml(toml_theme, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("catalog").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        Self {
            name: toml.meta.name.clone(),

            status_bar: parse(&toml.ui.status_bar),
            title: parse(&toml.ui.title),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),

            success: parse(&toml.status.success),
            warning: parse(&toml.status.warning),
            error: parse(&toml.status.error),

            panel_list: parse(&toml.panels.list),
            panel_create: parse(&toml.panels.create),
            panel_edit: parse(&toml.panels.edit),
            panel_logs: parse(&toml.panels.logs),

            background,
            foreground: parse(&toml.ui.foreground),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),

            muted: toml
                .ui
                .muted
                .as_deref()
                .map(parse)
                .unwrap_or_else(|| parse(&toml.ui.border)),

            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        // One Half Dark colors
        let background = if config.use_theme_background {
            Color::Rgb(40, 44, 52)
        } else {
            Color::Reset
        };

        Self {
            name: "One Half Dark (Fallback)".to_string(),

            status_bar: Color::Rgb(220, 223, 228),
            title: Color::Rgb(86, 182, 194),
            border: Color::Rgb(220, 223, 228),
            highlight: Color::Rgb(229, 192, 123),

            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),

            panel_list: Color::Rgb(97, 175, 239),
            panel_create: Color::Rgb(152, 195, 121),
            panel_edit: Color::Rgb(198, 120, 221),
            panel_logs: Color::Rgb(86, 182, 194),

            background,
            foreground: Color::Rgb(220, 223, 228),
            selection: Color::Rgb(71, 78, 93),
            selection_fg: Color::Rgb(220, 223, 228),

            muted: Color::Rgb(130, 137, 151),
            border_type: BorderType::Plain,
        }
    }

    /// Get border color for a panel based on focus state
    pub fn panel_border(&self, panel: Focus, focused: bool) -> Color {
        if !focused {
            return self.border;
        }
        match panel {
            Focus::List => self.panel_list,
            Focus::Create => self.panel_create,
            Focus::Edit => self.panel_edit,
            Focus::Logs => self.panel_logs,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::list_bundled_themes().collect();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    // Marker file so user deletions stick
    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back() {
        let theme = Theme::by_name("Definitely Not A Theme");
        assert_eq!(theme.name, "One Half Dark (Fallback)");
    }

    #[test]
    fn bundled_theme_loads_by_display_name() {
        let theme = Theme::by_name_with_config(
            "Solarized Light",
            &ThemeConfig {
                use_theme_background: false,
            },
        );
        assert_eq!(theme.name, "Solarized Light");
        assert_eq!(theme.background, Color::Reset);
    }

    #[test]
    fn bundled_names_are_listed() {
        let names = Theme::list_available();
        assert!(names.iter().any(|n| n == "Catalog Dark"));
        assert!(names.iter().any(|n| n == "Nord"));
    }
}
