//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/catalog/themes/ on first run.
//! Users can then modify them freely.

mod catalog_dark;
mod nord;
mod solarized_light;

pub use catalog_dark::THEME as CATALOG_DARK;
pub use nord::THEME as NORD;
pub use solarized_light::THEME as SOLARIZED_LIGHT;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Catalog_Dark.toml",
        content: CATALOG_DARK,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: NORD,
    },
    BundledTheme {
        filename: "Solarized_Light.toml",
        content: SOLARIZED_LIGHT,
    },
];

/// Display names of bundled themes (underscores become spaces)
pub fn list_bundled_themes() -> impl Iterator<Item = String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
}
