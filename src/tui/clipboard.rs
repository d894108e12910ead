//! Clipboard helper for copying products to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use crate::catalog::Product;
use anyhow::{Context, Result};
use arboard::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    /// Labelled multi-line text
    Readable,
    /// Pretty-printed JSON, same shape as `catalog apply` output
    Json,
}

impl CopyFormat {
    pub fn label(self) -> &'static str {
        match self {
            CopyFormat::Readable => "text",
            CopyFormat::Json => "JSON",
        }
    }

    pub fn render(self, product: &Product) -> Result<String> {
        match self {
            CopyFormat::Readable => Ok(product.to_readable()),
            CopyFormat::Json => {
                serde_json::to_string_pretty(product).context("Failed to serialize product")
            }
        }
    }
}

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

pub fn copy_product(product: &Product, format: CopyFormat) -> Result<()> {
    copy_to_clipboard(&format.render(product)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductDraft, ProductId};

    #[test]
    fn json_format_is_the_wire_shape() {
        let product = ProductDraft::new("Lamp", "Bright", "10").into_product(ProductId(3), "thumb");
        let json = CopyFormat::Json.render(&product).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["price"], "10");
    }

    #[test]
    fn readable_format_names_every_field() {
        let product = ProductDraft::new("Lamp", "Bright", "10").into_product(ProductId(3), "thumb");
        let text = CopyFormat::Readable.render(&product).unwrap();
        assert!(text.starts_with("Product #3"));
        assert!(text.contains("Thumbnail: thumb"));
    }
}
