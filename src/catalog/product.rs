// Product entity and the user-editable draft the forms produce

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder image used for every created or updated product
pub const DEFAULT_THUMBNAIL: &str = "https://via.placeholder.com/150";

/// Unique product identifier
///
/// Serialized as a bare JSON number so action scripts read naturally:
/// `{"type": "DELETE_PRODUCT", "payload": 3}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Kept exactly as typed - no numeric coercion
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    #[serde(default = "default_thumbnail")]
    pub thumbnail: String,
}

fn default_thumbnail() -> String {
    DEFAULT_THUMBNAIL.to_string()
}

/// Scripts may carry the price as a JSON string or a bare number.
/// Either way it is stored as text.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Price::deserialize(deserializer)? {
        Price::Text(text) => text,
        Price::Number(number) => number.to_string(),
    })
}

impl Product {
    /// Human-readable multi-line rendering (clipboard, detail modal)
    pub fn to_readable(&self) -> String {
        format!(
            "Product #{}\nTitle: {}\nDescription: {}\nPrice: {}\nThumbnail: {}",
            self.id, self.title, self.description, self.price, self.thumbnail
        )
    }
}

/// The fields a user can type into a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price: price.into(),
        }
    }

    /// Complete the draft with an identity and thumbnail
    pub fn into_product(self, id: ProductId, thumbnail: impl Into<String>) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: thumbnail.into(),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
        }
    }
}
