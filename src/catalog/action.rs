// Requests consumed by the store
//
// Wire form (JSON Lines scripts, trace output):
//   {"type": "ADD_PRODUCT",    "payload": {"id": 1, "title": ...}}
//   {"type": "UPDATE_PRODUCT", "payload": {"id": 1, "title": ...}}
//   {"type": "DELETE_PRODUCT", "payload": 1}
// Any other type string decodes to `Action::Unknown`.

use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

pub const ADD_PRODUCT: &str = "ADD_PRODUCT";
pub const UPDATE_PRODUCT: &str = "UPDATE_PRODUCT";
pub const DELETE_PRODUCT: &str = "DELETE_PRODUCT";
pub const UNKNOWN: &str = "UNKNOWN";

/// A typed description of a desired state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", try_from = "RawAction")]
pub enum Action {
    #[serde(rename = "ADD_PRODUCT")]
    Add(Product),
    #[serde(rename = "UPDATE_PRODUCT")]
    Update(Product),
    #[serde(rename = "DELETE_PRODUCT")]
    Delete(ProductId),
    /// Request type the store does not recognize; reduces to the same state
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Action {
    pub fn add(product: Product) -> Self {
        Self::Add(product)
    }

    pub fn update(product: Product) -> Self {
        Self::Update(product)
    }

    pub fn delete(id: impl Into<ProductId>) -> Self {
        Self::Delete(id.into())
    }

    /// Wire name, used for logging and the status bar
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add(_) => ADD_PRODUCT,
            Self::Update(_) => UPDATE_PRODUCT,
            Self::Delete(_) => DELETE_PRODUCT,
            Self::Unknown => UNKNOWN,
        }
    }

    /// The product id this action targets, if any
    pub fn target(&self) -> Option<ProductId> {
        match self {
            Self::Add(p) | Self::Update(p) => Some(p.id),
            Self::Delete(id) => Some(*id),
            Self::Unknown => None,
        }
    }
}

/// Loose decoding layer: accept any type string, decide the payload shape after
#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl TryFrom<RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            ADD_PRODUCT => serde_json::from_value(raw.payload).map(Action::Add),
            UPDATE_PRODUCT => serde_json::from_value(raw.payload).map(Action::Update),
            DELETE_PRODUCT => serde_json::from_value(raw.payload).map(Action::Delete),
            _ => Ok(Action::Unknown),
        }
    }
}
