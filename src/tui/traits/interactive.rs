//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to the focused component. Components never touch
//! the store; when a key press means "change the catalog" they hand back
//! an [`Intent`] and the App turns it into an action.

use super::Component;
use crate::catalog::{ProductDraft, ProductId};
use crate::tui::components::FormError;
use crossterm::event::KeyEvent;

/// Something a panel wants the App to do on its behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add a new product built from the draft
    Create(ProductDraft),
    /// Replace the product with this id
    Update(ProductId, ProductDraft),
    /// Remove the product with this id
    Delete(ProductId),
    /// Open the detail modal
    Inspect(ProductId),
    /// Load the product into the edit form and focus it
    Edit(ProductId),
    /// A submission was refused; tell the user
    Rejected(FormError),
}

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
    /// Event was consumed and asks the App to act
    Intent(Intent),
}

impl Handled {
    /// Check if the event was consumed
    pub fn was_handled(&self) -> bool {
        !matches!(self, Self::No)
    }
}

impl From<Intent> for Handled {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Modal (if open)
///    │
///    ▼
/// Focused form text field (printable characters)
///    │
///    ▼
/// App (global: Tab, F1-F4, q, ?, t, y/Y)
///    │
///    ▼
/// Focused Component ── Handled::Intent ──► App ──► Store::dispatch
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Whether printable characters should reach this component before
    /// global shortcuts like `q` and `?`
    fn captures_text(&self) -> bool {
        false
    }

    /// Keybind hints for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
