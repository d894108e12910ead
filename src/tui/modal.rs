// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::catalog::ProductId;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Copy the product as readable text
    CopyReadable,
    /// Copy the product as JSON
    CopyJson,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Full view of one product
    Detail(ProductId),
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn detail(id: ProductId) -> Self {
        Modal::Detail(id)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::CopyReadable,
                KeyCode::Char('Y') => ModalAction::CopyJson,
                _ => ModalAction::None,
            },
        }
    }

    /// The product shown, if this is a detail modal
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Modal::Detail(id) => Some(*id),
            Modal::Help => None,
        }
    }
}
