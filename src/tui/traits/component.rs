//! Core component trait
//!
//! Every panel that can be rendered implements `Component`.

use crate::catalog::Catalog;
use crate::theme::Theme;
use crate::tui::app::Focus;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components read the catalog snapshot from here instead of reaching
/// into App, so rendering has no side effects.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which panel currently has focus
    pub focus: Focus,

    /// Latest catalog snapshot
    pub catalog: &'a Catalog,

    /// Width class of the whole terminal
    pub breakpoint: Breakpoint,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: Focus, catalog: &'a Catalog, breakpoint: Breakpoint) -> Self {
        Self {
            theme,
            focus,
            catalog,
            breakpoint,
        }
    }

    /// Check if a panel is currently focused
    pub fn is_focused(&self, id: Focus) -> bool {
        self.focus == id
    }
}

/// Base trait for all panels
pub trait Component {
    /// Which focus slot this component occupies
    fn id(&self) -> Focus;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
