// Title bar component
//
// Renders the app name, product count and the focused panel.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let count = app.store().state().len();
    let noun = if count == 1 { "product" } else { "products" };

    let title_text = format!(
        " 🛒 Product Catalog ──── {} {} ──── {}",
        count,
        noun,
        app.focus.name()
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
