// Status bar component
//
// Renders uptime, catalog size, store revision, the last dispatched action
// and keybind hints for the focused panel.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals get the counters only; wider ones add the last action
/// and the focus hint.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let store = app.store();
    let bp = Breakpoint::from_width(area.width);

    let last = match &app.last_action {
        Some(action) => match action.target {
            Some(id) => format!("{} #{}", action.kind, id),
            None => action.kind.to_string(),
        },
        None => "-".to_string(),
    };

    let status_text = if !bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ 📦 {} │ r{}",
            app.uptime(),
            store.state().len(),
            store.revision()
        )
    } else {
        let mut text = format!(
            " {} │ 📦 {} │ rev {} │ last: {}",
            app.uptime(),
            store.state().len(),
            store.revision(),
            last
        );
        if bp.at_least(Breakpoint::Wide) {
            if let Some(hint) = app.focus_hint() {
                text.push_str(" │ ");
                text.push_str(hint);
            }
        }
        text
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
