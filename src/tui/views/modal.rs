// Modal overlay rendering
//
// - Help modal: keyboard shortcuts
// - Detail modal: every field of one product, with copy hints

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Detail(id) => render_detail(f, app, *id),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block<'a>(app: &App, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight))
        .style(Style::default().bg(app.theme.background))
        .title(title)
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.panel_list);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Panels", header_style)),
        kb("Tab/Shift+Tab", "Cycle panel focus"),
        kb("F1 F2 F3 F4", "List, Create, Edit, Logs"),
        Line::raw(""),
        Line::from(Span::styled("  Product List", header_style)),
        kb("↑/↓, j/k", "Select product"),
        kb("Enter", "Show details"),
        kb("e", "Edit selected product"),
        kb("d, Delete", "Delete selected product"),
        kb("y / Y", "Copy as text / JSON"),
        Line::raw(""),
        Line::from(Span::styled("  Forms", header_style)),
        kb("↑/↓", "Previous / next field"),
        kb("Enter", "Next field, submit on last"),
        kb("Ctrl+S", "Submit"),
        kb("←/→", "Choose product (edit form)"),
        kb("Esc", "Cancel editing"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Next theme"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
    ]);

    let area = centered_rect(52, content.height() as u16 + 2, f.area());
    let help = Paragraph::new(content).block(modal_block(app, " Keyboard Shortcuts ".to_string()));

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn render_detail(f: &mut Frame, app: &App, id: crate::catalog::ProductId) {
    let label_style = Style::default().fg(app.theme.muted);
    let value_style = Style::default().fg(app.theme.foreground);

    let content = match app.product(id) {
        Some(product) => {
            let field = |label: &str, value: &str| -> Line {
                Line::from(vec![
                    Span::styled(format!(" {:<13}", label), label_style),
                    Span::styled(value.to_string(), value_style),
                ])
            };
            Text::from(vec![
                Line::raw(""),
                field("Title", &product.title),
                field("Description", &product.description),
                field("Price", &product.price),
                field("Thumbnail", &product.thumbnail),
                Line::raw(""),
                Line::styled(
                    " y: copy text   Y: copy JSON   Esc: close",
                    Style::default().fg(app.theme.muted),
                ),
            ])
        }
        None => Text::from(Line::styled(
            " This product no longer exists.",
            Style::default().fg(app.theme.warning),
        )),
    };

    let frame = f.area();
    let width = (frame.width * 7 / 10).max(40);
    let area = centered_rect(width, content.height() as u16 + 4, frame);

    let detail = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(modal_block(app, format!(" Product #{} ", id)));

    f.render_widget(Clear, area);
    f.render_widget(detail, area);
}
