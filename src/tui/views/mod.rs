// Frame composition
//
// ┌ title bar ────────────────────────────────┐
// │ product list                              │
// ├ create form ─────────┬ edit form ─────────┤
// ├ system logs (optional) ───────────────────┤
// └ status bar ───────────────────────────────┘
//
// Compact terminals stack the two forms. Modals and the toast draw last.

mod modal;

use crate::tui::app::App;
use crate::tui::components::{status_bar, title_bar};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

/// Rows a form needs: borders, selector or spacer, three fields, hint
const FORM_HEIGHT: u16 = 7;
const LOGS_HEIGHT: u16 = 8;

/// Draw the whole UI
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let theme = &app.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        area,
    );

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if app.logs_panel.is_some() {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let ctx = RenderContext::new(
        theme,
        app.focus,
        app.store().state(),
        Breakpoint::from_width(area.width),
    );

    title_bar::render(f, chunks[0], app);
    draw_main(f, chunks[1], app, &ctx);
    if let Some(logs) = &app.logs_panel {
        logs.render(f, chunks[2], &ctx);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if let Some(active) = &app.modal {
        modal::render(f, active, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, theme);
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &App, ctx: &RenderContext) {
    if ctx.breakpoint.forms_side_by_side() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(FORM_HEIGHT)])
            .split(area);
        let forms = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        app.product_list.render(f, rows[0], ctx);
        app.create_form.render(f, forms[0], ctx);
        app.edit_form.render(f, forms[1], ctx);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Length(FORM_HEIGHT),
            ])
            .split(area);

        app.product_list.render(f, rows[0], ctx);
        app.create_form.render(f, rows[1], ctx);
        app.edit_form.render(f, rows[2], ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Action, ProductDraft, ProductId, SequentialIds, Store};
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::tui::modal::Modal;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app_with_products(titles: &[&str]) -> App {
        let mut store = Store::new();
        for (i, title) in titles.iter().enumerate() {
            store.dispatch(Action::add(
                ProductDraft::new(*title, format!("{} description", title), "12.50")
                    .into_product(ProductId(i as u64 + 1), "https://via.placeholder.com/150"),
            ));
        }
        App::new(store, SequentialIds::new(), &Config::default(), LogBuffer::new())
    }

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn table_header(screen: &str) -> &str {
        screen
            .lines()
            .find(|l| l.contains("ID") && l.contains("Price"))
            .unwrap_or_else(|| panic!("no table header in:\n{}", screen))
    }

    #[test]
    fn renders_all_panels_on_wide_terminal() {
        let app = app_with_products(&["Lamp", "Desk"]);
        let screen = text(&render(&app, 140, 40));

        assert!(screen.contains("Product Catalog"));
        assert!(screen.contains("Product List (2)"));
        assert!(screen.contains("Create Product"));
        assert!(screen.contains("Edit Product"));
        assert!(screen.contains("System Logs"));
        assert!(screen.contains("Lamp"));
        assert!(screen.contains("rev 2"));

        let header = table_header(&screen);
        assert!(header.contains("Description"));
        assert!(header.contains("Thumbnail"));
    }

    #[test]
    fn narrow_terminal_drops_columns() {
        let app = app_with_products(&["Lamp"]);
        let screen = text(&render(&app, 50, 40));

        assert!(screen.contains("Lamp"));

        let header = table_header(&screen);
        assert!(!header.contains("Description"));
        assert!(!header.contains("Thumbnail"));
    }

    #[test]
    fn empty_catalog_shows_hint() {
        let app = app_with_products(&[]);
        let screen = text(&render(&app, 100, 30));
        assert!(screen.contains("No products yet"));
    }

    #[test]
    fn detail_modal_shows_product() {
        let mut app = app_with_products(&["Lamp"]);
        app.modal = Some(Modal::detail(ProductId(1)));
        let screen = text(&render(&app, 100, 30));

        assert!(screen.contains("Product #1"));
        assert!(screen.contains("Lamp description"));
        assert!(screen.contains("12.50"));
    }

    #[test]
    fn help_modal_lists_keys() {
        let mut app = app_with_products(&[]);
        app.modal = Some(Modal::help());
        let screen = text(&render(&app, 100, 40));
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Delete selected product"));
    }

    #[test]
    fn logs_panel_can_be_disabled() {
        let mut config = Config::default();
        config.features.logs_panel = false;
        let app = App::new(Store::new(), SequentialIds::new(), &config, LogBuffer::new());
        let screen = text(&render(&app, 100, 30));
        assert!(!screen.contains("System Logs"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app_with_products(&["Lamp"]);
        render(&app, 10, 5);
    }
}
