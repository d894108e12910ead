//! Product list panel
//!
//! Table of every product in insertion order. Owns only the selection;
//! the rows come from the catalog snapshot in the render context.

use crate::catalog::{Catalog, Product, ProductId};
use crate::tui::app::Focus;
use crate::tui::traits::{Component, Handled, Intent, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub struct ProductList {
    /// Selected row (None when the catalog is empty)
    selected: Option<usize>,
    /// Ids of the rows, in table order
    ids: Vec<ProductId>,
}

impl ProductList {
    pub fn new() -> Self {
        Self {
            selected: None,
            ids: Vec::new(),
        }
    }

    /// Track the latest snapshot and keep the selection in range
    ///
    /// The selection follows the same row index, so deleting a product
    /// leaves the cursor on its successor.
    pub fn sync(&mut self, catalog: &Catalog) {
        self.ids = catalog.iter().map(|p| p.id).collect();
        self.selected = match (self.selected, self.ids.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.selected.and_then(|i| self.ids.get(i).copied())
    }

    /// Move the cursor onto a product
    pub fn select_id(&mut self, id: ProductId) {
        if let Some(i) = self.ids.iter().position(|p| *p == id) {
            self.selected = Some(i);
        }
    }

    fn select_previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    fn select_next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.ids.len().saturating_sub(1)));
        }
    }

    fn with_selected(&self, intent: fn(ProductId) -> Intent) -> Handled {
        match self.selected_id() {
            Some(id) => intent(id).into(),
            None => Handled::Yes,
        }
    }

    fn row<'a>(product: &'a Product, ctx: &RenderContext) -> Row<'a> {
        let mut cells = vec![
            Cell::from(product.id.to_string()),
            Cell::from(product.title.as_str()),
        ];
        if ctx.breakpoint.shows_description() {
            cells.push(Cell::from(product.description.as_str()));
        }
        cells.push(Cell::from(product.price.as_str()));
        if ctx.breakpoint.shows_thumbnail() {
            cells.push(Cell::from(product.thumbnail.as_str()).style(Style::default().fg(ctx.theme.muted)));
        }
        Row::new(cells)
    }

    fn columns(ctx: &RenderContext) -> (Vec<&'static str>, Vec<Constraint>) {
        let mut headers = vec!["ID", "Title"];
        let mut widths = vec![Constraint::Length(6), Constraint::Fill(2)];
        if ctx.breakpoint.shows_description() {
            headers.push("Description");
            widths.push(Constraint::Fill(3));
        }
        headers.push("Price");
        widths.push(Constraint::Length(10));
        if ctx.breakpoint.shows_thumbnail() {
            headers.push("Thumbnail");
            widths.push(Constraint::Fill(2));
        }
        (headers, widths)
    }
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProductList {
    fn id(&self) -> Focus {
        Focus::List
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.panel_border(self.id(), focused)))
            .title(format!(" Product List ({}) ", ctx.catalog.len()));

        if ctx.catalog.is_empty() {
            let empty = Paragraph::new(Line::styled(
                " No products yet. Press F2 to add one.",
                Style::default().fg(theme.muted),
            ))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let (headers, widths) = Self::columns(ctx);
        let header = Row::new(headers).style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        );
        let rows: Vec<Row> = ctx.catalog.iter().map(|p| Self::row(p, ctx)).collect();

        let highlight = if focused {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(theme.selection)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .style(Style::default().fg(theme.foreground))
            .row_highlight_style(highlight)
            .column_spacing(1)
            .block(block);

        let mut state = TableState::default().with_selected(self.selected);
        f.render_stateful_widget(table, area, &mut state);
    }
}

impl Interactive for ProductList {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if !self.ids.is_empty() {
                    self.selected = Some(0);
                }
                Handled::Yes
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.ids.len().checked_sub(1);
                Handled::Yes
            }
            KeyCode::Char('d') | KeyCode::Delete => self.with_selected(Intent::Delete),
            KeyCode::Enter => self.with_selected(Intent::Inspect),
            KeyCode::Char('e') => self.with_selected(Intent::Edit),
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Enter:details  e:edit  d:delete  y/Y:copy")
    }
}
