//! Edit form: pick an existing product, change it, ask for the update
//!
//! The selector row sits above the three fields. The form keeps its own
//! copy of the product list, refreshed by `sync` whenever the catalog
//! changes, so key handling never needs the store.

use super::form::{FieldKey, FormError, FormFields};
use crate::catalog::{Catalog, Product, ProductDraft, ProductId};
use crate::tui::app::Focus;
use crate::tui::traits::{Component, Handled, Intent, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct EditForm {
    fields: FormFields,
    selected: Option<ProductId>,
    options: Vec<Product>,
    /// Cursor is on the selector row rather than a field
    on_selector: bool,
}

impl EditForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(),
            selected: None,
            options: Vec::new(),
            on_selector: true,
        }
    }

    pub fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Refresh the selectable products from the latest snapshot
    ///
    /// A selection whose product is gone is dropped along with its fields.
    pub fn sync(&mut self, catalog: &Catalog) {
        self.options = catalog.products().to_vec();

        if let Some(id) = self.selected {
            if !catalog.contains(id) {
                tracing::debug!(id = id.get(), "edited product removed, clearing edit form");
                self.reset();
            }
        }
    }

    /// Select a product by id and copy its fields in
    pub fn select(&mut self, id: ProductId) -> bool {
        let Some(product) = self.options.iter().find(|p| p.id == id) else {
            return false;
        };
        self.fields.load(&ProductDraft::from(product));
        self.selected = Some(id);
        self.on_selector = false;
        true
    }

    fn reset(&mut self) {
        self.selected = None;
        self.fields.clear();
        self.on_selector = true;
    }

    fn cycle(&mut self, forward: bool) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        let current = self
            .selected
            .and_then(|id| self.options.iter().position(|p| p.id == id));

        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };

        let id = self.options[next].id;
        self.select(id);
        self.on_selector = true;
    }

    fn submit(&mut self) -> Handled {
        let Some(id) = self.selected else {
            return Intent::Rejected(FormError::NoSelection).into();
        };
        match self.fields.validate() {
            Ok(draft) => {
                self.reset();
                Intent::Update(id, draft).into()
            }
            Err(e) => {
                self.on_selector = false;
                Intent::Rejected(e).into()
            }
        }
    }

    fn handle_selector_key(&mut self, key: &KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left => {
                self.cycle(false);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cycle(true);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Enter if self.selected.is_some() => {
                self.on_selector = false;
                Handled::Yes
            }
            KeyCode::Esc if self.selected.is_some() => {
                self.reset();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn selector_line(&self, ctx: &RenderContext, active: bool) -> Line<'static> {
        let theme = ctx.theme;
        let label_style = if active {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let marker = if active { "›" } else { " " };

        let choice = match self
            .selected
            .and_then(|id| self.options.iter().find(|p| p.id == id))
        {
            Some(product) => Span::styled(
                format!("◀ #{} {} ▶", product.id, product.title),
                Style::default().fg(theme.foreground),
            ),
            None if self.options.is_empty() => {
                Span::styled("No products yet", Style::default().fg(theme.muted))
            }
            None => Span::styled("◀ Select a product ▶", Style::default().fg(theme.muted)),
        };

        Line::from(vec![
            Span::styled(format!("{}{:<12}", marker, "Product"), label_style),
            choice,
        ])
    }
}

impl Default for EditForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EditForm {
    fn id(&self) -> Focus {
        Focus::Edit
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.panel_border(self.id(), focused)))
            .title(" Edit Product ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let selector = Paragraph::new(self.selector_line(ctx, focused && self.on_selector));
        f.render_widget(selector, Rect::new(inner.x, inner.y, inner.width, 1));

        let fields_area = Rect::new(
            inner.x,
            inner.y + 1,
            inner.width,
            inner.height.saturating_sub(1),
        );
        self.fields.render(
            f,
            fields_area,
            theme,
            focused && !self.on_selector,
            self.selected.is_some(),
        );

        if focused && inner.height > 4 {
            let hint = if self.on_selector {
                " ←→: choose product   Enter: edit fields"
            } else {
                " Enter: next / save   Ctrl+S: save   Esc: cancel"
            };
            f.render_widget(
                Paragraph::new(Line::styled(hint, Style::default().fg(theme.muted))),
                Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
            );
        }
    }
}

impl Interactive for EditForm {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if self.on_selector || self.selected.is_none() {
            return self.handle_selector_key(&key);
        }

        if key.code == KeyCode::Esc {
            self.reset();
            return Handled::Yes;
        }

        match self.fields.handle_key(&key) {
            FieldKey::Submit => self.submit(),
            FieldKey::Consumed => Handled::Yes,
            FieldKey::ExitTop => {
                self.on_selector = true;
                Handled::Yes
            }
            FieldKey::Ignored => Handled::No,
        }
    }

    fn captures_text(&self) -> bool {
        !self.on_selector && self.selected.is_some()
    }

    fn focus_hint(&self) -> Option<&'static str> {
        if self.captures_text() {
            Some("type to edit  ↑↓:field  Enter:next/save  Ctrl+S:save  Esc:cancel")
        } else {
            Some("←→:choose product  Enter:edit fields")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{reduce, Action};
    use crate::tui::components::form::Field;
    use crossterm::event::KeyModifiers;

    fn product(id: u64, title: &str) -> Product {
        ProductDraft::new(title, format!("{} description", title), "10")
            .into_product(ProductId(id), "thumb")
    }

    fn catalog() -> Catalog {
        Catalog::from_products(vec![product(1, "Lamp"), product(2, "Desk")])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cycling_selects_and_loads_fields() {
        let mut form = EditForm::new();
        form.sync(&catalog());

        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.selected(), Some(ProductId(1)));
        assert_eq!(form.fields().draft().title, "Lamp");

        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.selected(), Some(ProductId(2)));

        // Wraps around
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.selected(), Some(ProductId(1)));
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.selected(), Some(ProductId(2)));
    }

    #[test]
    fn text_is_not_captured_without_selection() {
        let mut form = EditForm::new();
        form.sync(&catalog());
        assert!(!form.captures_text());
        assert_eq!(form.handle_key(key(KeyCode::Char('x'))), Handled::No);
    }

    #[test]
    fn edit_and_submit_emits_update() {
        let mut form = EditForm::new();
        form.sync(&catalog());
        assert!(form.select(ProductId(2)));
        assert!(form.captures_text());

        form.handle_key(key(KeyCode::End));
        form.handle_key(key(KeyCode::Char('!')));
        let result = form.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(
            result,
            Handled::Intent(Intent::Update(
                ProductId(2),
                ProductDraft::new("Desk!", "Desk description", "10")
            ))
        );
        assert_eq!(form.selected(), None);
        assert_eq!(form.fields().draft(), ProductDraft::default());
    }

    #[test]
    fn blank_field_rejects_update() {
        let mut form = EditForm::new();
        form.sync(&catalog());
        form.select(ProductId(1));

        for _ in 0.."Lamp".len() {
            form.handle_key(key(KeyCode::Backspace));
        }
        let result = form.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(
            result,
            Handled::Intent(Intent::Rejected(FormError::Missing(Field::Title)))
        );
        assert_eq!(form.selected(), Some(ProductId(1)));
    }

    #[test]
    fn deleted_selection_is_cleared_on_sync() {
        let mut form = EditForm::new();
        let state = catalog();
        form.sync(&state);
        form.select(ProductId(1));

        let state = reduce(&state, &Action::delete(1));
        form.sync(&state);

        assert_eq!(form.selected(), None);
        assert_eq!(form.fields().draft(), ProductDraft::default());
    }

    #[test]
    fn up_from_title_returns_to_selector() {
        let mut form = EditForm::new();
        form.sync(&catalog());
        form.select(ProductId(1));

        form.handle_key(key(KeyCode::Up));
        assert!(!form.captures_text());
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.selected(), Some(ProductId(2)));
    }

    #[test]
    fn esc_cancels_editing() {
        let mut form = EditForm::new();
        form.sync(&catalog());
        form.select(ProductId(1));
        assert_eq!(form.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert_eq!(form.selected(), None);
    }
}
