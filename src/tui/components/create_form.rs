//! Create form: fills in a draft and asks for it to be added

use super::form::{FieldKey, FormFields};
use crate::tui::app::Focus;
use crate::tui::traits::{Component, Handled, Intent, Interactive, RenderContext};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct CreateForm {
    fields: FormFields,
}

impl CreateForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    fn submit(&mut self) -> Handled {
        match self.fields.validate() {
            Ok(draft) => {
                self.fields.clear();
                Intent::Create(draft).into()
            }
            Err(e) => Intent::Rejected(e).into(),
        }
    }
}

impl Default for CreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CreateForm {
    fn id(&self) -> Focus {
        Focus::Create
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.panel_border(self.id(), focused)))
            .title(" Create Product ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        self.fields.render(f, inner, theme, focused, true);

        if focused && inner.height > 3 {
            let hint = Paragraph::new(Line::styled(
                " Enter: next / add   Ctrl+S: add",
                Style::default().fg(theme.muted),
            ));
            f.render_widget(
                hint,
                Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
            );
        }
    }
}

impl Interactive for CreateForm {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match self.fields.handle_key(&key) {
            FieldKey::Submit => self.submit(),
            FieldKey::Consumed => Handled::Yes,
            FieldKey::ExitTop | FieldKey::Ignored => Handled::No,
        }
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type to edit  ↑↓:field  Enter:next/add  Ctrl+S:add")
    }
}
