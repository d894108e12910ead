//! Shared field set for the create and edit forms
//!
//! Both forms collect the same three values and apply the same
//! required-field rule; only what happens on submit differs.

use super::text_input::TextInput;
use crate::catalog::ProductDraft;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::fmt;

/// Width of the label column, including the trailing space
const LABEL_WIDTH: u16 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Price,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Price];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Price => "Price",
        }
    }

    fn next(self) -> Option<Field> {
        match self {
            Field::Title => Some(Field::Description),
            Field::Description => Some(Field::Price),
            Field::Price => None,
        }
    }

    fn prev(self) -> Option<Field> {
        match self {
            Field::Title => None,
            Field::Description => Some(Field::Title),
            Field::Price => Some(Field::Description),
        }
    }
}

/// Why a form refused to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty after trimming
    Missing(Field),
    /// The edit form has no product selected
    NoSelection,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "{} is required", field.label()),
            FormError::NoSelection => write!(f, "Select a product first"),
        }
    }
}

impl std::error::Error for FormError {}

/// What a key did to the field set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// Consumed: text edit or move between fields
    Consumed,
    /// The user asked to submit
    Submit,
    /// Moved above the first field
    ExitTop,
    /// Not a form key
    Ignored,
}

/// Title, description and price inputs with one active field
#[derive(Debug, Clone)]
pub struct FormFields {
    title: TextInput,
    description: TextInput,
    price: TextInput,
    active: Field,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            title: TextInput::new(),
            description: TextInput::new(),
            price: TextInput::numeric(),
            active: Field::Title,
        }
    }

    pub fn active(&self) -> Field {
        self.active
    }

    pub fn focus(&mut self, field: Field) {
        self.active = field;
    }

    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Price => &self.price,
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
        }
    }

    /// Current values as typed
    pub fn draft(&self) -> ProductDraft {
        ProductDraft::new(self.title.value(), self.description.value(), self.price.value())
    }

    /// Copy a product's values into the fields
    pub fn load(&mut self, draft: &ProductDraft) {
        self.title.set_value(draft.title.clone());
        self.description.set_value(draft.description.clone());
        self.price.set_value(draft.price.clone());
        self.active = Field::Title;
    }

    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.input_mut(field).clear();
        }
        self.active = Field::Title;
    }

    /// Draft if every field is filled in, otherwise the first blank field
    ///
    /// On failure the blank field becomes active so the user lands on it.
    pub fn validate(&mut self) -> Result<ProductDraft, FormError> {
        if let Some(blank) = Field::ALL.into_iter().find(|f| self.input(*f).is_blank()) {
            self.active = blank;
            return Err(FormError::Missing(blank));
        }
        Ok(self.draft())
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> FieldKey {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return FieldKey::Submit;
        }

        match key.code {
            KeyCode::Enter => match self.active.next() {
                Some(next) => {
                    self.active = next;
                    FieldKey::Consumed
                }
                None => FieldKey::Submit,
            },
            KeyCode::Down => {
                if let Some(next) = self.active.next() {
                    self.active = next;
                }
                FieldKey::Consumed
            }
            KeyCode::Up => match self.active.prev() {
                Some(prev) => {
                    self.active = prev;
                    FieldKey::Consumed
                }
                None => FieldKey::ExitTop,
            },
            _ => {
                let active = self.active;
                if self.input_mut(active).handle_key(key) {
                    FieldKey::Consumed
                } else {
                    FieldKey::Ignored
                }
            }
        }
    }

    /// Render one row per field into `area`
    ///
    /// The cursor is drawn only when `focused`; `enabled == false` greys
    /// out the values.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool, enabled: bool) {
        let value_width = area.width.saturating_sub(LABEL_WIDTH) as usize;

        for (row, field) in Field::ALL.into_iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
            let active = focused && enabled && field == self.active;
            let line = field_line(field, self.input(field), value_width, theme, active, enabled);
            f.render_widget(Paragraph::new(line), row_area);
        }
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

fn field_line(
    field: Field,
    input: &TextInput,
    width: usize,
    theme: &Theme,
    active: bool,
    enabled: bool,
) -> Line<'static> {
    let label_style = if active {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    let marker = if active { "›" } else { " " };
    let label = Span::styled(
        format!("{}{:<width$}", marker, field.label(), width = LABEL_WIDTH as usize - 1),
        label_style,
    );

    if !enabled {
        return Line::from(vec![
            label,
            Span::styled(input.value().to_string(), Style::default().fg(theme.muted)),
        ]);
    }

    let value_style = Style::default().fg(theme.foreground);
    if !active {
        return Line::from(vec![
            label,
            Span::styled(input.value().to_string(), value_style),
        ]);
    }

    let view = input.visible(width);
    let cursor_style = Style::default()
        .fg(theme.selection_fg)
        .bg(theme.selection);
    Line::from(vec![
        label,
        Span::styled(view.before, value_style),
        Span::styled(view.at_cursor.unwrap_or(' ').to_string(), cursor_style),
        Span::styled(view.after, value_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fill(fields: &mut FormFields, title: &str, description: &str, price: &str) {
        fields.load(&ProductDraft::new(title, description, price));
    }

    #[test]
    fn enter_walks_fields_then_submits() {
        let mut fields = FormFields::new();
        assert_eq!(fields.handle_key(&key(KeyCode::Enter)), FieldKey::Consumed);
        assert_eq!(fields.active(), Field::Description);
        assert_eq!(fields.handle_key(&key(KeyCode::Enter)), FieldKey::Consumed);
        assert_eq!(fields.active(), Field::Price);
        assert_eq!(fields.handle_key(&key(KeyCode::Enter)), FieldKey::Submit);
    }

    #[test]
    fn ctrl_s_submits_from_any_field() {
        let mut fields = FormFields::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(fields.handle_key(&ctrl_s), FieldKey::Submit);
    }

    #[test]
    fn up_from_first_field_exits() {
        let mut fields = FormFields::new();
        assert_eq!(fields.handle_key(&key(KeyCode::Up)), FieldKey::ExitTop);
        fields.focus(Field::Price);
        assert_eq!(fields.handle_key(&key(KeyCode::Up)), FieldKey::Consumed);
        assert_eq!(fields.active(), Field::Description);
    }

    #[test]
    fn typing_goes_to_active_field() {
        let mut fields = FormFields::new();
        fields.handle_key(&key(KeyCode::Char('A')));
        fields.focus(Field::Price);
        fields.handle_key(&key(KeyCode::Char('9')));
        fields.handle_key(&key(KeyCode::Char('x')));

        let draft = fields.draft();
        assert_eq!(draft.title, "A");
        assert_eq!(draft.price, "9");
    }

    #[test]
    fn validation_points_at_first_blank_field() {
        let mut fields = FormFields::new();
        fill(&mut fields, "Lamp", "  ", "");
        fields.focus(Field::Price);

        assert_eq!(
            fields.validate(),
            Err(FormError::Missing(Field::Description))
        );
        assert_eq!(fields.active(), Field::Description);
    }

    #[test]
    fn validation_keeps_values_untrimmed() {
        let mut fields = FormFields::new();
        fill(&mut fields, " Lamp ", "Bright", "10");
        let draft = fields.validate().unwrap();
        assert_eq!(draft.title, " Lamp ");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FormError::Missing(Field::Price).to_string(),
            "Price is required"
        );
        assert_eq!(FormError::NoSelection.to_string(), "Select a product first");
    }
}
