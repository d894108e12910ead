//! Single-line text input with a cursor
//!
//! The cursor is a char index, never a byte offset, so multi-byte input
//! edits cleanly. Rendering scrolls horizontally to keep the cursor visible.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Which characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharFilter {
    Any,
    /// Digits, one decimal point and a leading minus
    Numeric,
}

#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    filter: CharFilter,
}

/// The slice of a field that fits its box, split around the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleText {
    pub before: String,
    /// Character under the cursor, `None` when the cursor sits at the end
    pub at_cursor: Option<char>,
    pub after: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::with_filter(CharFilter::Any)
    }

    pub fn numeric() -> Self {
        Self::with_filter(CharFilter::Numeric)
    }

    fn with_filter(filter: CharFilter) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            filter,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and park the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn accepts(&self, c: char) -> bool {
        match self.filter {
            CharFilter::Any => !c.is_control(),
            CharFilter::Numeric => {
                // Nothing may precede a leading minus
                if self.cursor == 0 && self.value.starts_with('-') {
                    return false;
                }
                match c {
                    '0'..='9' => true,
                    '.' => !self.value.contains('.'),
                    '-' => self.cursor == 0,
                    _ => false,
                }
            }
        }
    }

    /// Insert at the cursor. Returns false if the filter refused it.
    pub fn insert(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Apply an editing key. Returns true if the key belongs to the field,
    /// even when a filtered character was dropped.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_left();
                true
            }
            KeyCode::Right => {
                self.move_right();
                true
            }
            KeyCode::Home => {
                self.home();
                true
            }
            KeyCode::End => {
                self.end();
                true
            }
            _ => false,
        }
    }

    /// Window of the value that fits in `width` columns with the cursor visible
    pub fn visible(&self, width: usize) -> VisibleText {
        let chars: Vec<char> = self.value.chars().collect();
        let cell = |c: char| c.width().unwrap_or(0);
        let width = width.max(1);

        let at_cursor = chars.get(self.cursor).copied();
        let mut used = at_cursor.map(cell).unwrap_or(1).max(1);

        let mut start = self.cursor;
        while start > 0 && used + cell(chars[start - 1]) <= width {
            start -= 1;
            used += cell(chars[start]);
        }

        let mut end = (self.cursor + 1).min(chars.len());
        while end < chars.len() && used + cell(chars[end]) <= width {
            used += cell(chars[end]);
            end += 1;
        }

        VisibleText {
            before: chars[start..self.cursor].iter().collect(),
            at_cursor,
            after: chars[(self.cursor + 1).min(chars.len())..end.max(self.cursor).min(chars.len())]
                .iter()
                .collect(),
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(&press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn edits_at_cursor() {
        let mut input = TextInput::new();
        type_str(&mut input, "helo");
        input.move_left();
        input.insert('l');
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 4);

        input.home();
        input.delete();
        assert_eq!(input.value(), "ello");

        input.end();
        input.backspace();
        assert_eq!(input.value(), "ell");
    }

    #[test]
    fn multibyte_characters_edit_cleanly() {
        let mut input = TextInput::new();
        type_str(&mut input, "café");
        input.backspace();
        input.insert('e');
        assert_eq!(input.value(), "cafe");

        input.set_value("日本語");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "日語");
    }

    #[test]
    fn numeric_filter() {
        let mut input = TextInput::numeric();
        type_str(&mut input, "-12a.5.0x");
        assert_eq!(input.value(), "-12.50");

        // Nothing in front of the minus, no second minus
        input.home();
        assert!(!input.insert('9'));
        assert!(!input.insert('-'));
        input.end();
        assert!(!input.insert('-'));
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut input = TextInput::new();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!input.handle_key(&ctrl_s));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn blank_means_whitespace_only() {
        let mut input = TextInput::new();
        input.set_value("   ");
        assert!(input.is_blank());
        input.set_value(" x ");
        assert!(!input.is_blank());
    }

    #[test]
    fn visible_window_follows_cursor() {
        let mut input = TextInput::new();
        input.set_value("abcdefghij");

        // Cursor at end: last chars plus the cursor cell
        let view = input.visible(5);
        assert_eq!(view.before, "ghij");
        assert_eq!(view.at_cursor, None);
        assert_eq!(view.after, "");

        input.home();
        let view = input.visible(5);
        assert_eq!(view.before, "");
        assert_eq!(view.at_cursor, Some('a'));
        assert_eq!(view.after, "bcde");
    }

    #[test]
    fn visible_window_counts_wide_chars() {
        let mut input = TextInput::new();
        input.set_value("日本語");
        let view = input.visible(5);
        // Two wide chars (4 cols) plus the 1-col cursor
        assert_eq!(view.before, "本語");
    }
}
