//! Logs panel component
//!
//! Displays entries from the shared tracing log buffer. Follows the tail
//! until the user scrolls back; `End` resumes following.

use crate::logging::{LogBuffer, LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::Focus;
use crate::tui::traits::{Component, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Lines moved per PageUp/PageDown
const PAGE: usize = 5;

pub struct LogsPanel {
    buffer: LogBuffer,
    /// Lines scrolled back from the newest entry (0 = following)
    scroll_back: usize,
}

impl LogsPanel {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            scroll_back: 0,
        }
    }

    pub fn is_following(&self) -> bool {
        self.scroll_back == 0
    }

    fn scroll_up(&mut self, lines: usize) {
        let max = self.buffer.len().saturating_sub(1);
        self.scroll_back = (self.scroll_back + lines).min(max);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Entries that fit a viewport of `height` lines at the current offset
    fn visible<'a>(&self, entries: &'a [LogEntry], height: usize) -> &'a [LogEntry] {
        let end = entries.len().saturating_sub(self.scroll_back);
        let start = end.saturating_sub(height);
        &entries[start..end]
    }
}

fn level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

impl Component for LogsPanel {
    fn id(&self) -> Focus {
        Focus::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let entries = self.buffer.get_all();

        let height = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .visible(&entries, height)
            .iter()
            .map(|entry| ListItem::new(entry.format_line()).style(level_style(entry.level, theme)))
            .collect();

        let title = if self.is_following() {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.panel_border(self.id(), focused)))
                .title(title),
        );

        f.render_widget(list, area);
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::PageDown => self.scroll_down(PAGE),
            KeyCode::Home => self.scroll_up(usize::MAX / 2),
            KeyCode::End => self.scroll_back = 0,
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  End:follow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn buffer_with(n: usize) -> LogBuffer {
        let buffer = LogBuffer::new();
        for i in 0..n {
            buffer.add(LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                target: "catalog".to_string(),
                message: format!("line {}", i),
            });
        }
        buffer
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn follows_tail_by_default() {
        let buffer = buffer_with(10);
        let panel = LogsPanel::new(buffer.clone());
        let entries = buffer.get_all();

        let visible = panel.visible(&entries, 3);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[2].message, "line 9");
    }

    #[test]
    fn scrolling_back_and_resuming() {
        let buffer = buffer_with(10);
        let mut panel = LogsPanel::new(buffer.clone());
        let entries = buffer.get_all();

        panel.handle_key(key(KeyCode::Up));
        panel.handle_key(key(KeyCode::Up));
        assert!(!panel.is_following());
        assert_eq!(panel.visible(&entries, 3)[2].message, "line 7");

        // Can't scroll past the oldest entry
        panel.handle_key(key(KeyCode::Home));
        assert_eq!(panel.visible(&entries, 3).len(), 1);
        assert_eq!(panel.visible(&entries, 3)[0].message, "line 0");

        panel.handle_key(key(KeyCode::End));
        assert!(panel.is_following());
    }
}
