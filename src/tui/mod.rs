// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Layered key routing into the App

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod traits;
pub mod views;

use crate::catalog::{SequentialIds, Store};
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use clipboard::CopyFormat;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::Modal;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether or not setup or the loop succeeded.
pub async fn run_tui(
    store: Store,
    ids: SequentialIds,
    config: &Config,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Raw mode is on and the alternate screen may be too
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let mut app = App::new(store, ids, config, log_buffer);
    tracing::info!(
        products = app.store().state().len(),
        theme = %app.theme.name,
        "catalog editor started"
    );

    let result = run_event_loop(&mut terminal, &mut app).await;
    if let Err(e) = &result {
        tracing::error!("Event loop failed: {:#}", e);
    }

    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Undo raw mode and the alternate screen
///
/// Every step runs even if an earlier one fails; the first failure is
/// reported.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal");
    let cursor = terminal.show_cursor().context("Failed to show cursor");

    first_failure([raw, screen, cursor])
}

/// Log every failed step and keep the first error
fn first_failure(steps: impl IntoIterator<Item = Result<()>>) -> Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(e) = step {
            tracing::warn!("Terminal restore step failed: {:#}", e);
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Main event loop
///
/// Waits on keyboard input and a redraw tick with `tokio::select!`,
/// redrawing after whichever fires.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            polled = async {
                match event::poll(Duration::from_millis(10)) {
                    Ok(true) => event::read().map(Some),
                    Ok(false) => Ok(None),
                    Err(e) => Err(e),
                }
            } => {
                if let Some(Event::Key(key_event)) = polled.context("Failed to read terminal input")? {
                    handle_key_event(app, key_event);
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            tracing::info!("quitting");
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Form text → Global → Focused panel
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key.code);
            return;
        }
        KeyEventKind::Press | KeyEventKind::Repeat => {}
    }

    app.sync();

    // Ctrl+C always quits, even from a modal or a text field
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Layer 1: modal captures all input when active
    if let Some(action) = app.modal.as_ref().map(|m| m.handle_input(key.code)) {
        if app.handle_key_press(key.code) {
            app.apply_modal_action(action);
        }
        return;
    }

    // Layer 2: typing into a form field skips debouncing and global keys
    if app.focus_captures_text() && is_text_edit(&key) {
        app.dispatch_to_focused(key);
        return;
    }

    // Action and navigation keys are debounced
    if !app.handle_key_press(key.code) {
        return;
    }

    // Layer 3: global keys
    if handle_global_keys(app, &key) {
        return;
    }

    // Layer 4: focused panel
    app.dispatch_to_focused(key);
}

/// Keys that edit the content of a text field
fn is_text_edit(key: &KeyEvent) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
    )
}

/// Handle keys that work regardless of the focused panel
/// Returns true if the key was consumed
fn handle_global_keys(app: &mut App, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::F(1) => app.set_focus(Focus::List),
        KeyCode::F(2) => app.set_focus(Focus::Create),
        KeyCode::F(3) => app.set_focus(Focus::Edit),
        KeyCode::F(4) => app.set_focus(Focus::Logs),
        // Plain letters below only reach here outside text fields
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char(c @ ('y' | 'Y')) if app.focus == Focus::List => {
            let format = if c == 'y' {
                CopyFormat::Readable
            } else {
                CopyFormat::Json
            };
            if let Some(id) = app.product_list.selected_id() {
                app.copy_product(id, format);
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    fn app() -> App {
        App::new(
            Store::new(),
            SequentialIds::new(),
            &Config::default(),
            LogBuffer::new(),
        )
    }

    /// Press and release, as a terminal reporting key-up events would
    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        let mut release = KeyEvent::new(code, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release);
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn q_types_into_form_but_quits_from_list() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        type_str(&mut app, "q?");
        assert!(!app.should_quit);
        assert!(app.modal.is_none());
        assert_eq!(app.create_form.fields().draft().title, "q?");

        press(&mut app, KeyCode::F(1));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn full_create_flow_through_key_routing() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Create);

        type_str(&mut app, "Lamp");
        press(&mut app, KeyCode::Down);
        type_str(&mut app, "Bright");
        press(&mut app, KeyCode::Down);
        type_str(&mut app, "10");
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );

        let state = app.store().state();
        assert_eq!(state.len(), 1);
        assert_eq!(state.products()[0].id, ProductId(1));
        assert_eq!(state.products()[0].price, "10");
    }

    #[test]
    fn modal_swallows_keys_until_closed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_some());

        // Tab would normally move focus
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn restore_reports_first_failure_after_running_all_steps() {
        let mut ran = Vec::new();
        let steps = (0..3).map(|i| {
            ran.push(i);
            if i == 0 {
                Ok(())
            } else {
                Err(anyhow::anyhow!("step {} failed", i))
            }
        });

        let err = first_failure(steps).unwrap_err();
        assert_eq!(err.to_string(), "step 1 failed");
        assert_eq!(ran, vec![0, 1, 2]);
    }

    #[test]
    fn restore_succeeds_when_every_step_does() {
        assert!(first_failure([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn release_events_do_not_trigger_actions() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert!(!app.should_quit);
    }
}
