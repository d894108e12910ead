// Key debouncing for action and navigation keys
//
// Typed text never passes through here; only keys that trigger an action
// (submit, delete, focus change, quit) or move a cursor do. Many terminals
// never send release events, so a held key shows up as a stream of presses.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a state-change key
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger once per press; repeats closer than the debounce are dropped
    StateChange,

    /// Trigger on press, then repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Arrow keys and vim motions
    ///
    /// No initial delay: without release events every tap after the first
    /// would otherwise wait out the delay.
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::ZERO,
            repeat_interval: Duration::from_millis(40),
        }
    }

    /// PageUp/PageDown, Home/End
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::ZERO,
            repeat_interval: Duration::from_millis(25),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn press(&mut self, now: Instant) {
        self.is_pressed = true;
        self.press_started = Some(now);
        self.last_triggered = Some(now);
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    /// Whether a repeated press of a held key should fire
    fn should_repeat(&mut self, behavior: KeyBehavior, now: Instant) -> bool {
        let fire = match (behavior, self.press_started, self.last_triggered) {
            (KeyBehavior::StateChange, _, Some(last)) => now.duration_since(last) >= ACTION_DEBOUNCE,
            (
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                },
                Some(started),
                Some(last),
            ) => {
                now.duration_since(started) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
            _ => false,
        };
        if fire {
            self.last_triggered = Some(now);
        }
        fire
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    ///
    /// Unconfigured keys behave as `StateChange`.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();
        if state.is_pressed {
            state.should_repeat(behavior, now)
        } else {
            state.press(now);
            true
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Behaviors for the catalog editor's keymap
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );

        handler.configure_keys(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::fast_navigation(),
        );

        // Everything else (Enter, Esc, Tab, d, e, y, q, ?, F-keys) falls
        // back to StateChange
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn state_change_fires_once_per_press() {
        let mut handler = InputHandler::new();
        handler.configure_keys(&[KeyCode::Enter], KeyBehavior::StateChange);

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn state_change_refires_after_debounce_without_release() {
        let mut handler = InputHandler::with_default_config();

        assert!(handler.handle_key_press(KeyCode::Char('d')));
        assert!(!handler.handle_key_press(KeyCode::Char('d')));

        thread::sleep(ACTION_DEBOUNCE + Duration::from_millis(20));
        assert!(handler.handle_key_press(KeyCode::Char('d')));
    }

    #[test]
    fn repeatable_waits_for_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Down));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut handler = InputHandler::with_default_config();
        assert!(handler.handle_key_press(KeyCode::Tab));
        assert!(handler.handle_key_press(KeyCode::Enter));
    }
}
