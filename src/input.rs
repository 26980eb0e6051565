//! Input contract between the terminal and the game core.
//!
//! The core only ever sees `InputEvent`s. A flap is triggered solely by a
//! non-repeat key-down on the jump key, so holding the key gives one flap,
//! not a stream of them.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press is treated as auto-repeat if the same key was last seen
/// within this many frames. Only used on terminals that report neither
/// `Repeat` nor `Release` events.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Jump,
    Pause,
    Restart,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
    Quit,
}

impl InputEvent {
    /// Leading edge of a jump key press.
    pub fn is_flap(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown {
                key: Key::Jump,
                repeat: false
            }
        )
    }

    pub fn is_pause(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown {
                key: Key::Pause,
                repeat: false
            }
        )
    }

    pub fn is_restart(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown {
                key: Key::Restart,
                repeat: false
            }
        )
    }
}

pub fn map_key(code: &KeyCode) -> Key {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Key::Jump,
        KeyCode::Char('p') | KeyCode::Char('P') => Key::Pause,
        KeyCode::Char('r') | KeyCode::Char('R') => Key::Restart,
        _ => Key::Other,
    }
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Terminal key tracking ─────────────────────────────────────────────────────

/// Turns raw terminal key events into `InputEvent`s with a reliable
/// `repeat` flag.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` kinds are trusted as-is.
/// * **Classic terminals**: OS auto-repeat shows up as repeated `Press`
///   events, so a press of a key last seen within `HOLD_WINDOW` frames is
///   reported as a repeat. This is a best guess: the first OS auto-repeat
///   only arrives after the keyboard's repeat delay, which is longer than
///   the window, so holding a key can still yield a second non-repeat press.
#[derive(Debug, Default)]
pub struct KeyTracker {
    enhanced: bool,
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new(enhanced: bool) -> Self {
        Self {
            enhanced,
            last_seen: HashMap::new(),
        }
    }

    fn recently_seen(&self, code: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn translate(&mut self, event: &KeyEvent, frame: u64) -> Option<InputEvent> {
        let key = map_key(&event.code);
        match event.kind {
            KeyEventKind::Press => {
                if is_quit(event) {
                    return Some(InputEvent::Quit);
                }
                let repeat = !self.enhanced && self.recently_seen(&event.code, frame);
                self.last_seen.insert(event.code, frame);
                Some(InputEvent::KeyDown { key, repeat })
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(event.code, frame);
                Some(InputEvent::KeyDown { key, repeat: true })
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&event.code);
                Some(InputEvent::KeyUp { key, repeat: false })
            }
        }
    }
}
