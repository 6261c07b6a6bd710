//! Message types for actor communication.
//!
//! Every producer speaks [`Event`]; the controller is the only consumer.

use bitflags::bitflags;
use std::time::Duration;

/// Key codes for keyboard input.
///
/// A subset of crossterm's `KeyCode`, covering what the engine binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Escape key.
    Esc,
}

bitflags! {
    /// Key modifiers held during a keypress.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CONTROL = 0b0000_0010;
        /// Alt/Option key held.
        const ALT = 0b0000_0100;
        /// Super/Command/Windows key held.
        const SUPER = 0b0000_1000;
    }
}

/// A tick of the animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Tick number (monotonically increasing from 0).
    pub sequence: u64,
    /// Scheduled time of this tick, relative to clock start.
    pub elapsed: Duration,
}

/// Events consumed by the controller, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// The animation clock ticked.
    Tick(Tick),

    /// A line arrived on the input relay.
    Line(String),

    /// The input relay reached end of stream.
    InputClosed,

    /// The process received SIGINT or SIGTERM.
    Interrupt,

    /// A producer hit a recoverable error.
    Error(String),
}

impl Event {
    /// Shorthand for a key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the program.
    Quit,
    /// Scroll the log up one line.
    ScrollUp,
    /// Scroll the log down one line.
    ScrollDown,
    /// Scroll the log up one window.
    PageUp,
    /// Scroll the log down one window.
    PageDown,
    /// Jump to the oldest lines.
    Top,
    /// Jump to the newest lines.
    Bottom,
}

impl Command {
    /// Look up the binding for a key press.
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Self> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'C') => Some(Self::Quit),
                _ => None,
            };
        }

        Some(match code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            KeyCode::Up | KeyCode::Char('k') => Self::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Self::ScrollDown,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Home => Self::Top,
            KeyCode::End => Self::Bottom,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_bindings() {
        let none = KeyModifiers::empty();
        assert_eq!(Command::from_key(KeyCode::Char('q'), none), Some(Command::Quit));
        assert_eq!(Command::from_key(KeyCode::Esc, none), Some(Command::Quit));
        assert_eq!(
            Command::from_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_unbound() {
        assert_eq!(Command::from_key(KeyCode::Char('c'), KeyModifiers::empty()), None);
        assert_eq!(
            Command::from_key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            None
        );
    }

    #[test]
    fn test_scroll_bindings() {
        let none = KeyModifiers::empty();
        assert_eq!(Command::from_key(KeyCode::Up, none), Some(Command::ScrollUp));
        assert_eq!(Command::from_key(KeyCode::Char('k'), none), Some(Command::ScrollUp));
        assert_eq!(Command::from_key(KeyCode::Down, none), Some(Command::ScrollDown));
        assert_eq!(Command::from_key(KeyCode::Char('j'), none), Some(Command::ScrollDown));
        assert_eq!(Command::from_key(KeyCode::PageDown, none), Some(Command::PageDown));
        assert_eq!(Command::from_key(KeyCode::End, none), Some(Command::Bottom));
        assert_eq!(Command::from_key(KeyCode::Enter, none), None);
    }
}
