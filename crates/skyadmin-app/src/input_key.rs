//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! the update logic can be driven from tests without a terminal.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+s, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Keys that should leave any text field immediately
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
