//! Abstract input events, independent of terminal library.
//!
//! `InputKey` and `InputMouse` abstract keyboard and pointer input from the
//! underlying terminal library (crossterm). The TUI crate converts at its
//! boundary so opnpage-app stays free of crossterm types.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, emoji)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,
}

/// Kind of pointer event; only the primary button is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Drag,
    Up,
}

/// Abstract pointer event in terminal cell coordinates.
/// Converted from crossterm::event::MouseEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMouse {
    pub action: MouseAction,
    pub column: u16,
    pub row: u16,
}

impl InputMouse {
    pub fn down(column: u16, row: u16) -> Self {
        Self {
            action: MouseAction::Down,
            column,
            row,
        }
    }

    pub fn drag(column: u16, row: u16) -> Self {
        Self {
            action: MouseAction::Drag,
            column,
            row,
        }
    }

    pub fn up(column: u16, row: u16) -> Self {
        Self {
            action: MouseAction::Up,
            column,
            row,
        }
    }

    pub fn position(&self) -> (u16, u16) {
        (self.column, self.row)
    }
}
