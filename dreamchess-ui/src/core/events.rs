//! Event types for the DreamChess UI

/// Abstract UI event, the only input vocabulary widgets and dialogs see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    None,
    Up,
    Down,
    Left,
    Right,
    Action,
    Escape,
    Backspace,
    Space,
    /// A single ASCII letter. Case is significant.
    Char(char),
    Extra1,
    Extra2,
    Extra3,
}

impl UiEvent {
    /// Builds a `Char` event, or `None` for anything that is not an ASCII letter.
    pub fn letter(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            UiEvent::Char(c)
        } else {
            UiEvent::None
        }
    }

    /// The character this event types into a text entry, if any.
    pub fn typed_char(self) -> Option<char> {
        match self {
            UiEvent::Char(c) => Some(c),
            UiEvent::Space => Some(' '),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win on Windows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers
    Num0, Num1, Num2, Num3, Num4,
    Num5, Num6, Num7, Num8, Num9,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    // Special keys
    Escape, Tab, CapsLock, Shift, Control, Alt, Meta,
    Space, Enter, Backspace, Delete,

    // Navigation
    Up, Down, Left, Right,
    Home, End, PageUp, PageDown,

    // Other
    Unknown,
}

impl Key {
    /// Lowercase letter for the letter keys.
    pub fn letter(self) -> Option<char> {
        use Key::*;
        const LETTERS: [Key; 26] = [
            A, B, C, D, E, F, G, H, I, J, K, L, M,
            N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ];
        LETTERS
            .iter()
            .position(|&k| k == self)
            .map(|i| (b'a' + i as u8) as char)
    }
}
