//! Key codes understood by the tree's keyboard dispatch.

use std::str::FromStr;

use crate::error::KeyParseError;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Function keys F1-F12
    F(u8),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Delete
    Delete,
}

impl Key {
    /// Create a character key.
    ///
    /// A literal space maps to [`Key::Space`] so hosts that forward raw
    /// characters still hit the activation binding.
    pub const fn char(c: char) -> Self {
        if c == ' ' { Self::Space } else { Self::Char(c) }
    }

    /// Whether this key activates the node under focus.
    pub fn is_activate(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parse names like `enter`, `space`, `left`, `arrowright`, `f5` or a
    /// single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::char(c));
        }

        let lower = s.to_ascii_lowercase();
        let key = match lower.as_str() {
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            "space" => Key::Space,
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "delete" | "del" => Key::Delete,
            other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                Some(n @ 1..=12) => Key::F(n),
                _ => return Err(KeyParseError::Unknown(s.to_string())),
            },
        };
        Ok(key)
    }
}
