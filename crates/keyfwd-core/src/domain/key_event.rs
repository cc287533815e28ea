//! A single key transition reported by the keyboard driver.

use std::fmt;

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    /// The key went down (also used for driver auto-repeat).
    Pressed,
    /// The key came back up.
    Released,
}

/// A key event carrying the driver's symbolic key name.
///
/// Names follow the keyboard driver's convention: lowercase letters, the
/// shifted character while Shift is held (`"A"`, `"!"`), and lowercase words
/// with literal spaces for named keys (`"caps lock"`, `"page up"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub name: String,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Creates a key-down event.
    pub fn pressed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: KeyEventKind::Pressed,
        }
    }

    /// Creates a key-up event.
    pub fn released(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: KeyEventKind::Released,
        }
    }

    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Released
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.kind {
            KeyEventKind::Pressed => "down",
            KeyEventKind::Released => "up",
        };
        write!(f, "{:?} {dir}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(KeyEvent::pressed("a").kind, KeyEventKind::Pressed);
        assert_eq!(KeyEvent::released("a").kind, KeyEventKind::Released);
    }

    #[test]
    fn test_is_release_only_for_released() {
        assert!(KeyEvent::released("enter").is_release());
        assert!(!KeyEvent::pressed("enter").is_release());
    }

    #[test]
    fn test_display_quotes_name_with_spaces() {
        assert_eq!(KeyEvent::released("caps lock").to_string(), "\"caps lock\" up");
        assert_eq!(KeyEvent::pressed("a").to_string(), "\"a\" down");
    }
}
