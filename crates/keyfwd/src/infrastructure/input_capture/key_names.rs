//! evdev key code to symbolic key name translation (US layout).
//!
//! The key table is keyed by the names a desktop keyboard library reports:
//! the character a key types (`"a"`, `"A"`, `"!"`) for printable keys, and a
//! lowercase phrase with literal spaces for everything else (`"caps lock"`,
//! `"page up"`, `"right shift"`).  This module produces exactly those names
//! from raw Linux key codes.
//!
//! Shift state is tracked across events so the shifted character is reported
//! while either Shift key is held.  Caps Lock does not change the reported
//! name.
//!
//! Reference: linux/input-event-codes.h.

use evdev::Key;
use keyfwd_core::{KeyEvent, KeyEventKind};

/// evdev event values for `EV_KEY`.
const VALUE_RELEASE: i32 = 0;
const VALUE_PRESS: i32 = 1;
const VALUE_REPEAT: i32 = 2;

/// Stateful converter from evdev key events to [`KeyEvent`]s.
#[derive(Debug, Default)]
pub struct KeyNamer {
    left_shift: bool,
    right_shift: bool,
}

impl KeyNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while either Shift key is held.
    pub fn shifted(&self) -> bool {
        self.left_shift || self.right_shift
    }

    /// Converts one `EV_KEY` event.
    ///
    /// Auto-repeat (value 2) is reported as [`KeyEventKind::Pressed`].
    /// Returns `None` for values the kernel does not define.
    pub fn translate(&mut self, key: Key, value: i32) -> Option<KeyEvent> {
        let kind = match value {
            VALUE_RELEASE => KeyEventKind::Released,
            VALUE_PRESS | VALUE_REPEAT => KeyEventKind::Pressed,
            _ => return None,
        };

        let name = key_name(key, self.shifted())
            .map(str::to_owned)
            .unwrap_or_else(|| fallback_name(key));

        // Shift state changes after the event is named, so releasing Shift
        // reports "shift" rather than a shifted variant.
        let down = kind == KeyEventKind::Pressed;
        match key {
            Key::KEY_LEFTSHIFT => self.left_shift = down,
            Key::KEY_RIGHTSHIFT => self.right_shift = down,
            _ => {}
        }

        Some(KeyEvent { name, kind })
    }
}

/// Name for keys with no entry in [`key_name`]: the lowercase evdev constant
/// without its `KEY_` prefix (e.g. `KEY_MUTE` → `"mute"`).
///
/// Codes evdev has no constant for are named `key_<code>` (e.g. `"key_248"`).
fn fallback_name(key: Key) -> String {
    let debug = format!("{key:?}");
    let is_constant = debug.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if !is_constant {
        return format!("key_{}", key.code());
    }
    debug
        .strip_prefix("KEY_")
        .unwrap_or(&debug)
        .to_ascii_lowercase()
}

/// Returns the symbolic name of `key`, or `None` if the key is not named.
pub fn key_name(key: Key, shifted: bool) -> Option<&'static str> {
    let (plain, shift) = match key {
        // Letters
        Key::KEY_A => ("a", "A"),
        Key::KEY_B => ("b", "B"),
        Key::KEY_C => ("c", "C"),
        Key::KEY_D => ("d", "D"),
        Key::KEY_E => ("e", "E"),
        Key::KEY_F => ("f", "F"),
        Key::KEY_G => ("g", "G"),
        Key::KEY_H => ("h", "H"),
        Key::KEY_I => ("i", "I"),
        Key::KEY_J => ("j", "J"),
        Key::KEY_K => ("k", "K"),
        Key::KEY_L => ("l", "L"),
        Key::KEY_M => ("m", "M"),
        Key::KEY_N => ("n", "N"),
        Key::KEY_O => ("o", "O"),
        Key::KEY_P => ("p", "P"),
        Key::KEY_Q => ("q", "Q"),
        Key::KEY_R => ("r", "R"),
        Key::KEY_S => ("s", "S"),
        Key::KEY_T => ("t", "T"),
        Key::KEY_U => ("u", "U"),
        Key::KEY_V => ("v", "V"),
        Key::KEY_W => ("w", "W"),
        Key::KEY_X => ("x", "X"),
        Key::KEY_Y => ("y", "Y"),
        Key::KEY_Z => ("z", "Z"),

        // Digit row
        Key::KEY_1 => ("1", "!"),
        Key::KEY_2 => ("2", "@"),
        Key::KEY_3 => ("3", "#"),
        Key::KEY_4 => ("4", "$"),
        Key::KEY_5 => ("5", "%"),
        Key::KEY_6 => ("6", "^"),
        Key::KEY_7 => ("7", "&"),
        Key::KEY_8 => ("8", "*"),
        Key::KEY_9 => ("9", "("),
        Key::KEY_0 => ("0", ")"),

        // Symbol keys
        Key::KEY_MINUS => ("-", "_"),
        Key::KEY_EQUAL => ("=", "+"),
        Key::KEY_LEFTBRACE => ("[", "{"),
        Key::KEY_RIGHTBRACE => ("]", "}"),
        Key::KEY_BACKSLASH => ("\\", "|"),
        Key::KEY_SEMICOLON => (";", ":"),
        Key::KEY_APOSTROPHE => ("'", "\""),
        Key::KEY_GRAVE => ("`", "~"),
        Key::KEY_COMMA => (",", "<"),
        Key::KEY_DOT => (".", ">"),
        Key::KEY_SLASH => ("/", "?"),

        // Keypad (always reported as the plain character)
        Key::KEY_KP0 => ("0", "0"),
        Key::KEY_KP1 => ("1", "1"),
        Key::KEY_KP2 => ("2", "2"),
        Key::KEY_KP3 => ("3", "3"),
        Key::KEY_KP4 => ("4", "4"),
        Key::KEY_KP5 => ("5", "5"),
        Key::KEY_KP6 => ("6", "6"),
        Key::KEY_KP7 => ("7", "7"),
        Key::KEY_KP8 => ("8", "8"),
        Key::KEY_KP9 => ("9", "9"),
        Key::KEY_KPPLUS => ("+", "+"),
        Key::KEY_KPMINUS => ("-", "-"),
        Key::KEY_KPASTERISK => ("*", "*"),
        Key::KEY_KPSLASH => ("/", "/"),
        Key::KEY_KPDOT => (".", "."),
        Key::KEY_KPENTER => ("enter", "enter"),

        // Editing and whitespace
        Key::KEY_ENTER => ("enter", "enter"),
        Key::KEY_BACKSPACE => ("backspace", "backspace"),
        Key::KEY_SPACE => ("space", "space"),
        Key::KEY_TAB => ("tab", "tab"),
        Key::KEY_ESC => ("esc", "esc"),
        Key::KEY_DELETE => ("delete", "delete"),
        Key::KEY_INSERT => ("insert", "insert"),

        // Function keys
        Key::KEY_F1 => ("f1", "f1"),
        Key::KEY_F2 => ("f2", "f2"),
        Key::KEY_F3 => ("f3", "f3"),
        Key::KEY_F4 => ("f4", "f4"),
        Key::KEY_F5 => ("f5", "f5"),
        Key::KEY_F6 => ("f6", "f6"),
        Key::KEY_F7 => ("f7", "f7"),
        Key::KEY_F8 => ("f8", "f8"),
        Key::KEY_F9 => ("f9", "f9"),
        Key::KEY_F10 => ("f10", "f10"),
        Key::KEY_F11 => ("f11", "f11"),
        Key::KEY_F12 => ("f12", "f12"),

        // Lock keys and system keys
        Key::KEY_CAPSLOCK => ("caps lock", "caps lock"),
        Key::KEY_NUMLOCK => ("num lock", "num lock"),
        Key::KEY_SCROLLLOCK => ("scroll lock", "scroll lock"),
        Key::KEY_SYSRQ => ("print screen", "print screen"),
        Key::KEY_PAUSE => ("pause", "pause"),

        // Navigation
        Key::KEY_HOME => ("home", "home"),
        Key::KEY_END => ("end", "end"),
        Key::KEY_PAGEUP => ("page up", "page up"),
        Key::KEY_PAGEDOWN => ("page down", "page down"),
        Key::KEY_LEFT => ("left", "left"),
        Key::KEY_RIGHT => ("right", "right"),
        Key::KEY_UP => ("up", "up"),
        Key::KEY_DOWN => ("down", "down"),

        // Modifiers
        Key::KEY_LEFTSHIFT => ("shift", "shift"),
        Key::KEY_RIGHTSHIFT => ("right shift", "right shift"),
        Key::KEY_LEFTCTRL => ("ctrl", "ctrl"),
        Key::KEY_RIGHTCTRL => ("right ctrl", "right ctrl"),
        Key::KEY_LEFTALT => ("alt", "alt"),
        Key::KEY_RIGHTALT => ("alt gr", "alt gr"),
        Key::KEY_LEFTMETA => ("left windows", "left windows"),
        Key::KEY_RIGHTMETA => ("right windows", "right windows"),
        Key::KEY_COMPOSE => ("menu", "menu"),

        _ => return None,
    };
    Some(if shifted { shift } else { plain })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use keyfwd_core::KeyMap;

    fn release(namer: &mut KeyNamer, key: Key) -> String {
        namer.translate(key, VALUE_RELEASE).expect("valid value").name
    }

    #[test]
    fn test_letter_is_lowercase_without_shift() {
        let mut namer = KeyNamer::new();
        assert_eq!(release(&mut namer, Key::KEY_A), "a");
    }

    #[test]
    fn test_letter_is_uppercase_while_shift_held() {
        // Arrange
        let mut namer = KeyNamer::new();
        namer.translate(Key::KEY_LEFTSHIFT, VALUE_PRESS);

        // Act
        let name = release(&mut namer, Key::KEY_A);

        // Assert
        assert_eq!(name, "A");
    }

    #[test]
    fn test_shift_digit_gives_symbol() {
        let mut namer = KeyNamer::new();
        namer.translate(Key::KEY_RIGHTSHIFT, VALUE_PRESS);
        assert_eq!(release(&mut namer, Key::KEY_1), "!");
        assert_eq!(release(&mut namer, Key::KEY_APOSTROPHE), "\"");
    }

    #[test]
    fn test_shift_release_restores_plain_names() {
        // Arrange
        let mut namer = KeyNamer::new();
        namer.translate(Key::KEY_LEFTSHIFT, VALUE_PRESS);

        // Act
        let shift_up = release(&mut namer, Key::KEY_LEFTSHIFT);
        let letter = release(&mut namer, Key::KEY_B);

        // Assert
        assert_eq!(shift_up, "shift");
        assert!(!namer.shifted());
        assert_eq!(letter, "b");
    }

    #[test]
    fn test_shift_stays_active_until_both_shifts_released() {
        let mut namer = KeyNamer::new();
        namer.translate(Key::KEY_LEFTSHIFT, VALUE_PRESS);
        namer.translate(Key::KEY_RIGHTSHIFT, VALUE_PRESS);
        namer.translate(Key::KEY_LEFTSHIFT, VALUE_RELEASE);
        assert!(namer.shifted());
        assert_eq!(release(&mut namer, Key::KEY_Z), "Z");
    }

    #[test]
    fn test_named_keys_use_spaced_lowercase_names() {
        let mut namer = KeyNamer::new();
        assert_eq!(release(&mut namer, Key::KEY_CAPSLOCK), "caps lock");
        assert_eq!(release(&mut namer, Key::KEY_PAGEUP), "page up");
        assert_eq!(release(&mut namer, Key::KEY_SYSRQ), "print screen");
        assert_eq!(release(&mut namer, Key::KEY_F5), "f5");
        assert_eq!(release(&mut namer, Key::KEY_ESC), "esc");
    }

    #[test]
    fn test_event_values_map_to_kinds() {
        let mut namer = KeyNamer::new();
        assert_eq!(namer.translate(Key::KEY_A, VALUE_PRESS).unwrap().kind, KeyEventKind::Pressed);
        assert_eq!(namer.translate(Key::KEY_A, VALUE_REPEAT).unwrap().kind, KeyEventKind::Pressed);
        assert_eq!(namer.translate(Key::KEY_A, VALUE_RELEASE).unwrap().kind, KeyEventKind::Released);
        assert!(namer.translate(Key::KEY_A, 7).is_none());
    }

    #[test]
    fn test_unnamed_key_falls_back_to_lowercase_code_name() {
        let mut namer = KeyNamer::new();
        assert_eq!(release(&mut namer, Key::KEY_MUTE), "mute");
    }

    #[test]
    fn test_code_without_evdev_constant_is_named_by_number() {
        // Arrange: 248 has no named constant in evdev
        let mut namer = KeyNamer::new();

        // Act
        let name = release(&mut namer, Key::new(248));

        // Assert
        assert_eq!(name, "key_248");
        assert!(!name.contains(' '), "fallback names never contain spaces");
    }

    #[test]
    fn test_every_table_key_is_reachable_from_a_physical_key() {
        // Each mapped name must be produced by some key, shifted or not.
        let mut reachable = Vec::new();
        // KEY_MAX is 0x2ff in linux/input-event-codes.h
        for code in 0..=0x2ffu16 {
            let key = Key::new(code);
            for shifted in [false, true] {
                if let Some(name) = key_name(key, shifted) {
                    reachable.push(name);
                }
            }
        }
        for (name, _) in KeyMap::standard().entries() {
            assert!(reachable.contains(&name), "no key produces {name:?}");
        }
    }
}
