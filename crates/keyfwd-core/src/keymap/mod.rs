//! Static key-name to serial-byte translation table.
//!
//! Every key the keyboard driver reports has a *symbolic name* such as `"a"`,
//! `"A"`, `"enter"` or `"page up"`.  The [`KeyMap`] turns that name into the
//! bytes written to the serial line:
//!
//! - single printable characters (letters, digits, punctuation) map to themselves;
//! - a handful of editing keys map to ASCII control characters;
//! - function, lock and navigation keys map to their USB HID Usage ID
//!   (see [`hid`]);
//! - anything else is forwarded literally as the name's own bytes.
//!
//! The table is a compile-time constant and is never mutated.

pub mod hid;

use std::fmt;

pub use hid::HidKeyCode;

/// Names that are forwarded as their own single ASCII byte.
///
/// Letter case matters: `"a"` and `"A"` are distinct entries.
const IDENTITY_KEYS: &str = concat!(
    "1234567890",
    "!@#$%^&*()-_=+[]{}\\|;:'\",<.>/?",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
);

/// Multi-character key names with a fixed single-byte output.
const NAMED_KEYS: &[(&str, KeyOutput)] = &[
    // ASCII control characters
    ("enter", KeyOutput::Char(b'\n')),
    ("backspace", KeyOutput::Char(0x08)),
    ("space", KeyOutput::Char(b' ')),
    ("tab", KeyOutput::Char(b'\t')),
    ("esc", KeyOutput::Char(0x1B)),
    ("delete", KeyOutput::Char(0x7F)),
    // Function keys
    ("f1", KeyOutput::Usage(HidKeyCode::F1)),
    ("f2", KeyOutput::Usage(HidKeyCode::F2)),
    ("f3", KeyOutput::Usage(HidKeyCode::F3)),
    ("f4", KeyOutput::Usage(HidKeyCode::F4)),
    ("f5", KeyOutput::Usage(HidKeyCode::F5)),
    ("f6", KeyOutput::Usage(HidKeyCode::F6)),
    ("f7", KeyOutput::Usage(HidKeyCode::F7)),
    ("f8", KeyOutput::Usage(HidKeyCode::F8)),
    ("f9", KeyOutput::Usage(HidKeyCode::F9)),
    ("f10", KeyOutput::Usage(HidKeyCode::F10)),
    ("f11", KeyOutput::Usage(HidKeyCode::F11)),
    ("f12", KeyOutput::Usage(HidKeyCode::F12)),
    // Lock and navigation keys
    ("caps lock", KeyOutput::Usage(HidKeyCode::CapsLock)),
    ("num lock", KeyOutput::Usage(HidKeyCode::NumLock)),
    ("scroll lock", KeyOutput::Usage(HidKeyCode::ScrollLock)),
    ("insert", KeyOutput::Usage(HidKeyCode::Insert)),
    ("home", KeyOutput::Usage(HidKeyCode::Home)),
    ("page up", KeyOutput::Usage(HidKeyCode::PageUp)),
    ("page down", KeyOutput::Usage(HidKeyCode::PageDown)),
    ("print screen", KeyOutput::Usage(HidKeyCode::PrintScreen)),
    // Arrow keys
    ("left", KeyOutput::Usage(HidKeyCode::ArrowLeft)),
    ("right", KeyOutput::Usage(HidKeyCode::ArrowRight)),
    ("up", KeyOutput::Usage(HidKeyCode::ArrowUp)),
    ("down", KeyOutput::Usage(HidKeyCode::ArrowDown)),
];

/// The single byte a mapped key produces on the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutput {
    /// An ASCII character, printable or control.
    Char(u8),
    /// A HID Usage ID for a key with no ASCII form.
    Usage(HidKeyCode),
}

impl KeyOutput {
    /// Returns the byte written to the serial line.
    pub const fn byte(self) -> u8 {
        match self {
            KeyOutput::Char(b) => b,
            KeyOutput::Usage(code) => code.as_u8(),
        }
    }
}

/// Bytes to transmit for one key, as resolved by [`KeyMap::payload_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    /// The key is in the table; exactly one byte is sent.
    Mapped(u8),
    /// The key is not in the table; its name is sent unchanged.
    Passthrough(&'a str),
}

impl<'a> Payload<'a> {
    /// The raw bytes to write.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Mapped(b) => std::slice::from_ref(b),
            Payload::Passthrough(name) => name.as_bytes(),
        }
    }

    /// Returns `true` when the payload came from the table.
    pub fn is_mapped(&self) -> bool {
        matches!(self, Payload::Mapped(_))
    }
}

/// Prints the payload with control bytes escaped (`\n`, `\x1b`, ...) so a log
/// line never contains raw control characters.
impl fmt::Display for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bytes().escape_ascii())
    }
}

/// Immutable key-name to output-byte table.
///
/// Cheap to copy; [`KeyMap::standard`] is the only table that exists.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    identity: &'static str,
    named: &'static [(&'static str, KeyOutput)],
}

impl KeyMap {
    /// Returns the table compatible with the ESP32 receiving firmware.
    pub const fn standard() -> Self {
        Self {
            identity: IDENTITY_KEYS,
            named: NAMED_KEYS,
        }
    }

    /// Looks up `name` in the table.
    ///
    /// Returns `None` if the key is not mapped.
    pub fn lookup(&self, name: &str) -> Option<KeyOutput> {
        if let [b] = name.as_bytes() {
            if self.identity.as_bytes().contains(b) {
                return Some(KeyOutput::Char(*b));
            }
        }
        self.named
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, output)| *output)
    }

    /// Resolves the payload for `name`, falling back to the name itself when
    /// the key is not mapped.
    pub fn payload_for<'a>(&self, name: &'a str) -> Payload<'a> {
        match self.lookup(name) {
            Some(output) => Payload::Mapped(output.byte()),
            None => Payload::Passthrough(name),
        }
    }

    /// Iterates over every mapped `(name, output)` pair.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, KeyOutput)> + '_ {
        let identity = self.identity;
        (0..identity.len())
            .map(move |i| (&identity[i..i + 1], KeyOutput::Char(identity.as_bytes()[i])))
            .chain(self.named.iter().copied())
    }

    /// Number of mapped names.
    pub fn len(&self) -> usize {
        self.identity.len() + self.named.len()
    }

    /// Always `false`; the standard table is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_letters_are_case_sensitive_identity() {
        let map = KeyMap::standard();
        assert_eq!(map.lookup("a"), Some(KeyOutput::Char(b'a')));
        assert_eq!(map.lookup("A"), Some(KeyOutput::Char(b'A')));
        assert_eq!(map.lookup("z"), Some(KeyOutput::Char(b'z')));
        assert_eq!(map.lookup("Z"), Some(KeyOutput::Char(b'Z')));
    }

    #[test]
    fn test_lookup_control_keys() {
        let map = KeyMap::standard();
        assert_eq!(map.lookup("enter").map(KeyOutput::byte), Some(0x0A));
        assert_eq!(map.lookup("backspace").map(KeyOutput::byte), Some(0x08));
        assert_eq!(map.lookup("space").map(KeyOutput::byte), Some(0x20));
        assert_eq!(map.lookup("tab").map(KeyOutput::byte), Some(0x09));
        assert_eq!(map.lookup("esc").map(KeyOutput::byte), Some(0x1B));
        assert_eq!(map.lookup("delete").map(KeyOutput::byte), Some(0x7F));
    }

    #[test]
    fn test_lookup_function_keys_use_hid_usages() {
        let map = KeyMap::standard();
        assert_eq!(map.lookup("f1"), Some(KeyOutput::Usage(HidKeyCode::F1)));
        assert_eq!(map.lookup("f5").map(KeyOutput::byte), Some(0x3E));
        assert_eq!(map.lookup("f12").map(KeyOutput::byte), Some(0x45));
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let map = KeyMap::standard();
        assert_eq!(map.lookup("Enter"), None);
        assert_eq!(map.lookup("F1"), None);
        assert_eq!(map.lookup("capslock"), None);
        assert_eq!(map.lookup(""), None);
        assert_eq!(map.lookup("ab"), None);
    }

    #[test]
    fn test_lookup_unlisted_single_character_is_unmapped() {
        // Backtick and tilde are not in the firmware table.
        let map = KeyMap::standard();
        assert_eq!(map.lookup("`"), None);
        assert_eq!(map.lookup("~"), None);
    }

    #[test]
    fn test_payload_for_mapped_key_is_single_byte() {
        let payload = KeyMap::standard().payload_for("down");
        assert_eq!(payload, Payload::Mapped(0x51));
        assert_eq!(payload.as_bytes(), &[0x51]);
        assert!(payload.is_mapped());
    }

    #[test]
    fn test_payload_for_unmapped_key_passes_name_through() {
        let payload = KeyMap::standard().payload_for("right shift");
        assert_eq!(payload, Payload::Passthrough("right shift"));
        assert_eq!(payload.as_bytes(), b"right shift");
        assert!(!payload.is_mapped());
    }

    #[test]
    fn test_payload_display_escapes_control_bytes() {
        let map = KeyMap::standard();
        assert_eq!(map.payload_for("enter").to_string(), "\\n");
        assert_eq!(map.payload_for("esc").to_string(), "\\x1b");
        assert_eq!(map.payload_for("f1").to_string(), ":");
        assert_eq!(map.payload_for("q").to_string(), "q");
        assert_eq!(map.payload_for("pause").to_string(), "pause");
    }

    #[test]
    fn test_entries_cover_every_mapped_name_once() {
        let map = KeyMap::standard();
        let names: Vec<&str> = map.entries().map(|(name, _)| name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();

        assert_eq!(names.len(), map.len());
        assert_eq!(deduped.len(), names.len(), "duplicate table entry");
        // 10 digits + 30 symbols + 52 letters + 30 named keys
        assert_eq!(map.len(), 122);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_entries_agree_with_lookup() {
        let map = KeyMap::standard();
        for (name, output) in map.entries() {
            assert_eq!(map.lookup(name), Some(output), "entry {name:?}");
        }
    }
}
