//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page) understood by the
//! receiving firmware.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # Why HID codes on a byte stream? (for beginners)
//!
//! The ESP32 on the other end of the serial line reads one byte at a time.
//! Printable characters (letters, digits, punctuation) and a few ASCII control
//! characters (`\n`, `\b`, `\t`, ESC, DEL) arrive as themselves and are typed
//! as text.  Keys that have no ASCII representation, such as F1 or the arrow
//! keys, are sent as their **HID Usage ID** instead.  All such IDs fall in the
//! range `0x39..=0x53`, which the firmware treats as raw key presses.
//!
//! | Key          | HID Usage ID |
//! |--------------|--------------|
//! | Caps Lock    | 0x39         |
//! | F1           | 0x3A         |
//! | Right arrow  | 0x4F         |
//! | Num Lock     | 0x53         |
//!
//! Only the subset of the keyboard page that the firmware accepts is listed.

/// USB HID Usage ID for a non-printable key forwarded as a single byte.
///
/// The numeric value of each variant is its HID Usage ID on the keyboard/keypad page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HidKeyCode {
    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad
    NumLock = 0x53,
}

impl HidKeyCode {
    /// Returns the HID Usage ID as the byte sent on the wire.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FUNCTION_KEYS: [HidKeyCode; 12] = [
        HidKeyCode::F1,
        HidKeyCode::F2,
        HidKeyCode::F3,
        HidKeyCode::F4,
        HidKeyCode::F5,
        HidKeyCode::F6,
        HidKeyCode::F7,
        HidKeyCode::F8,
        HidKeyCode::F9,
        HidKeyCode::F10,
        HidKeyCode::F11,
        HidKeyCode::F12,
    ];

    #[test]
    fn test_function_keys_are_sequential_from_0x3a() {
        for (i, key) in FUNCTION_KEYS.iter().enumerate() {
            assert_eq!(
                key.as_u8(),
                0x3A + i as u8,
                "F{} must have usage 0x{:02X}",
                i + 1,
                0x3A + i
            );
        }
    }

    #[test]
    fn test_arrow_keys_match_usb_hid_usage_table() {
        assert_eq!(HidKeyCode::ArrowRight.as_u8(), 0x4F);
        assert_eq!(HidKeyCode::ArrowLeft.as_u8(), 0x50);
        assert_eq!(HidKeyCode::ArrowDown.as_u8(), 0x51);
        assert_eq!(HidKeyCode::ArrowUp.as_u8(), 0x52);
    }

    #[test]
    fn test_lock_keys_match_usb_hid_usage_table() {
        assert_eq!(HidKeyCode::CapsLock.as_u8(), 0x39);
        assert_eq!(HidKeyCode::ScrollLock.as_u8(), 0x47);
        assert_eq!(HidKeyCode::NumLock.as_u8(), 0x53);
    }

    #[test]
    fn test_all_usages_fall_in_firmware_range() {
        let all = [
            HidKeyCode::CapsLock,
            HidKeyCode::PrintScreen,
            HidKeyCode::ScrollLock,
            HidKeyCode::Insert,
            HidKeyCode::Home,
            HidKeyCode::PageUp,
            HidKeyCode::PageDown,
            HidKeyCode::ArrowRight,
            HidKeyCode::ArrowLeft,
            HidKeyCode::ArrowDown,
            HidKeyCode::ArrowUp,
            HidKeyCode::NumLock,
        ];
        for key in all.iter().chain(FUNCTION_KEYS.iter()) {
            assert!(
                (0x39..=0x53).contains(&key.as_u8()),
                "{key:?} outside firmware usage range"
            );
        }
    }
}
