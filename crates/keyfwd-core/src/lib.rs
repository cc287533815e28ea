//! # keyfwd-core
//!
//! Shared library for keyfwd containing the key event types and the static
//! key-name to serial-byte translation table.
//!
//! It has zero dependencies on OS APIs or serial ports.
//!
//! # Architecture overview (for beginners)
//!
//! keyfwd turns a host keyboard into a remote one: every key released on the
//! host is written as one or more bytes to a serial line, where an ESP32 replays
//! it as a USB keyboard.
//!
//! - **`domain`** – [`KeyEvent`], a key name plus press/release direction.
//! - **`keymap`** – [`KeyMap`], the fixed table that decides which bytes each
//!   key name produces, and [`HidKeyCode`] for keys with no ASCII form.

pub mod domain;
pub mod keymap;

pub use domain::key_event::{KeyEvent, KeyEventKind};
pub use keymap::hid::HidKeyCode;
pub use keymap::{KeyMap, KeyOutput, Payload};
