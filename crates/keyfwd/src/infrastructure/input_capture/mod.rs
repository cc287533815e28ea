//! Keyboard capture infrastructure.
//!
//! On Linux, keys are read from an evdev input device (`/dev/input/event*`).
//! Raw key codes are converted to the symbolic names the key table expects
//! by [`key_names::KeyNamer`], which tracks the Shift state so that `KEY_A`
//! becomes `"a"` or `"A"` and `KEY_1` becomes `"1"` or `"!"`.
//!
//! # Permissions
//!
//! Reading input devices usually requires root or membership in the `input`
//! group.  Failure to open the device is fatal at startup.
//!
//! # Testability
//!
//! The [`KeySource`] trait lets unit tests feed scripted events through
//! [`mock::MockKeySource`] without any input hardware.

use std::path::Path;

use crate::application::forward_keys::{CaptureError, KeySource};

pub mod mock;

#[cfg(target_os = "linux")]
pub mod key_names;
#[cfg(target_os = "linux")]
pub mod linux;

/// Opens the platform keyboard source.
///
/// When `device` is `None` the first input device that reports a `KEY_A`
/// key is used.
///
/// # Errors
///
/// Returns [`CaptureError`] if no keyboard can be opened, or
/// [`CaptureError::UnsupportedPlatform`] on systems without evdev.
pub fn open_key_source(device: Option<&Path>) -> Result<Box<dyn KeySource>, CaptureError> {
    #[cfg(target_os = "linux")]
    {
        let source = match device {
            Some(path) => linux::EvdevKeySource::open(path)?,
            None => linux::EvdevKeySource::autodetect()?,
        };
        Ok(Box::new(source))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let _ = device;
        Err(CaptureError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}
