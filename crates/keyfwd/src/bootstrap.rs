//! Startup wiring shared by the binary and the integration tests.
//!
//! Opens the serial device first and only then the keyboard, so that a
//! missing ESP32 aborts startup before a single key event is read.

use serialport::SerialPort;
use thiserror::Error;

use crate::application::forward_keys::{CaptureError, ForwardKeysUseCase, KeySource};
use crate::infrastructure::serial::{open_serial, SerialError, SerialSettings};

/// Error type for startup failures.  Every variant is fatal.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Serial(#[from] SerialError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

/// Opens the serial device described by `serial`, then calls `open_source`.
///
/// # Errors
///
/// Returns [`StartupError::Serial`] without calling `open_source` if the
/// serial device cannot be opened, or [`StartupError::Capture`] if the key
/// source cannot be opened.
pub fn connect<S, F>(
    serial: &SerialSettings,
    open_source: F,
) -> Result<(ForwardKeysUseCase<Box<dyn SerialPort>>, S), StartupError>
where
    S: KeySource,
    F: FnOnce() -> Result<S, CaptureError>,
{
    let port = open_serial(serial)?;
    let source = open_source()?;
    Ok((ForwardKeysUseCase::new(port), source))
}
