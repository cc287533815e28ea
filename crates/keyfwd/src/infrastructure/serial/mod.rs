//! Serial line to the ESP32.
//!
//! The line parameters are fixed by the receiving firmware: 9600 baud, 8 data
//! bits, no parity, one stop bit, no flow control.  Only the device path can
//! be chosen.
//!
//! The port is opened once at startup and held until the process exits.  An
//! open failure is fatal; there is no reconnection.

use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use thiserror::Error;
use tracing::info;

/// Device path used when none is configured.
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";
/// Baud rate expected by the firmware.
pub const BAUD_RATE: u32 = 9600;
/// Upper bound on a single blocking write before it is reported as failed.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for serial port operations.
#[derive(Debug, Error)]
pub enum SerialError {
    #[error("failed to open serial device {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },
}

/// Serial connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialSettings {
    /// Device path, e.g. `/dev/ttyUSB0`.
    pub port: String,
}

impl SerialSettings {
    pub fn new(port: impl Into<String>) -> Self {
        Self { port: port.into() }
    }

    fn builder(&self) -> serialport::SerialPortBuilder {
        serialport::new(&self.port, BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(WRITE_TIMEOUT)
    }
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

/// Opens the serial device described by `settings`.
///
/// The returned handle implements [`std::io::Write`].
///
/// # Errors
///
/// Returns [`SerialError::Open`] if the device does not exist, is busy, or
/// the process lacks permission (commonly: not in the `dialout` group).
pub fn open_serial(settings: &SerialSettings) -> Result<Box<dyn SerialPort>, SerialError> {
    let port = settings.builder().open().map_err(|source| SerialError::Open {
        port: settings.port.clone(),
        source,
    })?;
    info!("opened serial device {} at {BAUD_RATE} baud, 8N1", settings.port);
    Ok(port)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
