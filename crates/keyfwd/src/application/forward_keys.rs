//! ForwardKeysUseCase: turns key releases into bytes on the serial line.
//!
//! The use case owns the serial writer for the life of the process and pulls
//! events from a [`KeySource`] one at a time.  For each event it:
//!
//! 1. drops it unless the key was released;
//! 2. resolves the payload through the [`KeyMap`] (unmapped names pass through);
//! 3. writes the payload and flushes;
//! 4. logs one line describing what was sent.
//!
//! There is no buffering and no retry.  A failed write ends the loop with
//! [`ForwardError::Write`].

use std::io::{self, Write};
use std::path::PathBuf;

use keyfwd_core::{KeyEvent, KeyMap};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for keyboard capture operations.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no keyboard input device found; do you have read access to /dev/input/event*?")]
    NoKeyboardFound,
    #[error("failed to open input device {path}: {source}")]
    DeviceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read key events: {0}")]
    Read(#[source] io::Error),
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Error type for the forwarding loop.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("serial write failed: {0}")]
    Write(#[source] io::Error),
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

/// Blocking source of key events.
///
/// The production implementation reads a Linux input device; tests use
/// `infrastructure::input_capture::mock::MockKeySource`.
pub trait KeySource {
    /// Blocks until the next key event is available.
    ///
    /// Returns `Ok(None)` once the source is exhausted.  Live keyboards never
    /// return `None`.
    fn next_event(&mut self) -> Result<Option<KeyEvent>, CaptureError>;
}

impl<S: KeySource + ?Sized> KeySource for Box<S> {
    fn next_event(&mut self) -> Result<Option<KeyEvent>, CaptureError> {
        (**self).next_event()
    }
}

/// Record of one payload written to the serial line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    /// Key name as reported by the source.
    pub key: String,
    /// Bytes written.
    pub bytes: Vec<u8>,
    /// `false` when the key was not in the table and its name was sent.
    pub mapped: bool,
}

/// The Forward Keys use case.
pub struct ForwardKeysUseCase<W: Write> {
    keymap: KeyMap,
    port: W,
    sent: u64,
}

impl<W: Write> ForwardKeysUseCase<W> {
    /// Creates a use case writing to `port` with the standard key table.
    pub fn new(port: W) -> Self {
        Self {
            keymap: KeyMap::standard(),
            port,
            sent: 0,
        }
    }

    /// Handles a single key event.
    ///
    /// Returns `Ok(None)` for press events, which produce no write and no log
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError::Write`] if the serial write or flush fails.
    pub fn handle_event(&mut self, event: &KeyEvent) -> Result<Option<Transmission>, ForwardError> {
        if !event.is_release() {
            return Ok(None);
        }

        let payload = self.keymap.payload_for(&event.name);
        self.port
            .write_all(payload.as_bytes())
            .and_then(|()| self.port.flush())
            .map_err(ForwardError::Write)?;
        self.sent += 1;

        info!(key = %event.name, "key sent: {payload}");

        Ok(Some(Transmission {
            key: event.name.clone(),
            bytes: payload.as_bytes().to_vec(),
            mapped: payload.is_mapped(),
        }))
    }

    /// Runs the blocking read-dispatch loop until the source is exhausted or
    /// an error occurs.
    ///
    /// Returns the total number of transmissions.
    ///
    /// # Errors
    ///
    /// Returns the first capture or serial error; nothing is retried.
    pub fn run<S: KeySource + ?Sized>(&mut self, source: &mut S) -> Result<u64, ForwardError> {
        while let Some(event) = source.next_event()? {
            self.handle_event(&event)?;
        }
        debug!("key source exhausted after {} transmissions", self.sent);
        Ok(self.sent)
    }

    /// Number of payloads written so far.
    pub fn sent_count(&self) -> u64 {
        self.sent
    }

    /// Consumes the use case and returns the serial writer.
    pub fn into_port(self) -> W {
        self.port
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
