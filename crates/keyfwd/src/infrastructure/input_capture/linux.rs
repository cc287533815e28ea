//! evdev keyboard source for Linux.
//!
//! Reads `EV_KEY` events from one `/dev/input/event*` device with a blocking
//! `read(2)`.  The device is not grabbed, so keys still reach the local
//! desktop as well.

#![cfg(target_os = "linux")]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use evdev::{Device, InputEventKind, Key};
use keyfwd_core::KeyEvent;
use tracing::info;

use super::key_names::KeyNamer;
use crate::application::forward_keys::{CaptureError, KeySource};

/// Keyboard source backed by an evdev device.
pub struct EvdevKeySource {
    device: Device,
    namer: KeyNamer,
    /// Events decoded from the last read but not yet returned.
    pending: VecDeque<KeyEvent>,
}

impl EvdevKeySource {
    /// Opens the input device at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::DeviceOpen`] if the device cannot be opened
    /// (missing node, or no read permission).
    pub fn open(path: &Path) -> Result<Self, CaptureError> {
        let device = Device::open(path).map_err(|source| CaptureError::DeviceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_device(device, path))
    }

    /// Opens the first input device that has an `A` key.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::NoKeyboardFound`] if no readable device
    /// reports keyboard keys.
    pub fn autodetect() -> Result<Self, CaptureError> {
        let mut candidates: Vec<(PathBuf, Device)> = evdev::enumerate()
            .filter(|(_, device)| {
                device
                    .supported_keys()
                    .map_or(false, |keys| keys.contains(Key::KEY_A))
            })
            .collect();
        // enumerate() order is directory order; sort for a stable choice
        candidates.sort_by(|a, b| a.0.cmp(&b.0));

        let (path, device) = candidates
            .into_iter()
            .next()
            .ok_or(CaptureError::NoKeyboardFound)?;
        Ok(Self::from_device(device, &path))
    }

    fn from_device(device: Device, path: &Path) -> Self {
        info!(
            "reading keys from {} ({})",
            path.display(),
            device.name().unwrap_or("unnamed device")
        );
        Self {
            device,
            namer: KeyNamer::new(),
            pending: VecDeque::new(),
        }
    }
}

impl KeySource for EvdevKeySource {
    fn next_event(&mut self) -> Result<Option<KeyEvent>, CaptureError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }

            // Blocks until the kernel delivers the next batch of events.
            let events = self.device.fetch_events().map_err(CaptureError::Read)?;
            for raw in events {
                if let InputEventKind::Key(key) = raw.kind() {
                    if let Some(event) = self.namer.translate(key, raw.value()) {
                        self.pending.push_back(event);
                    }
                }
            }
        }
    }
}
