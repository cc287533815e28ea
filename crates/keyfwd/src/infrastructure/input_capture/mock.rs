//! Mock key source for unit testing.
//!
//! Allows tests to inject synthetic [`KeyEvent`]s (and capture failures)
//! without an input device.

use std::collections::VecDeque;

use keyfwd_core::KeyEvent;

use crate::application::forward_keys::{CaptureError, KeySource};

/// A scripted implementation of [`KeySource`].
///
/// Injected items are returned in order; once the script is empty the source
/// reports itself exhausted with `Ok(None)`.
#[derive(Default)]
pub struct MockKeySource {
    script: VecDeque<Result<KeyEvent, CaptureError>>,
    reads: u32,
}

impl MockKeySource {
    /// Creates an empty mock key source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-loaded with `events`.
    pub fn from_events(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        let mut source = Self::new();
        for event in events {
            source.inject_event(event);
        }
        source
    }

    /// Appends an event, as if captured from hardware.
    pub fn inject_event(&mut self, event: KeyEvent) {
        self.script.push_back(Ok(event));
    }

    /// Appends a press followed by a release of `name`.
    pub fn inject_keystroke(&mut self, name: &str) {
        self.inject_event(KeyEvent::pressed(name));
        self.inject_event(KeyEvent::released(name));
    }

    /// Appends a capture failure.
    pub fn inject_error(&mut self, error: CaptureError) {
        self.script.push_back(Err(error));
    }

    /// Returns the number of times [`KeySource::next_event`] was called.
    pub fn read_count(&self) -> u32 {
        self.reads
    }

    /// Number of scripted items not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for MockKeySource {
    fn next_event(&mut self) -> Result<Option<KeyEvent>, CaptureError> {
        self.reads += 1;
        self.script.pop_front().transpose()
    }
}
