//! Infrastructure layer for keyfwd.
//!
//! Contains OS-facing adapters: keyboard capture, the serial port, and
//! configuration file loading.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `keyfwd_core`, but MUST NOT be imported by the `application` layer.

pub mod input_capture;
pub mod serial;
pub mod storage;
