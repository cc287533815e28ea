//! Domain entities for keyfwd.
//!
//! Pure data types with no OS or serial-port dependencies, so they compile and
//! test on any platform.

/// Key events as produced by the keyboard source.
pub mod key_event;
