//! Application layer for keyfwd.
//!
//! Contains the single use case of the program:
//! - [`forward_keys::ForwardKeysUseCase`] – filters key events, resolves
//!   payloads and writes them to the serial line.
//!
//! The [`forward_keys::KeySource`] trait is defined here and implemented by the
//! infrastructure layer, so this module never depends on OS input APIs.

pub mod forward_keys;
