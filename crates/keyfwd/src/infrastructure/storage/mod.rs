//! Storage infrastructure: configuration file loading.
//!
//! The `config` sub-module reads the optional TOML configuration file and
//! falls back to defaults when it does not exist.

pub mod config;
