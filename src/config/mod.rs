//! Configuration management for cocoknock.
//!
//! Provides XDG-compliant paths and application settings persisted in the
//! key-value backend.

mod settings;

pub use settings::{AppSettings, Paths};
