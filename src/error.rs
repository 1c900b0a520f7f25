//! Error types for cocoknock.
//!
//! Uses `thiserror` for ergonomic error definitions. Each domain gets its
//! own enum plus a `Result` alias; everything is caught at the store or CLI
//! boundary and reported as a result value, never a panic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the scan-history store and its persistence backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read from storage: {0}")]
    ReadFailed(String),

    #[error("failed to write to storage: {0}")]
    WriteFailed(String),

    /// The persisted blob exists but cannot be deserialized. Kept distinct
    /// from an absent key so corruption is never mistaken for an empty store.
    #[error("stored scan history is corrupt: {0}")]
    Corrupt(String),

    #[error("no scan record with id {0}")]
    NotFound(String),

    #[error("a scan record with id {0} already exists")]
    DuplicateId(String),

    #[error("export failed: {0}")]
    ExportFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Configuration and settings errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine platform config directories")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
