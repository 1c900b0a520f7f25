//! # Cocoknock - Coconut Maturity Scan History
//!
//! Cocoknock is the scan-history engine and companion CLI for a
//! coconut-maturity detection robot. The robot classifies a coconut by
//! tapping it and listening; this crate owns what happens after: the
//! durable history of those assessments.
//!
//! ## Features
//!
//! - **Durable History**: Records persisted as one blob in an injected
//!   key-value backend
//! - **Filtering**: Status and trailing date-range queries, newest first
//! - **Statistics**: Per-status counts, average confidence, today's scans
//! - **Export**: CSV (fully escaped) and pretty-printed JSON interchange
//! - **Validated Records**: Typed ids, maturity classes, and confidence
//!   percentages
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use cocoknock::store::{MemoryBackend, ScanHistoryStore, ScanRecord, AnalysisOutcome};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = ScanHistoryStore::new(Arc::new(MemoryBackend::new()));
//!
//!     let outcome: AnalysisOutcome =
//!         serde_json::from_str(r#"{"classification":"mature","confidence":95.0}"#).unwrap();
//!     let record = ScanRecord::from_analysis(&outcome, Some("Tree-7")).unwrap();
//!
//!     store.add(record).await.unwrap();
//!     println!("{}", store.export_csv().await.unwrap());
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`store`] - The record model, key-value backends, and the history store
//! - [`config`] - Paths and application settings
//! - [`export`] - CSV and JSON interchange formats
//! - [`error`] - Comprehensive error types
//! - [`output`] - Terminal output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, StorageError};
pub use store::{AnalysisOutcome, RecordPatch, ScanHistoryStore, ScanRecord, ScanStatistics};
pub use types::{Confidence, DateRange, Maturity, RecordId, StatusFilter};
