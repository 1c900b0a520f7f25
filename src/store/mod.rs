//! Scan record persistence.
//!
//! Provides the record model, the key-value backend abstraction, and the
//! history store that owns the durable collection.

mod backend;
mod history;
mod record;
mod stats;

pub use backend::{JsonFileBackend, KeyValueBackend, MemoryBackend, APP_SETTINGS_KEY, SCAN_HISTORY_KEY};
pub use history::ScanHistoryStore;
pub use record::{AnalysisOutcome, RecordPatch, ScanRecord};
pub use stats::ScanStatistics;
