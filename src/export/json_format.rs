//! JSON export formatting.

use crate::error::{StorageError, StorageResult};
use crate::store::ScanRecord;

/// Render records as a pretty-printed (2-space indent) JSON array, in
/// stored order.
pub fn to_json(records: &[ScanRecord]) -> StorageResult<String> {
    serde_json::to_string_pretty(records).map_err(|e| StorageError::ExportFailed(e.to_string()))
}
