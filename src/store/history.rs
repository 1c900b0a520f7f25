//! The scan-history store.
//!
//! Sole owner of the durable scan collection: every mutation and query
//! funnels through `ScanHistoryStore` so the persisted blob stays
//! consistent. The whole collection is serialized as one JSON array under a
//! fixed key in an injected key-value backend.
//!
//! Mutations are read-modify-write cycles over that blob, serialized by an
//! internal mutex. That protects against interleaving within one process
//! only; two processes sharing a backend can still lose writes.

use crate::error::{StorageError, StorageResult};
use crate::export;
use crate::store::backend::{KeyValueBackend, SCAN_HISTORY_KEY};
use crate::store::record::{RecordPatch, ScanRecord};
use crate::store::stats::ScanStatistics;
use crate::types::{DateRange, RecordId, StatusFilter};
use chrono::Local;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Durable store for scan records, backed by an injected key-value backend.
pub struct ScanHistoryStore {
    backend: Arc<dyn KeyValueBackend>,
    mutation_lock: Mutex<()>,
}

impl ScanHistoryStore {
    /// Create a store over the given backend.
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            mutation_lock: Mutex::new(()),
        }
    }

    /// All records in stored order (newest-prepended).
    ///
    /// An absent key is a legitimately empty store; an unparsable blob
    /// surfaces as [`StorageError::Corrupt`] instead of masquerading as
    /// empty.
    pub async fn list(&self) -> StorageResult<Vec<ScanRecord>> {
        match self.backend.get(SCAN_HISTORY_KEY).await? {
            None => Ok(Vec::new()),
            Some(blob) => {
                serde_json::from_str(&blob).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
        }
    }

    /// Prepend a new record and persist the collection.
    ///
    /// A colliding id is rejected with [`StorageError::DuplicateId`] so the
    /// id-uniqueness invariant cannot be violated by callers.
    pub async fn add(&self, record: ScanRecord) -> StorageResult<()> {
        let _guard = self.mutation_lock.lock().await;

        let mut records = self.list().await?;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StorageError::DuplicateId(record.id.to_string()));
        }

        debug!(id = %record.id, coconut = %record.coconut_id, "adding scan record");
        records.insert(0, record);
        self.persist(&records).await
    }

    /// Shallow-merge `patch` into the record with the given id and persist.
    pub async fn update(&self, id: RecordId, patch: &RecordPatch) -> StorageResult<()> {
        let _guard = self.mutation_lock.lock().await;

        let mut records = self.list().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        patch.apply(record);
        debug!(id = %id, "updated scan record");
        self.persist(&records).await
    }

    /// Remove the record with the given id and persist.
    pub async fn delete(&self, id: RecordId) -> StorageResult<()> {
        let _guard = self.mutation_lock.lock().await;

        let mut records = self.list().await?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }

        debug!(id = %id, "deleted scan record");
        self.persist(&records).await
    }

    /// Replace the collection with the empty collection.
    pub async fn delete_all(&self) -> StorageResult<()> {
        let _guard = self.mutation_lock.lock().await;
        debug!("deleting all scan records");
        self.persist(&[]).await
    }

    /// Records matching both filters, sorted by timestamp descending.
    ///
    /// Date boundaries are computed once from local "now" at call time.
    pub async fn filtered(
        &self,
        status: StatusFilter,
        range: DateRange,
    ) -> StorageResult<Vec<ScanRecord>> {
        let mut records = self.list().await?;
        let cutoff = range.cutoff(Local::now());

        records.retain(|r| {
            if !status.matches(r.status) {
                return false;
            }
            match cutoff {
                None => true,
                Some(cutoff) => r.timestamp.with_timezone(&Local).naive_local() >= cutoff,
            }
        });

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// The `count` most recent records, timestamp descending.
    pub async fn recent(&self, count: usize) -> StorageResult<Vec<ScanRecord>> {
        let mut records = self.filtered(StatusFilter::All, DateRange::All).await?;
        records.truncate(count);
        Ok(records)
    }

    /// Aggregate statistics over the full unfiltered collection.
    pub async fn statistics(&self) -> StorageResult<ScanStatistics> {
        let records = self.list().await?;
        Ok(ScanStatistics::compute(&records, Local::now()))
    }

    /// Render the full collection as CSV. Empty string when empty.
    pub async fn export_csv(&self) -> StorageResult<String> {
        let records = self.list().await?;
        export::to_csv(&records)
    }

    /// Render the full collection as pretty-printed JSON, in stored order.
    pub async fn export_json(&self) -> StorageResult<String> {
        let records = self.list().await?;
        export::to_json(&records)
    }

    async fn persist(&self, records: &[ScanRecord]) -> StorageResult<()> {
        let blob = serde_json::to_string(records)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        self.backend.set(SCAN_HISTORY_KEY, &blob).await
    }
}
