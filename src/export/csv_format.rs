//! CSV export formatting.
//!
//! Renders the collection with a fixed header row. Quoting is delegated to
//! the `csv` crate, so any field containing a comma, quote, or newline is
//! escaped, not just the analysis summary.

use crate::error::{StorageError, StorageResult};
use crate::store::ScanRecord;
use chrono::SecondsFormat;

/// Column header, in export order.
const HEADER: [&str; 8] = [
    "ID",
    "Timestamp",
    "Coconut ID",
    "Status",
    "Confidence",
    "Location",
    "Duration",
    "Analysis Result",
];

/// Render records as CSV text. Returns an empty string for an empty
/// collection, matching the store's export contract.
pub fn to_csv(records: &[ScanRecord]) -> StorageResult<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(HEADER)
        .map_err(|e| StorageError::ExportFailed(e.to_string()))?;

    for record in records {
        wtr.write_record([
            record.id.to_string(),
            record.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            record.coconut_id.clone(),
            record.status.to_string(),
            record.confidence.to_string(),
            record.location.clone(),
            record.duration.clone(),
            record.analysis_result.clone(),
        ])
        .map_err(|e| StorageError::ExportFailed(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| StorageError::ExportFailed(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StorageError::ExportFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AnalysisOutcome;

    fn record(name: &str, classification: &str, confidence: f64) -> ScanRecord {
        let outcome = AnalysisOutcome {
            classification: classification.to_string(),
            confidence,
            result: None,
            color: None,
        };
        ScanRecord::from_analysis(&outcome, Some(name)).unwrap()
    }

    #[test]
    fn test_csv_empty_collection() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn test_csv_header_row() {
        let csv = to_csv(&[record("C1", "mature", 95.0)]).unwrap();
        let first_line = csv.lines().next().unwrap();
        assert_eq!(
            first_line,
            "ID,Timestamp,Coconut ID,Status,Confidence,Location,Duration,Analysis Result"
        );
    }

    #[test]
    fn test_csv_one_row_per_record() {
        let records = vec![record("C1", "mature", 95.0), record("C2", "premature", 80.0)];
        let csv = to_csv(&records).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("C1"));
        assert!(csv.contains("C2"));
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let mut r = record("C1", "mature", 95.0);
        r.location = "Tree 3, north field".to_string();
        let csv = to_csv(&[r]).unwrap();
        assert!(csv.contains("\"Tree 3, north field\""));
    }

    #[test]
    fn test_csv_doubles_embedded_quotes() {
        let mut r = record("C1", "mature", 95.0);
        r.analysis_result = "Coconut is \"MATURE\"".to_string();
        let csv = to_csv(&[r]).unwrap();
        assert!(csv.contains("\"Coconut is \"\"MATURE\"\"\""));
    }

    #[test]
    fn test_csv_whole_confidence_has_no_fraction() {
        let csv = to_csv(&[record("C1", "premature", 80.0)]).unwrap();
        assert!(csv.contains(",80,"));
    }
}
