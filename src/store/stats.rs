//! Aggregate scan statistics.

use crate::store::record::ScanRecord;
use crate::types::Maturity;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Derived aggregate over the full unfiltered collection. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStatistics {
    /// Total number of records.
    pub total: usize,
    /// Records classified premature.
    pub premature: usize,
    /// Records classified mature.
    pub mature: usize,
    /// Records classified overmature.
    pub overmature: usize,
    /// Records with an unrecognized classification.
    pub unknown: usize,
    /// Mean confidence, rounded to the nearest whole percent. 0 when empty.
    pub average_confidence: u32,
    /// Records whose timestamp falls on the current local calendar day.
    pub today_scans: usize,
}

impl ScanStatistics {
    /// Compute statistics over `records`, with "today" anchored at `now`.
    pub fn compute(records: &[ScanRecord], now: DateTime<Local>) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        let today = now.date_naive();
        let mut confidence_sum = 0.0;

        for record in records {
            match record.status {
                Maturity::Premature => stats.premature += 1,
                Maturity::Mature => stats.mature += 1,
                Maturity::Overmature => stats.overmature += 1,
                Maturity::Unknown => stats.unknown += 1,
            }

            confidence_sum += record.confidence.value();

            if record.timestamp.with_timezone(&Local).date_naive() == today {
                stats.today_scans += 1;
            }
        }

        if !records.is_empty() {
            stats.average_confidence = (confidence_sum / records.len() as f64).round() as u32;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record::AnalysisOutcome;

    fn record(classification: &str, confidence: f64) -> ScanRecord {
        let outcome = AnalysisOutcome {
            classification: classification.to_string(),
            confidence,
            result: None,
            color: None,
        };
        ScanRecord::from_analysis(&outcome, None).unwrap()
    }

    #[test]
    fn test_statistics_empty() {
        let stats = ScanStatistics::compute(&[], Local::now());
        assert_eq!(stats, ScanStatistics::default());
        assert_eq!(stats.average_confidence, 0);
    }

    #[test]
    fn test_statistics_counts_and_average() {
        let records = vec![
            record("premature", 80.0),
            record("mature", 95.0),
            record("mature", 90.0),
            record("ripe", 10.0),
        ];
        let stats = ScanStatistics::compute(&records, Local::now());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.premature, 1);
        assert_eq!(stats.mature, 2);
        assert_eq!(stats.overmature, 0);
        assert_eq!(stats.unknown, 1);
        // (80 + 95 + 90 + 10) / 4 = 68.75 rounds to 69
        assert_eq!(stats.average_confidence, 69);
        assert_eq!(stats.today_scans, 4);
    }

    #[test]
    fn test_statistics_average_rounds_half_up() {
        let records = vec![record("premature", 80.0), record("mature", 95.0)];
        let stats = ScanStatistics::compute(&records, Local::now());
        // 87.5 rounds to 88
        assert_eq!(stats.average_confidence, 88);
    }

    #[test]
    fn test_statistics_today_excludes_older_records() {
        let mut old = record("mature", 95.0);
        old.timestamp -= chrono::Duration::days(2);
        let records = vec![old, record("premature", 80.0)];

        let stats = ScanStatistics::compute(&records, Local::now());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.today_scans, 1);
    }
}
