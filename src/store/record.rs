//! Scan record model.
//!
//! A `ScanRecord` is one completed maturity assessment, created when the
//! user confirms saving an analysis the robot produced. Field names on the
//! wire are camelCase to stay interchange-compatible with the mobile app's
//! history exports.

use crate::types::{Confidence, ConfidenceError, Maturity, RecordId};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One persisted maturity assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    /// Unique identifier, generated at creation, immutable.
    pub id: RecordId,
    /// Creation instant, immutable. Sorting and date filtering key.
    pub timestamp: DateTime<Utc>,
    /// User-facing coconut label.
    pub coconut_id: String,
    /// Maturity class reported by the classifier.
    pub status: Maturity,
    /// Classification confidence percentage.
    pub confidence: Confidence,
    /// Free-text capture location.
    pub location: String,
    /// Free-text scan duration.
    pub duration: String,
    /// Human-readable analysis summary.
    pub analysis_result: String,
    /// Display color hint (hex string), not used for business logic.
    pub color: String,
    /// Optional user-supplied scan name.
    pub name: String,
}

impl ScanRecord {
    /// Wrap a completed analysis into a new record, applying defaults for
    /// anything the caller did not supply.
    ///
    /// # Errors
    ///
    /// Fails if the reported confidence falls outside `[0, 100]`.
    pub fn from_analysis(
        outcome: &AnalysisOutcome,
        custom_name: Option<&str>,
    ) -> Result<Self, ConfidenceError> {
        let status = outcome.maturity();
        let confidence = Confidence::new(outcome.confidence)?;
        let now = Utc::now();

        let coconut_id = match custom_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => default_coconut_label(),
        };

        let name = match custom_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!("Scan-{}", now.timestamp_millis()),
        };

        Ok(Self {
            id: RecordId::new(),
            timestamp: now,
            coconut_id,
            status,
            confidence,
            location: "Tree - Position".to_string(),
            duration: "45s".to_string(),
            analysis_result: outcome
                .result
                .clone()
                .unwrap_or_else(|| status.summary().to_string()),
            color: outcome
                .color
                .clone()
                .unwrap_or_else(|| status.color().to_string()),
            name,
        })
    }

    /// Get a short one-line summary of this record.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} ({}%) at {}",
            self.coconut_id,
            self.status,
            self.confidence.rounded(),
            self.timestamp.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Random default label of the form `Coconut-NNN`.
fn default_coconut_label() -> String {
    format!("Coconut-{:03}", rand::thread_rng().gen_range(0..1000))
}

/// An already-computed classification result received from the robot's
/// analyze endpoint. The store never calls that endpoint itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisOutcome {
    /// Raw class label as reported by the classifier.
    pub classification: String,
    /// Confidence percentage.
    pub confidence: f64,
    /// Pre-rendered summary text, if the caller produced one.
    #[serde(default)]
    pub result: Option<String>,
    /// Pre-chosen display color, if the caller produced one.
    #[serde(default)]
    pub color: Option<String>,
}

impl AnalysisOutcome {
    /// Canonicalized maturity class.
    pub fn maturity(&self) -> Maturity {
        self.classification.parse().unwrap_or_default()
    }
}

/// Partial update applied to an existing record.
///
/// Only the fields present are overwritten; `id` and `timestamp` are
/// immutable and cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPatch {
    pub coconut_id: Option<String>,
    pub status: Option<Maturity>,
    pub confidence: Option<Confidence>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub analysis_result: Option<String>,
    pub color: Option<String>,
    pub name: Option<String>,
}

impl RecordPatch {
    /// Shallow-merge this patch into a record.
    pub fn apply(&self, record: &mut ScanRecord) {
        if let Some(coconut_id) = &self.coconut_id {
            record.coconut_id = coconut_id.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(confidence) = self.confidence {
            record.confidence = confidence;
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(duration) = &self.duration {
            record.duration = duration.clone();
        }
        if let Some(analysis_result) = &self.analysis_result {
            record.analysis_result = analysis_result.clone();
        }
        if let Some(color) = &self.color {
            record.color = color.clone();
        }
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
    }

    /// Whether this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.coconut_id.is_none()
            && self.status.is_none()
            && self.confidence.is_none()
            && self.location.is_none()
            && self.duration.is_none()
            && self.analysis_result.is_none()
            && self.color.is_none()
            && self.name.is_none()
    }
}
