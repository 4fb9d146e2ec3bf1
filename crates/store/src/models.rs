// ABOUTME: Stored document model and the response shapes returned by the store.
// ABOUTME: All types derive serde so they can be written to the index and printed as JSON.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use docstats_metrics::MetricsRecord;
use serde::{Deserialize, Serialize};

/// A stored upload and, once analysed, its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub file_id: String,
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub metrics: Option<MetricsRecord>,
}

impl Document {
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            file_id: self.file_id.clone(),
            filename: self.filename.clone(),
            uploaded_at: self.uploaded_at,
        }
    }

    /// Returns true if the document has not been analysed yet.
    pub fn is_pending(&self) -> bool {
        self.metrics.is_none()
    }
}

/// Lightweight listing entry for the upload history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub file_id: String,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub metrics: MetricsRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub file_id: String,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub metrics: MetricsRecord,
}

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
