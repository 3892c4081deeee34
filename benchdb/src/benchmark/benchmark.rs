use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BenchmarkConfig, PerformanceMetrics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub id: String,
    pub config: BenchmarkConfig,
    pub metrics: Vec<PerformanceMetrics>,
    pub created_at: DateTime<Utc>,
}

/// Benchmark as submitted for saving. An id that is already stored replaces
/// that benchmark's config and metrics.
///
/// `config` and `metrics` must be present; `metrics` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub config: BenchmarkConfig,
    pub metrics: Vec<PerformanceMetrics>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
