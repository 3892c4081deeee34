use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved human summary of a pairwise comparison.
///
/// Benchmarks are referenced by id only; the store removes a report as soon
/// as either side is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub id: String,
    pub benchmark_id1: String,
    pub benchmark_id2: String,
    pub model_name1: String,
    pub model_name2: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl ComparisonReport {
    pub fn references(
        &self,
        benchmark_id: &str,
    ) -> bool {
        self.benchmark_id1 == benchmark_id || self.benchmark_id2 == benchmark_id
    }
}

/// Report as submitted by a client, before an id and timestamp are assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportDraft {
    pub id: Option<String>,
    pub benchmark_id1: String,
    pub benchmark_id2: String,
    pub model_name1: String,
    pub model_name2: String,
    pub summary: String,
    pub created_at: Option<DateTime<Utc>>,
}
