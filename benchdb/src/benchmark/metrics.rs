use serde::{Deserialize, Serialize};

/// One measured point of a benchmark dataset.
///
/// Integer fields are signed so that out-of-range values coming from a CSV
/// or a manual entry are reported by the validator rather than lost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub input_length: i64,
    pub output_length: i64,
    pub concurrency: i64,
    /// Milliseconds.
    pub ttft: f64,
    /// Milliseconds.
    pub tpot: f64,
    pub tokens_per_second: f64,
}

impl PerformanceMetrics {
    /// Key used to pair rows of two datasets measured under the same load.
    pub fn load_key(&self) -> (i64, i64, i64) {
        (self.input_length, self.output_length, self.concurrency)
    }
}
