use serde::{Deserialize, Serialize};

/// Descriptive half of a benchmark: what was measured and on which setup.
///
/// Every field defaults to empty on deserialization so that an incomplete
/// request still reaches the validator, which names the first missing field
/// instead of failing inside the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchmarkConfig {
    pub model_name: String,
    pub server_name: String,
    pub sharding_config: String,
    pub chip_name: String,
    pub framework: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_version: Option<String>,
    /// Must be present, may be empty.
    pub framework_params: Option<String>,
    pub test_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_acceleration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BenchmarkConfig {
    pub fn submitter(&self) -> &str {
        self.submitter.as_deref().unwrap_or("")
    }

    pub fn framework_version(&self) -> &str {
        self.framework_version.as_deref().unwrap_or("")
    }

    pub fn framework_params(&self) -> &str {
        self.framework_params.as_deref().unwrap_or("")
    }

    pub fn operator_acceleration(&self) -> &str {
        self.operator_acceleration.as_deref().unwrap_or("")
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}
