use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid config: \"{field}\" {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("Invalid metric entry at index {index}: \"{field}\" {reason}")]
    InvalidMetric {
        index: usize,
        field: &'static str,
        reason: &'static str,
    },
    #[error("Invalid report: \"{field}\" {reason}")]
    InvalidReport {
        field: &'static str,
        reason: &'static str,
    },
}
