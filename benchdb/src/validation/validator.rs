use super::{ValidationError, parse_test_date};
use crate::{BenchmarkConfig, PerformanceMetrics, ReportDraft};

const REQUIRED: &str = "is required";
const NOT_EMPTY: &str = "is not allowed to be empty";
const AT_LEAST_ZERO: &str = "must be greater than or equal to 0";
const AT_LEAST_ONE: &str = "must be greater than or equal to 1";

/// Checks a configuration before it is stored.
///
/// Fields are checked in a fixed order and the first failure is reported.
pub fn validate_config(
    config: &BenchmarkConfig,
) -> Result<(), ValidationError> {
    let required_text = [
        ("modelName", &config.model_name),
        ("serverName", &config.server_name),
        ("shardingConfig", &config.sharding_config),
        ("chipName", &config.chip_name),
        ("framework", &config.framework),
    ];
    for (field, value) in required_text {
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidConfig {
                field,
                reason: NOT_EMPTY,
            });
        }
    }

    if config.framework_params.is_none() {
        return Err(ValidationError::InvalidConfig {
            field: "frameworkParams",
            reason: REQUIRED,
        });
    }

    if config.test_date.trim().is_empty() {
        return Err(ValidationError::InvalidConfig {
            field: "testDate",
            reason: REQUIRED,
        });
    }
    if parse_test_date(&config.test_date).is_none() {
        return Err(ValidationError::InvalidConfig {
            field: "testDate",
            reason: "must be in ISO 8601 date format",
        });
    }

    Ok(())
}

pub fn validate_metric(
    index: usize,
    metric: &PerformanceMetrics,
) -> Result<(), ValidationError> {
    let invalid = |field, reason| ValidationError::InvalidMetric {
        index,
        field,
        reason,
    };

    if metric.input_length < 0 {
        return Err(invalid("inputLength", AT_LEAST_ZERO));
    }
    if metric.output_length < 0 {
        return Err(invalid("outputLength", AT_LEAST_ZERO));
    }
    if metric.concurrency < 1 {
        return Err(invalid("concurrency", AT_LEAST_ONE));
    }

    let measurements = [
        ("ttft", metric.ttft),
        ("tpot", metric.tpot),
        ("tokensPerSecond", metric.tokens_per_second),
    ];
    for (field, value) in measurements {
        if !value.is_finite() {
            return Err(invalid(field, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(invalid(field, AT_LEAST_ZERO));
        }
    }

    Ok(())
}

pub fn validate_metrics(
    metrics: &[PerformanceMetrics],
) -> Result<(), ValidationError> {
    metrics
        .iter()
        .enumerate()
        .try_for_each(|(index, metric)| validate_metric(index, metric))
}

pub fn validate_report(report: &ReportDraft) -> Result<(), ValidationError> {
    let required_text = [
        ("benchmarkId1", &report.benchmark_id1),
        ("benchmarkId2", &report.benchmark_id2),
        ("modelName1", &report.model_name1),
        ("modelName2", &report.model_name2),
        ("summary", &report.summary),
    ];
    for (field, value) in required_text {
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidReport {
                field,
                reason: NOT_EMPTY,
            });
        }
    }

    if report.benchmark_id1 == report.benchmark_id2 {
        return Err(ValidationError::InvalidReport {
            field: "benchmarkId2",
            reason: "must differ from \"benchmarkId1\"",
        });
    }

    Ok(())
}
