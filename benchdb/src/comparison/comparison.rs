use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::{MetricDelta, Preference};
use crate::{Benchmark, PerformanceMetrics, sharding::per_gpu_throughput};

/// Mean of every metric across a benchmark's rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub input_length: f64,
    pub output_length: f64,
    pub concurrency: f64,
    pub ttft: f64,
    pub tpot: f64,
    pub tokens_per_second: f64,
    pub tokens_per_second_per_gpu: f64,
}

impl MetricSummary {
    /// `None` for a benchmark without rows.
    pub fn average(
        metrics: &[PerformanceMetrics],
        sharding_config: &str,
    ) -> Option<Self> {
        if metrics.is_empty() {
            return None;
        }

        let count = metrics.len() as f64;
        let mean = |value: fn(&PerformanceMetrics) -> f64| {
            metrics.iter().map(value).sum::<f64>() / count
        };
        let tokens_per_second = mean(|m| m.tokens_per_second);

        Some(Self {
            input_length: mean(|m| m.input_length as f64),
            output_length: mean(|m| m.output_length as f64),
            concurrency: mean(|m| m.concurrency as f64),
            ttft: mean(|m| m.ttft),
            tpot: mean(|m| m.tpot),
            tokens_per_second,
            tokens_per_second_per_gpu: per_gpu_throughput(
                tokens_per_second,
                sharding_config,
            ),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRow {
    pub label: &'static str,
    pub baseline: String,
    pub candidate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub label: &'static str,
    pub unit: &'static str,
    #[serde(flatten)]
    pub delta: MetricDelta,
}

/// Rows of both benchmarks measured under the same load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedRow {
    pub input_length: i64,
    pub output_length: i64,
    pub concurrency: i64,
    pub ttft: MetricDelta,
    pub tpot: MetricDelta,
    pub tokens_per_second: MetricDelta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub baseline_id: String,
    pub candidate_id: String,
    pub config: Vec<ConfigRow>,
    pub summary: Vec<MetricRow>,
    pub matched_rows: Vec<MatchedRow>,
}

pub fn compare(
    baseline: &Benchmark,
    candidate: &Benchmark,
) -> BenchmarkComparison {
    BenchmarkComparison {
        baseline_id: baseline.id.clone(),
        candidate_id: candidate.id.clone(),
        config: config_rows(baseline, candidate),
        summary: summary_rows(baseline, candidate),
        matched_rows: matched_rows(&baseline.metrics, &candidate.metrics),
    }
}

fn config_rows(
    baseline: &Benchmark,
    candidate: &Benchmark,
) -> Vec<ConfigRow> {
    let (a, b) = (&baseline.config, &candidate.config);
    let pairs = [
        ("Model", a.model_name.as_str(), b.model_name.as_str()),
        ("Server", a.server_name.as_str(), b.server_name.as_str()),
        ("Sharding", a.sharding_config.as_str(), b.sharding_config.as_str()),
        ("Chip", a.chip_name.as_str(), b.chip_name.as_str()),
        ("Framework", a.framework.as_str(), b.framework.as_str()),
        ("Framework version", a.framework_version(), b.framework_version()),
        ("Framework params", a.framework_params(), b.framework_params()),
        (
            "Operator acceleration",
            a.operator_acceleration(),
            b.operator_acceleration(),
        ),
        ("Test date", a.test_date.as_str(), b.test_date.as_str()),
    ];

    pairs
        .into_iter()
        .map(|(label, baseline, candidate)| ConfigRow {
            label,
            baseline: baseline.to_string(),
            candidate: candidate.to_string(),
        })
        .collect()
}

fn summary_rows(
    baseline: &Benchmark,
    candidate: &Benchmark,
) -> Vec<MetricRow> {
    let (Some(a), Some(b)) = (
        MetricSummary::average(
            &baseline.metrics,
            &baseline.config.sharding_config,
        ),
        MetricSummary::average(
            &candidate.metrics,
            &candidate.config.sharding_config,
        ),
    ) else {
        return Vec::new();
    };

    use Preference::{HigherIsBetter, LowerIsBetter};
    let rows = [
        (
            "Input length",
            "tokens",
            a.input_length,
            b.input_length,
            HigherIsBetter,
        ),
        (
            "Output length",
            "tokens",
            a.output_length,
            b.output_length,
            HigherIsBetter,
        ),
        ("Concurrency", "", a.concurrency, b.concurrency, HigherIsBetter),
        ("TTFT", "ms", a.ttft, b.ttft, LowerIsBetter),
        ("TPOT", "ms", a.tpot, b.tpot, LowerIsBetter),
        (
            "Throughput",
            "tokens/s",
            a.tokens_per_second,
            b.tokens_per_second,
            HigherIsBetter,
        ),
        (
            "Throughput per GPU",
            "tokens/s",
            a.tokens_per_second_per_gpu,
            b.tokens_per_second_per_gpu,
            HigherIsBetter,
        ),
    ];

    rows.into_iter()
        .map(|(label, unit, baseline, candidate, preference)| MetricRow {
            label,
            unit,
            delta: MetricDelta::new(baseline, candidate, preference),
        })
        .collect()
}

fn matched_rows(
    baseline: &[PerformanceMetrics],
    candidate: &[PerformanceMetrics],
) -> Vec<MatchedRow> {
    let mut by_load: HashMap<(i64, i64, i64), &PerformanceMetrics> =
        HashMap::new();
    for metric in candidate {
        by_load.entry(metric.load_key()).or_insert(metric);
    }

    let mut seen = HashSet::new();
    baseline
        .iter()
        .filter(|metric| seen.insert(metric.load_key()))
        .filter_map(|a| {
            let b = by_load.get(&a.load_key())?;
            Some(MatchedRow {
                input_length: a.input_length,
                output_length: a.output_length,
                concurrency: a.concurrency,
                ttft: MetricDelta::new(
                    a.ttft,
                    b.ttft,
                    Preference::LowerIsBetter,
                ),
                tpot: MetricDelta::new(
                    a.tpot,
                    b.tpot,
                    Preference::LowerIsBetter,
                ),
                tokens_per_second: MetricDelta::new(
                    a.tokens_per_second,
                    b.tokens_per_second,
                    Preference::HigherIsBetter,
                ),
            })
        })
        .collect()
}
