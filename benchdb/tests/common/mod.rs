use std::path::PathBuf;

use benchdb::{BenchmarkConfig, BenchmarkDraft, PerformanceMetrics};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Fixture not found at {:?}", path))
}

pub fn sample_config(model_name: &str) -> BenchmarkConfig {
    BenchmarkConfig {
        model_name: model_name.to_string(),
        server_name: "Ascend-Server-A".to_string(),
        sharding_config: "TP4".to_string(),
        chip_name: "910B".to_string(),
        framework: "MindIE".to_string(),
        framework_version: Some("1.0.0".to_string()),
        framework_params: Some(String::new()),
        test_date: "2025-06-01".to_string(),
        submitter: Some("perf-team".to_string()),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn sample_draft(
    model_name: &str,
    metrics: Vec<PerformanceMetrics>,
) -> BenchmarkDraft {
    BenchmarkDraft {
        config: sample_config(model_name),
        metrics,
        ..Default::default()
    }
}
