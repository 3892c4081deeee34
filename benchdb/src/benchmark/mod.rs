mod benchmark;
mod config;
mod metrics;
mod report;

pub use benchmark::{Benchmark, BenchmarkDraft};
pub use config::BenchmarkConfig;
pub use metrics::PerformanceMetrics;
pub use report::{ComparisonReport, ReportDraft};
