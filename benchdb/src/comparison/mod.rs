mod comparison;
mod metric_delta;

pub use comparison::{
    BenchmarkComparison, ConfigRow, MatchedRow, MetricRow, MetricSummary,
    compare,
};
pub use metric_delta::{MetricDelta, Preference};
