pub mod benchmark;
pub use benchmark::{
    Benchmark, BenchmarkConfig, BenchmarkDraft, ComparisonReport,
    PerformanceMetrics, ReportDraft,
};

pub mod comparison;
pub mod importer;
pub use importer::{CsvImport, ImportError, import_csv};

pub mod ingest;
pub mod search;
pub mod sharding;
pub mod store;
pub use store::{BenchmarkStore, StoreError};

pub mod utils;
pub mod validation;
