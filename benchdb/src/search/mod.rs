mod filter;

pub use filter::BenchmarkFilter;
