mod error;
mod snapshot;
mod store;

pub use error::StoreError;
pub use snapshot::{IN_MEMORY, Snapshot};
pub use store::BenchmarkStore;
