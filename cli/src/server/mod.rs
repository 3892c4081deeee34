pub mod benchmarks;
pub mod catchers;
pub mod compare;
pub mod error;
pub mod legacy;
pub mod main;
pub mod reports;
pub mod state;
pub mod upload;
pub use error::{ApiError, ErrorBody};
pub use main::{ServerSettings, build_rocket, rocket_config, run_server};
pub use state::ServerState;
pub use upload::CsvUpload;
