mod error;
mod test_date;
mod validator;

pub use error::ValidationError;
pub use test_date::parse_test_date;
pub use validator::{
    validate_config, validate_metric, validate_metrics, validate_report,
};
