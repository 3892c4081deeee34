mod csv_table;
mod error;
mod header_matcher;
mod metrics_extractor;
mod standard_field;
mod unit_conversion;

pub use csv_table::CsvTable;
pub use error::IngestError;
pub use header_matcher::{
    ColumnBinding, HeaderMapping, map_headers, normalize_header,
};
pub use metrics_extractor::{ResolvedColumns, extract_metrics};
pub use standard_field::StandardField;
pub use unit_conversion::{
    UNIT_CONVERSIONS, UnitConversion, conversion_factor, unit_conversion,
};
