use thiserror::Error;

use super::StandardField;

#[derive(Debug, Error, PartialEq)]
pub enum IngestError {
    #[error("CSV file is empty")]
    EmptyCsv,
    #[error("CSV file has no data rows")]
    NoDataRows,
    #[error("CSV could not be parsed at line {line}: {message}")]
    MalformedCsv {
        line: u64,
        message: String,
    },
    #[error("CSV is missing required columns: {}", friendly_labels(.missing))]
    MissingColumns {
        missing: Vec<StandardField>,
    },
    #[error(
        "CSV contains invalid numeric data in row {row}, column '{column}': '{value}'"
    )]
    InvalidNumericData {
        row: usize,
        column: String,
        value: String,
    },
}

fn friendly_labels(fields: &[StandardField]) -> String {
    fields
        .iter()
        .map(|field| field.friendly_label())
        .collect::<Vec<_>>()
        .join(", ")
}
