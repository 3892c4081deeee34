use serde::Serialize;
use thiserror::Error;

use crate::{
    PerformanceMetrics,
    ingest::{CsvTable, HeaderMapping, IngestError, extract_metrics, map_headers},
    validation::{ValidationError, validate_metrics},
};

#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("Validation error in CSV row: {0}")]
    Validation(#[from] ValidationError),
}

/// Outcome of reading one benchmark CSV: how its columns were understood and
/// the records extracted from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImport {
    pub mapping: HeaderMapping,
    pub metrics: Vec<PerformanceMetrics>,
}

/// Parses, maps, extracts and validates a CSV file as a single unit: either
/// every row is accepted or the file is rejected.
pub fn import_csv(text: &str) -> Result<CsvImport, ImportError> {
    let table = CsvTable::parse(text)?;
    let mapping = map_headers(table.headers());
    let metrics = extract_metrics(&mapping, &table)?;
    validate_metrics(&metrics)?;

    tracing::debug!(
        rows = metrics.len(),
        mapped_columns = mapping.len(),
        "imported benchmark CSV"
    );
    Ok(CsvImport {
        mapping,
        metrics,
    })
}
