use csv::{ReaderBuilder, StringRecord, Trim};

use super::IngestError;

/// A CSV file split into its header row and data rows.
///
/// Cells are trimmed and blank lines dropped; every data row must have as
/// many cells as the header.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl CsvTable {
    pub fn parse(text: &str) -> Result<Self, IngestError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|error| IngestError::MalformedCsv {
                line: error.position().map(|p| p.line()).unwrap_or(0),
                message: error.to_string(),
            })?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            let Some(expected) = headers.as_ref().map(Vec::len) else {
                headers = Some(record.iter().map(String::from).collect());
                continue;
            };
            if record.len() != expected {
                return Err(IngestError::MalformedCsv {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    message: format!(
                        "expected {} fields, found {}",
                        expected,
                        record.len()
                    ),
                });
            }
            rows.push(record);
        }

        let headers = headers.ok_or(IngestError::EmptyCsv)?;
        if rows.is_empty() {
            return Err(IngestError::NoDataRows);
        }

        Ok(Self {
            headers,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }
}
