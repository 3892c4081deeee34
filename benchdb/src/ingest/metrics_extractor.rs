use std::sync::LazyLock;

use csv::StringRecord;
use regex::Regex;

use super::{ColumnBinding, CsvTable, HeaderMapping, IngestError, StandardField};
use crate::{PerformanceMetrics, utils::round4};

/// The columns of a mapping that covers every mandatory field.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    process_num: ColumnBinding,
    input_length: ColumnBinding,
    output_length: ColumnBinding,
    ttft: ColumnBinding,
    tps: ColumnBinding,
    total_time: Option<ColumnBinding>,
}

impl ResolvedColumns {
    pub fn resolve(mapping: &HeaderMapping) -> Result<Self, IngestError> {
        let missing = mapping.missing_required();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                missing,
            });
        }

        let binding = |field: StandardField| {
            mapping.get(field).cloned().ok_or_else(|| {
                IngestError::MissingColumns {
                    missing: vec![field],
                }
            })
        };

        Ok(Self {
            process_num: binding(StandardField::ProcessNum)?,
            input_length: binding(StandardField::InputLength)?,
            output_length: binding(StandardField::OutputLength)?,
            ttft: binding(StandardField::Ttft)?,
            tps: binding(StandardField::Tps)?,
            total_time: mapping.get(StandardField::TotalTime).cloned(),
        })
    }

    /// Reads one data row. `row` is the 1-based data row number used in
    /// error messages.
    pub fn extract(
        &self,
        row: usize,
        record: &StringRecord,
    ) -> Result<PerformanceMetrics, IngestError> {
        let cells = RowCells {
            row,
            record,
        };

        let concurrency = cells.integer(&self.process_num)?;
        let input_length = cells.integer(&self.input_length)?;
        let output_length = cells.integer(&self.output_length)?;
        let ttft = cells.float(&self.ttft)?;
        let tokens_per_second = cells.float(&self.tps)?;
        let total_time = self
            .total_time
            .as_ref()
            .and_then(|binding| cells.optional_float(binding))
            .unwrap_or(0.0);

        let tpot = if total_time > 0.0 && output_length > 0 {
            round4((total_time - ttft) / output_length as f64)
        } else {
            0.0
        };

        Ok(PerformanceMetrics {
            input_length,
            output_length,
            concurrency,
            ttft,
            tpot,
            tokens_per_second: round4(tokens_per_second),
        })
    }
}

struct RowCells<'a> {
    row: usize,
    record: &'a StringRecord,
}

impl RowCells<'_> {
    fn raw(
        &self,
        binding: &ColumnBinding,
    ) -> &str {
        self.record.get(binding.column_index).unwrap_or("").trim()
    }

    fn invalid(
        &self,
        binding: &ColumnBinding,
    ) -> IngestError {
        IngestError::InvalidNumericData {
            row: self.row,
            column: binding.source_column.clone(),
            value: self.raw(binding).to_string(),
        }
    }

    fn integer(
        &self,
        binding: &ColumnBinding,
    ) -> Result<i64, IngestError> {
        parse_integer(self.raw(binding)).ok_or_else(|| self.invalid(binding))
    }

    fn float(
        &self,
        binding: &ColumnBinding,
    ) -> Result<f64, IngestError> {
        parse_float(self.raw(binding))
            .map(|value| value * binding.conversion_factor)
            .ok_or_else(|| self.invalid(binding))
    }

    /// Blank or unparsable cells count as absent.
    fn optional_float(
        &self,
        binding: &ColumnBinding,
    ) -> Option<f64> {
        parse_float(self.raw(binding))
            .map(|value| value * binding.conversion_factor)
    }
}

/// Leading integer of a cell; anything after it, such as a decimal part
/// or a unit suffix, is ignored.
static INTEGER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());
/// Leading decimal number of a cell, with optional exponent.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

fn parse_integer(raw: &str) -> Option<i64> {
    INTEGER_PREFIX.find(raw)?.as_str().parse().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    FLOAT_PREFIX
        .find(raw)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Pulls one metrics record out of every data row, in row order.
///
/// The whole table is rejected on the first unreadable cell.
pub fn extract_metrics(
    mapping: &HeaderMapping,
    table: &CsvTable,
) -> Result<Vec<PerformanceMetrics>, IngestError> {
    let columns = ResolvedColumns::resolve(mapping)?;
    table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, record)| columns.extract(index + 1, record))
        .collect()
}
