use std::{fs, path::Path};

use benchdb::{
    CsvImport, import_csv,
    ingest::{HeaderMapping, StandardField, unit_conversion},
};
use comfy_table::Table;
use console::Style;

use crate::handlers::table::{align_numbers, format_value, new_table};

pub fn mapping_table(mapping: &HeaderMapping) -> Table {
    let mut table = new_table(&["Field", "Column", "Factor", "Unit"]);
    for field in StandardField::ALL {
        match mapping.get(field) {
            Some(binding) => {
                let unit = Some(field)
                    .filter(|field| field.accepts_unit_conversion())
                    .and_then(|_| unit_conversion(&binding.source_column))
                    .map_or("as is", |conversion| conversion.description);
                table.add_row(vec![
                    field.friendly_label().to_string(),
                    binding.source_column.clone(),
                    format!("×{}", binding.conversion_factor),
                    unit.to_string(),
                ]);
            },
            None => {
                table.add_row(vec![
                    field.friendly_label().to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            },
        }
    }
    table
}

pub fn metrics_table(import: &CsvImport) -> Table {
    let mut table = new_table(&[
        "#",
        "Concurrency",
        "Input",
        "Output",
        "TTFT, ms",
        "TPOT, ms",
        "Throughput, t/s",
    ]);
    for (index, metric) in import.metrics.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            metric.concurrency.to_string(),
            metric.input_length.to_string(),
            metric.output_length.to_string(),
            format_value(metric.ttft),
            format_value(metric.tpot),
            format_value(metric.tokens_per_second),
        ]);
    }
    align_numbers(&mut table, 1);
    table
}

/// Prints how a CSV file is read without storing it.
pub fn handle_preview(
    csv_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(csv_path)?;
    let import = import_csv(&text)?;

    let style_bold = Style::new().bold();
    println!("{}", style_bold.apply_to(csv_path.display()));
    println!("{}", mapping_table(&import.mapping));
    println!("{}", metrics_table(&import));
    println!("Rows: {}", import.metrics.len());

    Ok(())
}
