use std::path::PathBuf;

use benchdb::{
    BenchmarkStore,
    comparison::{BenchmarkComparison, compare},
};
use comfy_table::{Cell, Table};
use console::Style;

use crate::handlers::table::{
    align_numbers, delta_cell, format_value, new_table,
};

pub fn config_table(comparison: &BenchmarkComparison) -> Table {
    let mut table = new_table(&["", "Baseline", "Candidate"]);
    for row in &comparison.config {
        table.add_row(vec![
            row.label,
            row.baseline.as_str(),
            row.candidate.as_str(),
        ]);
    }
    table
}

pub fn summary_table(comparison: &BenchmarkComparison) -> Table {
    let mut table = new_table(&["Metric", "Baseline", "Candidate", "Change"]);
    for row in &comparison.summary {
        let label = match row.unit {
            "" => row.label.to_string(),
            unit => format!("{}, {}", row.label, unit),
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format_value(row.delta.baseline)),
            Cell::new(format_value(row.delta.candidate)),
            delta_cell(&row.delta),
        ]);
    }
    align_numbers(&mut table, 1);
    table
}

pub fn matched_rows_table(comparison: &BenchmarkComparison) -> Table {
    let mut table = new_table(&[
        "Concurrency",
        "Input",
        "Output",
        "TTFT, ms",
        "TPOT, ms",
        "Throughput, t/s",
    ]);
    for row in &comparison.matched_rows {
        table.add_row(vec![
            Cell::new(row.concurrency),
            Cell::new(row.input_length),
            Cell::new(row.output_length),
            delta_cell(&row.ttft),
            delta_cell(&row.tpot),
            delta_cell(&row.tokens_per_second),
        ]);
    }
    align_numbers(&mut table, 0);
    table
}

pub fn handle_compare(
    db_path: Option<PathBuf>,
    baseline_id: String,
    candidate_id: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = BenchmarkStore::open(db_path.as_deref())?;
    let lookup = |id: &str| {
        store
            .get_benchmark(id)
            .ok_or_else(|| format!("Benchmark not found: {id}"))
    };
    let baseline = lookup(&baseline_id)?;
    let candidate = lookup(&candidate_id)?;
    let comparison = compare(&baseline, &candidate);

    let style_bold = Style::new().bold();
    println!(
        "{} vs {}",
        style_bold.apply_to(&baseline.config.model_name),
        style_bold.apply_to(&candidate.config.model_name),
    );
    println!("{}", config_table(&comparison));
    if comparison.summary.is_empty() {
        println!("No metrics to compare");
        return Ok(());
    }
    println!("{}", summary_table(&comparison));
    if comparison.matched_rows.is_empty() {
        println!("No rows measured under the same load");
    } else {
        println!("{}", matched_rows_table(&comparison));
    }

    Ok(())
}
