use std::{fs, path::PathBuf};

use benchdb::{
    BenchmarkConfig, BenchmarkDraft, BenchmarkStore, import_csv,
    validation::validate_config,
};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Imports every CSV file as its own benchmark sharing one configuration.
///
/// A rejected file is reported and skipped; the others are still stored.
pub fn handle_import(
    config_path: PathBuf,
    csv_paths: Vec<PathBuf>,
    db_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_data = fs::read_to_string(&config_path)?;
    let config: BenchmarkConfig = serde_json::from_str(&config_data)?;
    validate_config(&config)?;

    let store = BenchmarkStore::open(db_path.as_deref())?;
    if store.snapshot_path().is_none() {
        println!("No database path given, imported data will not be kept");
    }

    let style_ok = Style::new().green();
    let style_error = Style::new().red().bold();

    let progress_bar = ProgressBar::new(csv_paths.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")?,
    );

    let mut rejected = 0;
    for csv_path in &csv_paths {
        progress_bar.set_message(csv_path.display().to_string());
        let outcome = fs::read_to_string(csv_path)
            .map_err(|error| error.to_string())
            .and_then(|text| import_csv(&text).map_err(|e| e.to_string()))
            .and_then(|import| {
                store
                    .save_benchmark(BenchmarkDraft {
                        config: config.clone(),
                        metrics: import.metrics,
                        ..Default::default()
                    })
                    .map_err(|error| error.to_string())
            });

        match outcome {
            Ok(benchmark) => {
                progress_bar.println(format!(
                    "{} {} -> {} ({} rows)",
                    style_ok.apply_to("✓"),
                    csv_path.display(),
                    benchmark.id,
                    benchmark.metrics.len(),
                ));
            },
            Err(error) => {
                rejected += 1;
                tracing::warn!(
                    path = %csv_path.display(),
                    %error,
                    "CSV rejected"
                );
                progress_bar.println(format!(
                    "{} {}: {}",
                    style_error.apply_to("✗"),
                    csv_path.display(),
                    error,
                ));
            },
        }
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    if rejected > 0 {
        return Err(
            format!("{rejected} of {} files were rejected", csv_paths.len())
                .into(),
        );
    }
    Ok(())
}
