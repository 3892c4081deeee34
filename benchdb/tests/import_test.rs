mod common;

use benchdb::{
    ImportError, PerformanceMetrics, import_csv,
    ingest::{IngestError, StandardField},
    validation::validate_config,
};
use is_close::is_close;

#[test]
fn test_import_sample_file() {
    let import = import_csv(&common::read_fixture("bench-sample.csv")).unwrap();

    assert_eq!(import.mapping.len(), StandardField::ALL.len());
    assert_eq!(import.metrics.len(), 3);

    let first = import.metrics[0];
    assert_eq!(first.concurrency, 1);
    assert_eq!(first.input_length, 128);
    assert!(is_close!(first.tokens_per_second, 42.75));
    assert!(is_close!(first.tpot, 2.1836));

    let second = import.metrics[1];
    assert!(is_close!(second.ttft, 25.0));
    assert!(is_close!(second.tpot, 1.2305));

    let third = import.metrics[2];
    assert_eq!(third.tpot, 0.0);
    assert_eq!(third.concurrency, 4);
}

#[test]
fn test_import_vendor_headers_in_seconds() {
    let import =
        import_csv(&common::read_fixture("vendor-seconds.csv")).unwrap();

    let ttft = import.mapping.get(StandardField::Ttft).unwrap();
    assert_eq!(ttft.source_column, "Mean TTFT (s)");
    assert_eq!(ttft.conversion_factor, 1000.0);

    let tps = import.mapping.get(StandardField::Tps).unwrap();
    assert_eq!(tps.conversion_factor, 1.0);

    let metric = import.metrics[0];
    assert_eq!(metric.concurrency, 8);
    assert_eq!(metric.input_length, 2048);
    assert_eq!(metric.output_length, 256);
    assert!(is_close!(metric.ttft, 125.0));
    assert!(is_close!(metric.tpot, 10.0));
}

#[test]
fn test_import_single_row() {
    let import = import_csv(
        "Process Num,Input Length,Output Length,TTFT (ms),TPS (with prefill),Total Time (ms)\n1,100,50,20,10,120\n",
    )
    .unwrap();

    assert_eq!(import.metrics, vec![PerformanceMetrics {
        input_length: 100,
        output_length: 50,
        concurrency: 1,
        ttft: 20.0,
        tpot: 2.0,
        tokens_per_second: 10.0,
    }]);
}

#[test]
fn test_import_rejects_whole_file_on_bad_cell() {
    let error = import_csv(
        "Process Num,Input Length,Output Length,TTFT (ms),TPS (with prefill)\n1,100,50,20,10\n2,notANumber,50,20,10\n",
    )
    .unwrap_err();

    assert_eq!(
        error,
        ImportError::Ingest(IngestError::InvalidNumericData {
            row: 2,
            column: "Input Length".to_string(),
            value: "notANumber".to_string(),
        })
    );
    assert!(error.to_string().contains("CSV contains invalid numeric data"));
}

#[test]
fn test_import_reports_missing_columns() {
    let error = import_csv(
        "Process Num,Input Length,Output Length,TPS (with prefill)\n1,100,50,10\n",
    )
    .unwrap_err();

    assert_eq!(
        error,
        ImportError::Ingest(IngestError::MissingColumns {
            missing: vec![StandardField::Ttft],
        })
    );
    assert!(error.to_string().contains("CSV"));
}

#[test]
fn test_import_rejects_out_of_range_metrics() {
    let error = import_csv(
        "Process Num,Input Length,Output Length,TTFT (ms),TPS (with prefill)\n0,100,50,20,10\n",
    )
    .unwrap_err();

    assert!(matches!(error, ImportError::Validation(_)));
    assert!(error.to_string().starts_with("Validation error in CSV row:"));
}

#[test]
fn test_sample_config_is_valid() {
    assert_eq!(validate_config(&common::sample_config("Qwen3-32B")), Ok(()));
}

#[test]
fn test_vendor_aliases_match_standard_headers() {
    let rows = "1,100,50,20,10\n4,2048,512,85.5,640.25\n";
    let standard = import_csv(&format!(
        "Process Num,Input Length,Output Length,TTFT (ms),TPS (with prefill)\n{rows}"
    ))
    .unwrap();
    let vendor = import_csv(&format!(
        "parallel,total input,total output,Mean TTFT,output throughput (tok/s)\n{rows}"
    ))
    .unwrap();

    assert_eq!(vendor.metrics, standard.metrics);
    for field in StandardField::REQUIRED {
        assert_eq!(
            vendor.mapping.get(field).map(|binding| binding.column_index),
            standard.mapping.get(field).map(|binding| binding.column_index),
        );
    }
}
