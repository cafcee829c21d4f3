//! Behavior-driven tests for CSV import.
//!
//! These exercise the full file-to-portfolio path, including the
//! row-indexed error reporting a user relies on to fix a bad input.

use std::fs;

use tempfile::tempdir;

use stockfolio_tests::{
    compute_stats, import_csv, read_series, CoreError, Portfolio, Ticker, ValidationError,
};

const SAMPLE_CSV: &str = "\
ticker,date,price
NVO,2024-01-01,104.25
NVO,2024-01-02,105.10
NVO,2024-01-03,103.80
DE,2024-01-01,372.50
DE,2024-01-02,370.00
DE,2024-01-03,379.10
";

#[test]
fn when_file_is_valid_user_gets_one_series_per_ticker() {
    let dir = tempdir().expect("tempdir should create");
    let path = dir.path().join("prices.csv");
    fs::write(&path, SAMPLE_CSV).expect("fixture should write");

    let series = import_csv(&path).expect("import should succeed");
    assert_eq!(series.len(), 2);

    let nvo = &series[&Ticker::parse("NVO").expect("valid")];
    assert_eq!(nvo.len(), 3);
    assert_eq!(nvo.returns().len(), 2);
    assert_eq!(nvo.first_date().expect("has dates").format_iso(), "2024-01-01");
    assert_eq!(nvo.last_date().expect("has dates").format_iso(), "2024-01-03");
}

#[test]
fn imported_series_feed_statistics_directly() {
    let series = read_series(SAMPLE_CSV.as_bytes()).expect("import should succeed");
    let de = &series[&Ticker::parse("DE").expect("valid")];

    let stats = compute_stats(de).expect("stats should compute");
    assert!(stats.std > 0.0);
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
}

#[test]
fn imported_series_form_an_unallocated_portfolio() {
    let series = read_series(SAMPLE_CSV.as_bytes()).expect("import should succeed");
    let portfolio = Portfolio::from_map(series);

    assert_eq!(portfolio.len(), 2);
    assert!(!portfolio.is_allocated());
}

#[test]
fn when_price_is_not_numeric_error_names_the_row() {
    let input = "\
ticker,date,price
NVO,2024-01-01,104.25
NVO,2024-01-02,?!
NVO,2024-01-03,103.80
";
    let err = read_series(input.as_bytes()).expect_err("must fail");
    match err {
        CoreError::Validation(ValidationError::DataFormat { row, reason }) => {
            assert_eq!(row, 2, "error must point at the offending data row");
            assert!(reason.contains("'?!'"), "reason should quote the bad value: {reason}");
        }
        other => panic!("expected DataFormat, got {other:?}"),
    }
}

#[test]
fn when_a_field_is_missing_error_names_the_row() {
    let input = "ticker,date,price\nNVO,2024-01-01,104.25\nNVO,2024-01-02\n";
    let err = read_series(input.as_bytes()).expect_err("must fail");
    // A short record is surfaced either as a csv-level length error or a
    // row-indexed missing-field error; both fail the import loudly.
    match err {
        CoreError::Validation(ValidationError::DataFormat { row, .. }) => assert_eq!(row, 2),
        CoreError::Csv(_) => {}
        other => panic!("expected DataFormat or Csv, got {other:?}"),
    }
}

#[test]
fn when_header_is_missing_a_column_import_fails() {
    let input = "ticker,price\nNVO,104.25\n";
    let err = read_series(input.as_bytes()).expect_err("must fail");
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::MissingColumn { name: "date" })
    ));
}

#[test]
fn when_dates_regress_import_fails_with_the_row() {
    let input = "\
ticker,date,price
NVO,2024-01-05,104.25
NVO,2024-01-04,105.00
";
    let err = read_series(input.as_bytes()).expect_err("must fail");
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::DataFormat { row: 2, .. })
    ));
}

#[test]
fn interleaved_tickers_keep_per_ticker_ordering() {
    let input = "\
ticker,date,price
NVO,2024-01-01,100.0
DE,2024-01-01,372.5
NVO,2024-01-02,101.0
DE,2024-01-02,371.0
";
    let series = read_series(input.as_bytes()).expect("import should succeed");
    assert_eq!(series.len(), 2);
    assert_eq!(series[&Ticker::parse("NVO").expect("valid")].len(), 2);
    assert_eq!(series[&Ticker::parse("DE").expect("valid")].len(), 2);
}

#[test]
fn empty_input_yields_no_series() {
    let series = read_series("ticker,date,price\n".as_bytes()).expect("import should succeed");
    assert!(series.is_empty());
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempdir().expect("tempdir should create");
    let err = import_csv(dir.path().join("absent.csv")).expect_err("must fail");
    assert!(matches!(err, CoreError::Io(_)));
}
