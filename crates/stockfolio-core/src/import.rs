//! Spreadsheet-style price data import.
//!
//! Expects a CSV with a `ticker,date,price` header, one observation per
//! row, ISO-8601 dates. Rows for one ticker must appear in increasing
//! date order. Row numbers in errors are 1-based over the data rows
//! (header excluded).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::domain::{Observation, ObservationDate, StockSeries, Ticker};
use crate::error::{CoreError, ValidationError};

/// Load stock series from a CSV file on disk.
pub fn import_csv(path: impl AsRef<Path>) -> Result<BTreeMap<Ticker, StockSeries>, CoreError> {
    let file = File::open(path.as_ref())?;
    let series = read_series(file)?;
    info!(
        path = %path.as_ref().display(),
        tickers = series.len(),
        "imported stock data"
    );
    Ok(series)
}

/// Load stock series from any CSV reader.
pub fn read_series<R: Read>(input: R) -> Result<BTreeMap<Ticker, StockSeries>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let ticker_col = column(&headers, "ticker")?;
    let date_col = column(&headers, "date")?;
    let price_col = column(&headers, "price")?;

    let mut observations: BTreeMap<Ticker, Vec<Observation>> = BTreeMap::new();

    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record?;

        let ticker = Ticker::parse(field(&record, ticker_col, row, "ticker")?)
            .map_err(|error| malformed(row, error.to_string()))?;
        let date = ObservationDate::parse(field(&record, date_col, row, "date")?)
            .map_err(|error| malformed(row, error.to_string()))?;
        let price = parse_price(field(&record, price_col, row, "price")?, row)?;

        let entries = observations.entry(ticker.clone()).or_default();
        if let Some(last) = entries.last() {
            if date <= last.date {
                return Err(malformed(
                    row,
                    format!("date {date} for '{ticker}' does not increase"),
                )
                .into());
            }
        }

        let observation =
            Observation::new(date, price).map_err(|error| malformed(row, error.to_string()))?;
        entries.push(observation);
    }

    observations
        .into_iter()
        .map(|(ticker, entries)| {
            StockSeries::new(ticker.clone(), entries)
                .map(|series| (ticker, series))
                .map_err(CoreError::from)
        })
        .collect()
}

fn column(headers: &csv::StringRecord, name: &'static str) -> Result<usize, ValidationError> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or(ValidationError::MissingColumn { name })
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    row: usize,
    name: &str,
) -> Result<&'r str, ValidationError> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| malformed(row, format!("missing '{name}' field")))
}

fn parse_price(raw: &str, row: usize) -> Result<f64, ValidationError> {
    raw.parse::<f64>()
        .map_err(|_| malformed(row, format!("price '{raw}' is not numeric")))
}

fn malformed(row: usize, reason: String) -> ValidationError {
    ValidationError::DataFormat { row, reason }
}
