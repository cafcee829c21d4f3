use serde_json::json;

use crate::cli::ImportArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ImportArgs) -> Result<CommandResult, CliError> {
    let portfolio = super::load_portfolio(&args.file)?;

    let tickers: Vec<_> = portfolio
        .all_series()
        .map(|series| {
            json!({
                "ticker": series.ticker().as_str(),
                "observations": series.len(),
                "first_date": series.first_date().map(|d| d.format_iso()),
                "last_date": series.last_date().map(|d| d.format_iso()),
            })
        })
        .collect();
    let total_observations: usize = portfolio.all_series().map(|series| series.len()).sum();

    let mut result = CommandResult::ok(json!({
        "tickers": tickers,
        "ticker_count": portfolio.len(),
        "total_observations": total_observations,
    }));

    if portfolio.is_empty() {
        result = result.with_warning("input file contains no data rows");
    }

    Ok(result)
}
