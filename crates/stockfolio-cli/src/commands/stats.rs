use serde_json::json;
use stockfolio_core::{compute_stats, histogram, Ticker};

use crate::cli::StatsArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &StatsArgs) -> Result<CommandResult, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;
    let portfolio = super::load_portfolio(&args.file)?;

    let series = portfolio.series(&ticker).ok_or_else(|| {
        CliError::Command(format!("ticker '{ticker}' not present in input file"))
    })?;

    let stats = compute_stats(series)?;
    let return_histogram = histogram(series.returns(), args.bins)?;

    Ok(CommandResult::ok(json!({
        "ticker": ticker.as_str(),
        "stats": stats,
        "histogram": return_histogram,
        "returns": series.returns(),
        "prices": series.prices(),
    })))
}
