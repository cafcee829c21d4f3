use std::collections::BTreeMap;

use serde_json::json;
use stockfolio_core::{compute_stats, render_report, AllocatorConfig, ConfidenceAllocator};

use crate::cli::ReportArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ReportArgs) -> Result<CommandResult, CliError> {
    let mut portfolio = super::load_portfolio(&args.allocate.file)?;

    let allocator = ConfidenceAllocator::new(AllocatorConfig {
        iterations: args.allocate.iterations,
        seed: args.allocate.seed,
        confidence: args.allocate.confidence,
        samples_per_round: args.allocate.samples,
    });
    let outcome = allocator.allocate(&mut portfolio)?;

    let stats = portfolio
        .all_series()
        .map(|series| Ok((series.ticker().clone(), compute_stats(series)?)))
        .collect::<Result<BTreeMap<_, _>, CliError>>()?;

    let report = render_report(&portfolio, Some(&stats));

    let mut result = CommandResult::ok(json!({
        "report": report,
        "weights": outcome.weights,
        "score": outcome.score,
        "iterations": outcome.iterations,
        "seed": outcome.seed,
    }));

    if let Some(warning) = super::seed_warning(&args.allocate) {
        result = result.with_warning(warning);
    }

    Ok(result)
}
