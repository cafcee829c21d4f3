use serde_json::json;
use stockfolio_core::{AllocatorConfig, ConfidenceAllocator};

use crate::cli::AllocateArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &AllocateArgs) -> Result<CommandResult, CliError> {
    let mut portfolio = super::load_portfolio(&args.file)?;

    let allocator = ConfidenceAllocator::new(AllocatorConfig {
        iterations: args.iterations,
        seed: args.seed,
        confidence: args.confidence,
        samples_per_round: args.samples,
    });
    let outcome = allocator.allocate(&mut portfolio)?;

    let mut result = CommandResult::ok(json!({
        "weights": outcome.weights,
        "score": outcome.score,
        "best_round": outcome.best_round,
        "iterations": outcome.iterations,
        "seed": outcome.seed,
    }));

    if let Some(warning) = super::seed_warning(args) {
        result = result.with_warning(warning);
    }

    Ok(result)
}
