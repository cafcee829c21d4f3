mod allocate;
mod import;
mod report;
mod stats;

use std::path::Path;
use std::time::Instant;

use serde_json::Value;
use stockfolio_core::{import_csv, Envelope, EnvelopeMeta, Portfolio};
use uuid::Uuid;

use crate::cli::{AllocateArgs, Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Import(args) => import::run(args)?,
        Command::Stats(args) => stats::run(args)?,
        Command::Allocate(args) => allocate::run(args)?,
        Command::Report(args) => report::run(args)?,
    };

    let CommandResult { data, warnings } = command_result;

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        "v1.0.0",
        started.elapsed().as_millis() as u64,
    )?;

    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Envelope::success(meta, data))
}

/// Escalate warnings to a failure when `--strict` is set.
pub fn enforce_strict(strict: bool, envelope: &Envelope<Value>) -> Result<(), CliError> {
    if strict && !envelope.meta.warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
        });
    }

    Ok(())
}

/// Import a CSV and wrap the series into an unallocated portfolio.
fn load_portfolio(path: &Path) -> Result<Portfolio, CliError> {
    let series = import_csv(path)?;
    Ok(Portfolio::from_map(series))
}

/// Seed-absence warning shared by `allocate` and `report`.
fn seed_warning(args: &AllocateArgs) -> Option<String> {
    args.seed.is_none().then(|| {
        String::from("no --seed supplied; allocation results are not reproducible")
    })
}
