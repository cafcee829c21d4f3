//! CLI argument definitions for stockfolio.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `import` | Validate a price CSV and summarize its contents |
//! | `stats` | Per-stock return statistics and histogram arrays |
//! | `allocate` | Run the confidence-based Monte Carlo allocator |
//! | `report` | Allocate and render the plain-text weight report |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// stockfolio - confidence-based stock portfolio allocation
///
/// Load historical stock prices from a CSV, inspect per-stock return
/// distributions, and allocate portfolio weights with a Monte Carlo
/// procedure that scores candidates by a low percentile of simulated
/// outcomes.
#[derive(Debug, Parser)]
#[command(
    name = "stockfolio",
    author,
    version,
    about = "Confidence-based stock portfolio allocation"
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - ndjson: One JSON object per line
    /// - table: Plain-text format for terminal display
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    ///
    /// Useful for CI/CD pipelines that need strict validation.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a price CSV and summarize the imported series.
    ///
    /// # Examples
    ///
    ///   stockfolio import prices.csv
    ///   stockfolio import prices.csv --pretty
    Import(ImportArgs),

    /// Compute return statistics and histogram arrays for one stock.
    ///
    /// Outputs mean, std, quantiles, and the numeric arrays (returns,
    /// prices, histogram counts and bin edges) a plotting tool needs.
    ///
    /// # Examples
    ///
    ///   stockfolio stats prices.csv NVO
    ///   stockfolio stats prices.csv DE --bins 30
    Stats(StatsArgs),

    /// Allocate portfolio weights across all imported stocks.
    ///
    /// # Examples
    ///
    ///   stockfolio allocate prices.csv
    ///   stockfolio allocate prices.csv --iterations 50000 --seed 42
    Allocate(AllocateArgs),

    /// Allocate and render the plain-text weight report.
    ///
    /// # Examples
    ///
    ///   stockfolio report prices.csv --seed 42 --format table
    Report(ReportArgs),
}

/// Arguments for the `import` command.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the CSV file (ticker,date,price columns).
    pub file: PathBuf,
}

/// Arguments for the `stats` command.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Path to the CSV file (ticker,date,price columns).
    pub file: PathBuf,

    /// Ticker to describe.
    pub ticker: String,

    /// Number of histogram bins for the return distribution.
    #[arg(long, default_value_t = 20)]
    pub bins: usize,
}

/// Shared Monte Carlo parameters for `allocate` and `report`.
#[derive(Debug, Args)]
pub struct AllocateArgs {
    /// Path to the CSV file (ticker,date,price columns).
    pub file: PathBuf,

    /// Number of candidate weight vectors to evaluate.
    #[arg(long, default_value_t = 10_000)]
    pub iterations: usize,

    /// RNG seed for reproducible runs; omitted means OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Percentile of simulated outcomes used as the score, in (0, 0.5].
    #[arg(long, default_value_t = 0.05)]
    pub confidence: f64,

    /// Bootstrap samples drawn per candidate.
    #[arg(long, default_value_t = 256)]
    pub samples: usize,
}

/// Arguments for the `report` command.
#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub allocate: AllocateArgs,
}
