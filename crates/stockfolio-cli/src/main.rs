mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let envelope = commands::run(&cli)?;
    output::render(&envelope, cli.format, cli.pretty)?;
    commands::enforce_strict(cli.strict, &envelope)?;

    Ok(())
}
