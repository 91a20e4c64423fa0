//! Command-line interface for running the registered puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

use std::process::ExitCode;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use puzzle_solver::SolverRegistryBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());
    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Executor(e)) => {
            let failures = e.flatten();
            eprintln!("{} failure(s):", failures.len());
            for failure in failures {
                eprintln!("  - {}", failure);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v` flags
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config) -> Result<(), CliError> {
    let registry = puzzle_solutions::register_all(SolverRegistryBuilder::new())?.build();
    let executor = Executor::new(registry, config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    let outcome = executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    outcome.map_err(CliError::from)
}
