mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::batch::BatchArgs;
use commands::value::ValueArgs;

/// Late-payment valuation for installment debt instruments
#[derive(Parser)]
#[command(
    name = "debtval",
    version,
    about = "Late-payment valuation for installment debt instruments",
    long_about = "Computes days overdue and late-payment-adjusted values for debt \
                  instruments composed of installments, with decimal precision. \
                  Interest accrues daily at the monthly rate over a flat 30-day \
                  month; the penalty applies to every installment regardless of \
                  delay. Instrument payloads are JSON or YAML."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Valuate a single instrument against a reference date
    Value(ValueArgs),
    /// Register a file of instruments and list all their valuations
    Batch(BatchArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Value(args) => commands::value::run_value(args),
        Commands::Batch(args) => commands::batch::run_batch(args),
        Commands::Version => {
            println!("debtval {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
