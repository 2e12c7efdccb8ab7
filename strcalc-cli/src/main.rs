//! strcalc command-line entry point

use clap::Parser;
use strcalc_cli::commands::Commands;

/// Sum integers encoded in delimited strings
#[derive(Debug, Parser)]
#[command(name = "strcalc", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
