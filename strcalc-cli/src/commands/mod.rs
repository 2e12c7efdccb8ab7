//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::output::OutputFormat;

pub mod add;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sum the integers in each expression, file or stdin input
    Add(add::AddArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Add(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => {
                for (format, description) in OutputFormat::all() {
                    println!("{:<6} {}", format.as_str(), description);
                }
            }
        }
    }
}
