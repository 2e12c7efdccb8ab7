//! Add command implementation

use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;
use strcalc_core::Calculator;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, Source};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};

/// Arguments for the add command
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Expressions to sum, e.g. "1,2,3" (use `--` before expressions starting with '-')
    #[arg(value_name = "EXPR")]
    pub expressions: Vec<String>,

    /// Input files or patterns (supports glob); each file is one input
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Read one input from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Expand \n, \r, \t and \\ in expressions
    #[arg(short, long)]
    pub escapes: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let calculator = Calculator::with_config(config.calculator_config()?)?;

        let sources = self.collect_sources(&config)?;
        let show_labels = sources.len() > 1;
        let format = self.format.unwrap_or(config.output.default_format);
        log::info!("Summing {} input(s) as {}", sources.len(), format.as_str());

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::stdout(show_labels)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(io::stdout(), config.output.pretty_json))
            }
        };

        let failures = run(&calculator, sources, formatter.as_mut(), show_labels)?;
        if failures > 0 {
            return Err(CliError::CalculationFailed(failures).into());
        }

        Ok(())
    }

    /// Gather expressions, files and stdin into labelled sources
    fn collect_sources(&self, config: &CliConfig) -> Result<Vec<Source>> {
        let interpret_escapes = self.escapes || config.calculation.interpret_escapes;

        let mut sources: Vec<Source> = self
            .expressions
            .iter()
            .map(|raw| Source::expression(raw, interpret_escapes))
            .collect();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::debug!("Resolved {} file(s)", files.len());
            sources.extend(files.into_iter().map(Source::file));
        }

        if self.stdin {
            sources.push(Source::stdin());
        }

        if sources.is_empty() {
            return Err(CliError::NoInput.into());
        }

        Ok(sources)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // a logger may already be installed when running inside tests
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

/// Calculate every source, reporting failures on stderr. Returns the failure count.
pub fn run(
    calculator: &Calculator,
    sources: Vec<Source>,
    formatter: &mut dyn OutputFormatter,
    show_labels: bool,
) -> Result<usize> {
    let mut failures = 0;

    for Source { label, input } in sources {
        match calculator.process(input) {
            Ok(calculation) => formatter.format_result(&label, &calculation)?,
            Err(e) => {
                failures += 1;
                if show_labels {
                    eprintln!("{}: {e}", label.escape_debug());
                } else {
                    eprintln!("{e}");
                }
                formatter.format_error(&label, &e)?;
            }
        }
    }

    formatter.finish()?;
    Ok(failures)
}
