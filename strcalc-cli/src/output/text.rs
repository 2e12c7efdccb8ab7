//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use strcalc_core::{CalcError, Calculation};

/// Plain text formatter - outputs one sum per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_labels: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter; labels prefix each sum when `show_labels` is set
    pub fn new(writer: W, show_labels: bool) -> Self {
        Self {
            writer,
            show_labels,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(show_labels: bool) -> Self {
        Self::new(io::stdout(), show_labels)
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, calculation: &Calculation) -> Result<()> {
        if self.show_labels {
            writeln!(self.writer, "{}: {}", source.escape_debug(), calculation.sum)?;
        } else {
            writeln!(self.writer, "{}", calculation.sum)?;
        }
        Ok(())
    }

    // failures are reported on stderr by the caller
    fn format_error(&mut self, _source: &str, _error: &CalcError) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
