//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use strcalc_core::{CalcError, Calculation, Delimiters};

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultData {
    /// Label of the input (expression, file path or `<stdin>`)
    pub source: String,
    /// Sum of the terms, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
    /// Terms that were summed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<i64>>,
    /// Delimiters in effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiters: Option<Delimiters>,
    /// Error message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, calculation: &Calculation) -> Result<()> {
        self.results.push(ResultData {
            source: source.to_string(),
            sum: Some(calculation.sum),
            terms: Some(calculation.terms.clone()),
            delimiters: Some(calculation.delimiters.clone()),
            error: None,
        });
        Ok(())
    }

    fn format_error(&mut self, source: &str, error: &CalcError) -> Result<()> {
        self.results.push(ResultData {
            source: source.to_string(),
            sum: None,
            terms: None,
            delimiters: None,
            error: Some(error.to_string()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
