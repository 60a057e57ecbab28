//! Output rendering: fixed-column tables or JSON

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table
    #[default]
    Table,
    /// JSON array, one object per row
    Json,
}

/// Renders command results to a writer (stdout in the binary)
pub struct OutputFormatter<W: Write> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> OutputFormatter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render `rows` with their fixed columns
    pub fn draw<R>(&mut self, rows: &[R]) -> Result<()>
    where
        R: Tabled + Serialize,
    {
        match self.format {
            OutputFormat::Table => {
                let mut table = Table::new(rows);
                table.with(Style::psql());
                writeln!(self.out, "{}", table)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, rows)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// One-line status message; suppressed in JSON mode
    pub fn notice(&mut self, message: impl std::fmt::Display) -> Result<()> {
        if self.format == OutputFormat::Table {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// RFC 3339 (seconds, `Z`), empty when the server did not send the field
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}
