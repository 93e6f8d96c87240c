// src/infrastructure/console.rs
use crate::application::{
    dto::CheckRecord,
    error::{ApplicationError, ApplicationResult},
    ports::output::DiagnosticSink,
};
use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
    sync::Mutex,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One bare value per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Writes each record as a single line to `W`.
pub struct ConsoleSink<W> {
    format: OutputFormat,
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out: Mutex::new(out),
        }
    }
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write + Send> DiagnosticSink for ConsoleSink<W> {
    fn emit(&self, record: &CheckRecord) -> ApplicationResult<()> {
        let line = match self.format {
            OutputFormat::Text => record.raw_value(),
            OutputFormat::Json => serde_json::to_string(record)?,
        };
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::output("console writer lock poisoned"))?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
