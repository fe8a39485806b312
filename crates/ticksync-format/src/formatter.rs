//! Output format abstraction.

use std::io::Write;
use thiserror::Error;
use ticksync_types::Row;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Row sink: writes an optional header, then appends one row at a time.
pub trait Formatter: Send + Sync {
    /// Writes the header, if the format has one.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_header<W: Write>(&self, writer: &mut W) -> Result<(), FormatError>;

    /// Appends one row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_row<W: Write>(&self, row: &Row, writer: &mut W) -> Result<(), FormatError>;

    /// Writes the header followed by every row, returning the row count.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_rows<W, I>(&self, rows: I, mut writer: W) -> Result<usize, FormatError>
    where
        W: Write,
        I: IntoIterator<Item = Row>,
    {
        self.write_header(&mut writer)?;
        let mut count = 0;
        for row in rows {
            self.write_row(&row, &mut writer)?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
