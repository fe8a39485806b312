//! CSV output format.

use std::io::Write;
use ticksync_types::Row;

use crate::{FormatError, Formatter};

/// Timestamp layout of a CSV row, microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_header<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        if self.include_header {
            let d = self.delimiter;
            writeln!(writer, "timestamp{d}ask{d}bid{d}ask_volume{d}bid_volume")?;
        }
        Ok(())
    }

    fn write_row<W: Write>(&self, row: &Row, writer: &mut W) -> Result<(), FormatError> {
        let d = self.delimiter;
        // `{:?}` is the shortest round-trip form and always keeps a decimal point.
        writeln!(
            writer,
            "{}{d}{:?}{d}{:?}{d}{}{d}{}",
            row.timestamp.format(TIMESTAMP_FORMAT),
            row.ask,
            row.bid,
            row.ask_volume,
            row.bid_volume
        )?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
