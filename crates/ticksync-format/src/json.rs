//! Newline-delimited JSON output format.

use std::io::Write;
use ticksync_types::Row;

use crate::{FormatError, Formatter};

/// NDJSON formatter: one JSON object per row, no header.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn write_header<W: Write>(&self, _writer: &mut W) -> Result<(), FormatError> {
        Ok(())
    }

    fn write_row<W: Write>(&self, row: &Row, writer: &mut W) -> Result<(), FormatError> {
        serde_json::to_writer(&mut *writer, row)?;
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "ndjson"
    }
}
