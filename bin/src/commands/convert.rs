//! Convert command implementation.

use crate::display::{Format, create_parent_dir, parse_date};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use ticksync_lib::hour_anchor;
use ticksync_lib::prelude::*;

/// Convert one bi5 artifact into a row file.
pub(crate) fn convert(
    bi5_file: &Path,
    output: &Path,
    date_str: &str,
    hour: u32,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let date = parse_date(date_str, "date")?;
    let anchor = hour_anchor(date, hour).with_context(|| format!("Invalid hour: {hour}"))?;

    let compressed =
        std::fs::read(bi5_file).with_context(|| format!("Failed to read {}", bi5_file.display()))?;
    let rows = decode(&compressed, anchor)
        .with_context(|| format!("Error decompressing {}", bi5_file.display()))?;

    create_parent_dir(output)?;
    let file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let count = write_rows(rows, BufWriter::new(file), format)?;

    if !quiet {
        println!(
            "Converted: {} -> {} ({count} rows)",
            bi5_file.display(),
            output.display()
        );
    }

    Ok(())
}

/// Writes all rows with the formatter matching `format`.
fn write_rows<W: std::io::Write>(rows: Rows, writer: W, format: Format) -> Result<usize> {
    let count = match format {
        Format::Csv => CsvFormatter::new().write_rows(rows, writer)?,
        Format::Ndjson => JsonFormatter::new().write_rows(rows, writer)?,
    };
    Ok(count)
}
