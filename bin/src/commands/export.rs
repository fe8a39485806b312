//! Export command implementation.
//!
//! Decodes every mirrored artifact of a date range, in enumeration order,
//! into a single output file. Units without a local artifact are skipped and
//! artifacts that fail to decode are reported without stopping the export.

use crate::display::{Format, create_parent_dir, parse_range};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use ticksync_lib::address;
use ticksync_lib::prelude::*;

/// Counts of an export.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExportSummary {
    pub(crate) converted: usize,
    pub(crate) missing: usize,
    pub(crate) failed: usize,
    pub(crate) rows: usize,
}

/// Export an instrument's mirrored artifacts for a date range.
pub(crate) fn export(
    instrument: &str,
    start_str: &str,
    end_str: &str,
    output_folder: &Path,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let range = parse_range(start_str, end_str)?;
    let units = range.units(instrument)?;
    let output =
        output.unwrap_or_else(|| PathBuf::from(format!("{instrument}.{}", format.extension())));

    create_parent_dir(&output)?;
    let file =
        File::create(&output).with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let summary = match format {
        Format::Csv => export_units(&CsvFormatter::new(), units, output_folder, &mut writer)?,
        Format::Ndjson => export_units(&JsonFormatter::new(), units, output_folder, &mut writer)?,
    };
    writer.flush()?;

    if !quiet {
        println!(
            "Exported {} rows from {} files to {} ({} missing, {} failed)",
            summary.rows,
            summary.converted,
            output.display(),
            summary.missing,
            summary.failed
        );
    }

    Ok(())
}

/// Appends the rows of every unit's local artifact to `writer`.
pub(crate) fn export_units<F, W>(
    formatter: &F,
    units: impl IntoIterator<Item = FetchUnit>,
    output_folder: &Path,
    writer: &mut W,
) -> Result<ExportSummary>
where
    F: Formatter,
    W: Write,
{
    let mut summary = ExportSummary::default();
    formatter.write_header(writer)?;

    for unit in units {
        let path = address(&unit, output_folder).local;
        if !path.is_file() {
            summary.missing += 1;
            continue;
        }

        let rows = match std::fs::read(&path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| Ok(decode(&bytes, unit.hour_anchor())?))
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(%unit, path = %path.display(), error = %e, "skipping artifact");
                summary.failed += 1;
                continue;
            }
        };

        for row in rows {
            formatter.write_row(&row, writer)?;
            summary.rows += 1;
        }
        summary.converted += 1;
    }

    Ok(summary)
}
