//! Display utilities and argument helpers for the ticksync CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;
use ticksync_lib::prelude::*;
use ticksync_lib::{OutputFormat, UnitAddress};

/// Output format for decoded rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        self.output_format().extension()
    }

    pub(crate) const fn output_format(&self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Ndjson => OutputFormat::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Parses a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid {what}: {s}"))
}

/// Parses an inclusive start/end date pair.
pub(crate) fn parse_range(start: &str, end: &str) -> Result<DateRange> {
    let start = parse_date(start, "start date")?;
    let end = parse_date(end, "end date")?;
    Ok(DateRange::new(start, end)?)
}

/// Creates the parent directory of `path`, if it has one.
pub(crate) fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Describes one unit's sync outcome for the console.
pub(crate) fn describe_outcome(outcome: &SyncOutcome, address: &UnitAddress) -> String {
    match outcome {
        SyncOutcome::Skipped(reason) => {
            format!("Skipped ({reason}): {}", address.local.display())
        }
        SyncOutcome::Downloaded { .. } => format!("Downloaded: {}", address.local.display()),
        SyncOutcome::Failed(err) => format!("Failed {}: {err}", address.remote),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ticksync_lib::{SkipReason, SyncError, TransferError};

    fn address() -> UnitAddress {
        UnitAddress {
            remote: "https://example.test/EURUSD/2024/11/03/05h_ticks.bi5".to_string(),
            local: PathBuf::from("out/EURUSD/EURUSD_20241103_05h_ticks.bi5"),
        }
    }

    #[test]
    fn test_parse_range() {
        let range = parse_range("2024-11-01", "2024-11-03").unwrap();
        assert_eq!(range.total_days(), 3);
        assert!(parse_range("2024-11-03", "2024-11-01").is_err());
        assert!(parse_range("2024/11/01", "2024-11-03").is_err());
    }

    #[test]
    fn test_describe_outcome() {
        let skipped = describe_outcome(&SyncOutcome::Skipped(SkipReason::SizeMatch), &address());
        assert_eq!(
            skipped,
            format!("Skipped (size match): {}", address().local.display())
        );

        let failed = describe_outcome(
            &SyncOutcome::Failed(SyncError::Transfer(TransferError::Status { status: 404 })),
            &address(),
        );
        assert_eq!(
            failed,
            "Failed https://example.test/EURUSD/2024/11/03/05h_ticks.bi5: No data (status 404)"
        );
    }
}
