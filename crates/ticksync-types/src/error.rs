//! Error types for ticksync core types.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error for invalid fetch units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Hour is outside `0..=23`.
    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    /// Instrument symbol is empty.
    #[error("Instrument symbol is empty")]
    EmptyInstrument,
}
