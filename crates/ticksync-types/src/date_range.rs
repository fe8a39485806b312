//! Date range and fetch unit enumeration.

use chrono::NaiveDate;

use crate::{DateRangeError, FetchUnit, UnitError};

/// Hours per calendar day; one artifact each.
pub const HOURS_PER_DAY: u32 = 24;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns every fetch unit of the range for `instrument`, date-major and
    /// hour-minor, both ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the instrument symbol is empty.
    pub fn units(&self, instrument: &str) -> Result<UnitIterator, UnitError> {
        if instrument.is_empty() {
            return Err(UnitError::EmptyInstrument);
        }
        Ok(UnitIterator {
            instrument: instrument.to_string(),
            current: Some(self.start),
            end: self.end,
            hour: 0,
        })
    }

    /// Returns the total number of units (hours) in the range.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.total_days() * HOURS_PER_DAY as usize
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over the fetch units of a date range.
#[derive(Debug, Clone)]
pub struct UnitIterator {
    instrument: String,
    current: Option<NaiveDate>,
    end: NaiveDate,
    hour: u32,
}

impl Iterator for UnitIterator {
    type Item = FetchUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.current.filter(|date| *date <= self.end)?;
        let unit = FetchUnit::from_valid_parts(self.instrument.clone(), date, self.hour);

        self.hour += 1;
        if self.hour == HOURS_PER_DAY {
            self.hour = 0;
            self.current = date.succ_opt();
        }
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.current {
            Some(date) if date <= self.end => {
                let days = (self.end - date).num_days() as usize + 1;
                days * HOURS_PER_DAY as usize - self.hour as usize
            }
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UnitIterator {}
