//! Fetch unit: the (instrument, date, hour) key of one artifact.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::UnitError;

/// Identifies exactly one hourly archive artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchUnit {
    instrument: String,
    date: NaiveDate,
    hour: u32,
}

impl FetchUnit {
    /// Creates a fetch unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour` is not in `0..=23` or the instrument is empty.
    pub fn new(instrument: impl Into<String>, date: NaiveDate, hour: u32) -> Result<Self, UnitError> {
        let instrument = instrument.into();
        if instrument.is_empty() {
            return Err(UnitError::EmptyInstrument);
        }
        if hour > 23 {
            return Err(UnitError::InvalidHour(hour));
        }
        Ok(Self {
            instrument,
            date,
            hour,
        })
    }

    /// Builds a unit whose instrument is non-empty and whose hour is below 24.
    pub(crate) const fn from_valid_parts(instrument: String, date: NaiveDate, hour: u32) -> Self {
        Self {
            instrument,
            date,
            hour,
        }
    }

    /// Returns the instrument symbol, exactly as given.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the day of month (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the hour of day (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the start of this unit's hour, the anchor for record offsets.
    #[must_use]
    pub fn hour_anchor(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::MIN))
            + TimeDelta::hours(i64::from(self.hour))
    }
}

impl std::fmt::Display for FetchUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:02}h", self.instrument, self.date, self.hour)
    }
}

/// Combines a date and hour into an hour anchor (minute and second zero).
///
/// Returns `None` if `hour` is not in `0..=23`.
#[must_use]
pub fn hour_anchor(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unit_accessors() {
        let unit = FetchUnit::new("EURUSD", date(2024, 11, 3), 5).unwrap();
        assert_eq!(unit.instrument(), "EURUSD");
        assert_eq!(unit.year(), 2024);
        assert_eq!(unit.month(), 11);
        assert_eq!(unit.day(), 3);
        assert_eq!(unit.hour(), 5);
    }

    #[test]
    fn test_invalid_hour() {
        let result = FetchUnit::new("EURUSD", date(2024, 1, 1), 24);
        assert_eq!(result, Err(UnitError::InvalidHour(24)));
    }

    #[test]
    fn test_empty_instrument() {
        let result = FetchUnit::new("", date(2024, 1, 1), 0);
        assert_eq!(result, Err(UnitError::EmptyInstrument));
    }

    #[test]
    fn test_hour_anchor() {
        let unit = FetchUnit::new("EURUSD", date(2024, 11, 3), 5).unwrap();
        let anchor = unit.hour_anchor();
        assert_eq!(anchor.date_naive(), date(2024, 11, 3));
        assert_eq!(anchor.hour(), 5);
        assert_eq!(anchor.minute(), 0);
        assert_eq!(anchor.second(), 0);
        assert_eq!(anchor.nanosecond(), 0);
    }

    #[test]
    fn test_hour_anchor_rejects_hour() {
        assert!(hour_anchor(date(2024, 1, 1), 24).is_none());
    }
}
