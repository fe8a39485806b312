//! Tick data representation.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Fixed-point scale of the raw ask/bid integers in a bi5 record.
///
/// A raw price of `109234` is `1.09234`.
pub const PRICE_SCALE: f64 = 100_000.0;

/// One decoded output row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Timestamp of the tick (UTC).
    pub timestamp: DateTime<Utc>,
    /// Ask (offer) price.
    pub ask: f64,
    /// Bid price.
    pub bid: f64,
    /// Volume available at the ask price.
    pub ask_volume: i32,
    /// Volume available at the bid price.
    pub bid_volume: i32,
}

impl Row {
    /// Creates a new row.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        ask: f64,
        bid: f64,
        ask_volume: i32,
        bid_volume: i32,
    ) -> Self {
        Self {
            timestamp,
            ask,
            bid,
            ask_volume,
            bid_volume,
        }
    }
}

/// Raw tick record as stored in a decompressed bi5 artifact.
///
/// Each record is 20 bytes, big-endian:
/// - `u32`: milliseconds offset from the hour start
/// - `i32`: ask price (fixed-point, see [`PRICE_SCALE`])
/// - `i32`: bid price (fixed-point, see [`PRICE_SCALE`])
/// - `i32`: ask volume
/// - `i32`: bid volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRecord {
    /// Milliseconds offset from the hour start.
    pub offset_ms: u32,
    /// Raw ask price.
    pub ask_raw: i32,
    /// Raw bid price.
    pub bid_raw: i32,
    /// Ask volume.
    pub ask_volume: i32,
    /// Bid volume.
    pub bid_volume: i32,
}

impl TickRecord {
    /// Size in bytes of an encoded record.
    pub const SIZE: usize = 20;

    /// Creates a new record.
    #[must_use]
    pub const fn new(
        offset_ms: u32,
        ask_raw: i32,
        bid_raw: i32,
        ask_volume: i32,
        bid_volume: i32,
    ) -> Self {
        Self {
            offset_ms,
            ask_raw,
            bid_raw,
            ask_volume,
            bid_volume,
        }
    }

    /// Resolves the record against its hour anchor.
    ///
    /// The offset is added as given; it is not checked to stay inside the hour.
    #[must_use]
    pub fn to_row(self, hour_anchor: DateTime<Utc>) -> Row {
        Row {
            timestamp: hour_anchor + TimeDelta::milliseconds(i64::from(self.offset_ms)),
            ask: f64::from(self.ask_raw) / PRICE_SCALE,
            bid: f64::from(self.bid_raw) / PRICE_SCALE,
            ask_volume: self.ask_volume,
            bid_volume: self.bid_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_record_to_row() {
        let anchor = Utc.with_ymd_and_hms(2024, 11, 3, 5, 0, 0).unwrap();
        let row = TickRecord::new(1500, 109_234, 109_210, 3, 5).to_row(anchor);

        assert_eq!(row.timestamp, anchor + TimeDelta::milliseconds(1500));
        assert_relative_eq!(row.ask, 1.09234);
        assert_relative_eq!(row.bid, 1.09210);
        assert_eq!(row.ask_volume, 3);
        assert_eq!(row.bid_volume, 5);
    }

    #[test]
    fn test_offset_past_hour_is_kept() {
        let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
        let row = TickRecord::new(3_600_500, 0, 0, 0, 0).to_row(anchor);

        assert_eq!(
            row.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap() + TimeDelta::milliseconds(500)
        );
    }

    #[test]
    fn test_negative_raw_price() {
        let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let row = TickRecord::new(0, -150_000, 250, -1, 0).to_row(anchor);

        assert_relative_eq!(row.ask, -1.5);
        assert_relative_eq!(row.bid, 0.0025);
        assert_eq!(row.ask_volume, -1);
    }
}
