//! Artifact to row decoding.

use chrono::{DateTime, Utc};
use ticksync_types::{Row, TickRecord};

use crate::{DecodeError, decompress_bi5, parse::parse_record};

/// Decodes a compressed bi5 artifact into rows anchored at `hour_anchor`.
///
/// The artifact is decompressed in full before any row is produced, so a
/// corrupt artifact yields an error and no rows at all. Rows come out in
/// record order and are not re-sorted by timestamp.
///
/// # Errors
///
/// Returns an error if the artifact cannot be decompressed.
///
/// # Example
///
/// ```ignore
/// use ticksync_codec::decode;
///
/// let bytes = std::fs::read("EURUSD_20241103_05h_ticks.bi5")?;
/// for row in decode(&bytes, unit.hour_anchor())? {
///     println!("{} {} {}", row.timestamp, row.ask, row.bid);
/// }
/// ```
pub fn decode(artifact: &[u8], hour_anchor: DateTime<Utc>) -> Result<Rows, DecodeError> {
    let data = decompress_bi5(artifact)?;
    Ok(Rows::new(data, hour_anchor))
}

/// Lazy row sequence over a decompressed artifact.
#[derive(Debug, Clone)]
pub struct Rows {
    data: Vec<u8>,
    position: usize,
    hour_anchor: DateTime<Utc>,
}

impl Rows {
    /// Creates a row sequence over already decompressed record data.
    #[must_use]
    pub const fn new(data: Vec<u8>, hour_anchor: DateTime<Utc>) -> Self {
        Self {
            data,
            position: 0,
            hour_anchor,
        }
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.position + TickRecord::SIZE;
        let chunk = self.data.get(self.position..end)?;
        self.position = end;
        Some(parse_record(chunk).to_row(self.hour_anchor))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.position) / TickRecord::SIZE;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}
