//! Fixed-width tick record layout.

use byteorder::{BigEndian, ByteOrder};
use ticksync_types::TickRecord;

/// Parses a single record from a 20-byte chunk.
#[inline]
pub(crate) fn parse_record(data: &[u8]) -> TickRecord {
    TickRecord::new(
        BigEndian::read_u32(&data[0..4]),
        BigEndian::read_i32(&data[4..8]),
        BigEndian::read_i32(&data[8..12]),
        BigEndian::read_i32(&data[12..16]),
        BigEndian::read_i32(&data[16..20]),
    )
}

/// Encodes a record into its 20-byte big-endian form.
#[must_use]
pub fn encode_record(record: &TickRecord) -> [u8; TickRecord::SIZE] {
    let mut bytes = [0u8; TickRecord::SIZE];
    BigEndian::write_u32(&mut bytes[0..4], record.offset_ms);
    BigEndian::write_i32(&mut bytes[4..8], record.ask_raw);
    BigEndian::write_i32(&mut bytes[8..12], record.bid_raw);
    BigEndian::write_i32(&mut bytes[12..16], record.ask_volume);
    BigEndian::write_i32(&mut bytes[16..20], record.bid_volume);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_record() {
        let record = TickRecord::new(1000, 112_345, 112_340, 100, 200);
        assert_eq!(parse_record(&encode_record(&record)), record);
    }

    #[test]
    fn test_parse_big_endian_layout() {
        let bytes = [
            0x00, 0x00, 0x05, 0xDC, // 1500
            0x00, 0x01, 0xAA, 0xB2, // 109234
            0x00, 0x01, 0xAA, 0x9A, // 109210
            0x00, 0x00, 0x00, 0x03, //
            0xFF, 0xFF, 0xFF, 0xFF, // -1
        ];
        let record = parse_record(&bytes);

        assert_eq!(record.offset_ms, 1500);
        assert_eq!(record.ask_raw, 109_234);
        assert_eq!(record.bid_raw, 109_210);
        assert_eq!(record.ask_volume, 3);
        assert_eq!(record.bid_volume, -1);
    }
}
