//! Whole-artifact LZMA decompression.

use lzma_rs::lzma_decompress;
use std::io::Cursor;
use thiserror::Error;

/// Why an artifact produced no rows.
///
/// Decoding is all or nothing per artifact: when any of these is returned the
/// caller gets no rows from that artifact, and other artifacts are unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The artifact is not a complete `.lzma` ("alone" format) stream.
    #[error("Artifact is not a valid LZMA stream: {0}")]
    Lzma(String),

    /// The artifact has zero bytes.
    #[error("Artifact is empty")]
    EmptyInput,
}

/// Decompresses a bi5 artifact into its raw record bytes.
///
/// The artifact is one LZMA stream over the whole hour. The returned buffer
/// is the concatenation of 20-byte records, possibly followed by a shorter
/// tail, which callers ignore.
///
/// # Errors
///
/// [`DecodeError::EmptyInput`] for a zero-length artifact and
/// [`DecodeError::Lzma`] for anything the decoder rejects, including a
/// truncated stream.
pub fn decompress_bi5(artifact: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if artifact.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut records = Vec::new();
    lzma_decompress(&mut Cursor::new(artifact), &mut records)
        .map_err(|e| DecodeError::Lzma(e.to_string()))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzma_rs::lzma_compress;

    #[test]
    fn test_empty_input() {
        assert_eq!(decompress_bi5(&[]), Err(DecodeError::EmptyInput));
    }

    #[test]
    fn test_invalid_lzma() {
        let result = decompress_bi5(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::Lzma(_))));
    }

    #[test]
    fn test_decompress_valid_stream() {
        let payload = b"twenty byte payload!".repeat(3);
        let mut compressed = Vec::new();
        lzma_compress(&mut Cursor::new(&payload), &mut compressed).unwrap();

        assert_eq!(decompress_bi5(&compressed).unwrap(), payload);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DecodeError::EmptyInput.to_string(), "Artifact is empty");
        assert!(
            DecodeError::Lzma("eof".into())
                .to_string()
                .starts_with("Artifact is not a valid LZMA stream")
        );
    }
}
