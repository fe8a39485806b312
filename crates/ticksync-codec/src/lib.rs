//! bi5 artifact decoding for the ticksync tick archive mirror.
//!
//! This crate turns one compressed hourly artifact into rows:
//!
//! - [`decompress_bi5`] - LZMA decompression of the whole artifact
//! - [`encode_record`] - The 20-byte big-endian record layout
//! - [`decode`] - Decompression and parsing into a lazy [`Rows`] sequence

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ticksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decode;
mod decompress;
mod parse;

pub use decode::{Rows, decode};
pub use decompress::{DecodeError, decompress_bi5};
pub use parse::encode_record;
