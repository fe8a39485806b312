//! Row output formatters for the ticksync tick archive mirror.
//!
//! This crate provides formatters that append decoded rows to a writer:
//!
//! - [`CsvFormatter`] - CSV (or TSV) with a header row
//! - [`JsonFormatter`] - Newline-delimited JSON

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ticksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::{CsvFormatter, TIMESTAMP_FORMAT};
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
