//! Rust library for mirroring and decoding Dukascopy bi5 tick archives.
//!
//! This is a facade crate that re-exports functionality from the ticksync
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use ticksync_lib::prelude::*;
//! use std::num::NonZeroUsize;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = SyncEngine::new(DownloadClient::with_defaults()?, "data");
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
//!     )?;
//!
//!     let outcomes = run(&engine, "EURUSD", range, NonZeroUsize::new(8).unwrap()).await?;
//!     for (unit, outcome) in &outcomes {
//!         println!("{unit}: {outcome}");
//!     }
//!
//!     let unit = FetchUnit::new("EURUSD", range.start, 5)?;
//!     let bytes = std::fs::read(engine.address(&unit).local)?;
//!     for row in decode(&bytes, unit.hour_anchor())? {
//!         println!("{} {} {}", row.timestamp, row.ask, row.bid);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ticksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use ticksync_types::*;

// Re-export sync functionality
#[cfg(feature = "fetch")]
pub use ticksync_fetch::{
    BASE_URL, ClientConfig, DownloadClient, ProbeError, RunSummary, SkipReason, SyncEngine,
    SyncError, SyncOutcome, TransferError, Transport, UnitAddress, address, run, sync_stream,
    url,
};

// Re-export decoding
#[cfg(feature = "codec")]
pub use ticksync_codec::{DecodeError, Rows, decode, decompress_bi5, encode_record};

// Re-export formatters
#[cfg(feature = "format")]
pub use ticksync_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use ticksync_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ticksync_types::{DateRange, DateRangeError, FetchUnit, Row, TickRecord, UnitError};

    #[cfg(feature = "fetch")]
    pub use ticksync_fetch::{
        ClientConfig, DownloadClient, RunSummary, SyncEngine, SyncOutcome, Transport, run,
        sync_stream,
    };

    #[cfg(feature = "codec")]
    pub use ticksync_codec::{DecodeError, Rows, decode};

    #[cfg(feature = "format")]
    pub use ticksync_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
