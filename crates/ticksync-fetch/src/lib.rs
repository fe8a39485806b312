//! Artifact addressing, sync engine and scheduler for the ticksync tick
//! archive mirror.
//!
//! This crate provides the mirroring half of ticksync:
//!
//! - [`url::address`] - Maps a fetch unit to its remote URL and local path
//! - [`DownloadClient`] - HTTP [`Transport`] with connection pooling
//! - [`SyncEngine`] - Replace-if-different sync of one unit
//! - [`sync_stream`] - Bounded-concurrency sync of a date range

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ticksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod scheduler;
mod sync;
pub mod url;

#[cfg(test)]
mod mock;

pub use client::{ClientConfig, DownloadClient, ProbeError, TransferError, Transport};
pub use scheduler::{RunSummary, run, sync_stream};
pub use sync::{SkipReason, SyncEngine, SyncError, SyncOutcome};
pub use url::{BASE_URL, UnitAddress, address};
