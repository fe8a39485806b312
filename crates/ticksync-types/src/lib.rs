//! Core types for the ticksync tick archive mirror.
//!
//! This crate provides the fundamental data structures shared by the sync and
//! decode halves of ticksync:
//!
//! - [`FetchUnit`] - The (instrument, date, hour) key of one artifact
//! - [`DateRange`] - Inclusive date range and its unit enumeration
//! - [`TickRecord`] - Raw 20-byte record from a bi5 artifact
//! - [`Row`] - A decoded tick with timestamp, prices and volumes

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ticksync/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod tick;
mod unit;

pub use date_range::{DateRange, HOURS_PER_DAY, UnitIterator};
pub use error::{DateRangeError, UnitError};
pub use tick::{PRICE_SCALE, Row, TickRecord};
pub use unit::{FetchUnit, hour_anchor};
