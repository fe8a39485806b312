//! Artifact addressing: remote URL and local path of a fetch unit.

use std::path::{Path, PathBuf};

use ticksync_types::FetchUnit;

/// Base URL for the Dukascopy data feed.
pub const BASE_URL: &str = "https://datafeed.dukascopy.com/datafeed";

/// Remote and local identifiers of one fetch unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitAddress {
    /// Remote artifact URL.
    pub remote: String,
    /// Local artifact path.
    pub local: PathBuf,
}

/// Resolves a unit against [`BASE_URL`] and `output_root`.
///
/// Both the sync and the decode paths go through this function, so a unit
/// always maps to the same artifact.
#[must_use]
pub fn address(unit: &FetchUnit, output_root: &Path) -> UnitAddress {
    UnitAddress {
        remote: remote_url(unit),
        local: local_path(output_root, unit),
    }
}

/// Builds the remote URL of a unit's artifact.
///
/// URL format: `{BASE_URL}/{INSTRUMENT}/{YEAR}/{MONTH}/{DAY}/{HOUR}h_ticks.bi5`,
/// month 1-indexed.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ticksync_fetch::url::remote_url;
/// use ticksync_types::FetchUnit;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let unit = FetchUnit::new("EURUSD", date, 7).unwrap();
/// assert_eq!(
///     remote_url(&unit),
///     "https://datafeed.dukascopy.com/datafeed/EURUSD/2024/01/15/07h_ticks.bi5"
/// );
/// ```
#[must_use]
pub fn remote_url(unit: &FetchUnit) -> String {
    remote_url_with_base(BASE_URL, unit)
}

/// Builds the remote URL of a unit's artifact under a different base.
#[must_use]
pub fn remote_url_with_base(base: &str, unit: &FetchUnit) -> String {
    format!(
        "{}/{}/{:04}/{:02}/{:02}/{:02}h_ticks.bi5",
        base.trim_end_matches('/'),
        unit.instrument(),
        unit.year(),
        unit.month(),
        unit.day(),
        unit.hour()
    )
}

/// Builds the local path of a unit's artifact.
///
/// Path format: `{root}/{INSTRUMENT}/{INSTRUMENT}_{YYYYMMDD}_{HH}h_ticks.bi5`.
#[must_use]
pub fn local_path(output_root: &Path, unit: &FetchUnit) -> PathBuf {
    output_root.join(unit.instrument()).join(format!(
        "{}_{:04}{:02}{:02}_{:02}h_ticks.bi5",
        unit.instrument(),
        unit.year(),
        unit.month(),
        unit.day(),
        unit.hour()
    ))
}
