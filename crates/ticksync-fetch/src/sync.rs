//! Replace-if-different sync of a single artifact.

use bytes::Bytes;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use ticksync_types::FetchUnit;
use tracing::{debug, info, warn};

use crate::url::{BASE_URL, UnitAddress, local_path, remote_url_with_base};
use crate::{TransferError, Transport};

/// Why a sync left the local artifact alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The probe reported the local size.
    SizeMatch,
    /// The transferred body had the local size.
    SizeMatchAfterTransfer,
}

impl SkipReason {
    /// Returns the reason as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SizeMatch => "size match",
            Self::SizeMatchAfterTransfer => "size match after transfer",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that fail a single unit's sync.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The transfer failed; the local artifact was not touched.
    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// The artifact could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Result of syncing one unit.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The local artifact is current.
    Skipped(SkipReason),
    /// The local artifact was created or replaced.
    Downloaded {
        /// Bytes written.
        bytes: usize,
    },
    /// The unit could not be synced.
    Failed(SyncError),
}

impl SyncOutcome {
    /// Returns true if the unit was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Returns true if the artifact was written.
    #[must_use]
    pub const fn is_downloaded(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }

    /// Returns true if the sync failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped(reason) => write!(f, "Skipped ({reason})"),
            Self::Downloaded { bytes } => write!(f, "Downloaded ({bytes} bytes)"),
            Self::Failed(err) => write!(f, "Failed: {err}"),
        }
    }
}

/// Keeps local artifacts in step with the remote archive, one unit at a time.
#[derive(Debug, Clone)]
pub struct SyncEngine<T> {
    transport: T,
    base_url: String,
    output_root: PathBuf,
}

impl<T: Transport> SyncEngine<T> {
    /// Creates an engine mirroring [`BASE_URL`] into `output_root`.
    pub fn new(transport: T, output_root: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            base_url: BASE_URL.to_string(),
            output_root: output_root.into(),
        }
    }

    /// Sets the remote base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves a unit against this engine's base URL and output root.
    #[must_use]
    pub fn address(&self, unit: &FetchUnit) -> UnitAddress {
        UnitAddress {
            remote: remote_url_with_base(&self.base_url, unit),
            local: local_path(&self.output_root, unit),
        }
    }

    /// Syncs one unit.
    ///
    /// A non-empty local artifact whose size the probe confirms is skipped
    /// without a transfer. Otherwise the artifact is transferred once and
    /// written atomically unless its length equals the local one. Failures
    /// leave the local artifact untouched. Nothing is retried.
    pub async fn sync(&self, unit: &FetchUnit) -> SyncOutcome {
        let UnitAddress { remote, local } = self.address(unit);

        if let Some(local_size) = file_size(&local).await.filter(|size| *size > 0) {
            match self.transport.probe(&remote).await {
                Ok(Some(remote_size)) if remote_size == local_size => {
                    debug!(%unit, size = local_size, "skipping, probe size matches");
                    return SyncOutcome::Skipped(SkipReason::SizeMatch);
                }
                Ok(Some(remote_size)) => {
                    debug!(%unit, local_size, remote_size, "probe size differs");
                }
                Ok(None) => debug!(%unit, "probe reported no size"),
                Err(e) => debug!(%unit, error = %e, "probe failed, transferring"),
            }
        }

        let body = match self.transport.transfer(&remote).await {
            Ok(body) if body.is_empty() => Err(TransferError::EmptyBody),
            result => result,
        };
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                warn!(%unit, url = %remote, error = %e, "transfer failed");
                return SyncOutcome::Failed(e.into());
            }
        };

        if file_size(&local).await == Some(body.len() as u64) {
            debug!(%unit, size = body.len(), "skipping, transferred size matches");
            return SyncOutcome::Skipped(SkipReason::SizeMatchAfterTransfer);
        }

        let bytes = body.len();
        match write_atomic(local.clone(), body).await {
            Ok(()) => {
                info!(%unit, path = %local.display(), bytes, "downloaded");
                SyncOutcome::Downloaded { bytes }
            }
            Err(source) => {
                warn!(%unit, path = %local.display(), error = %source, "write failed");
                SyncOutcome::Failed(SyncError::Write {
                    path: local,
                    source,
                })
            }
        }
    }
}

/// Returns the size of the file at `path`, or `None` if there is no file.
async fn file_size(path: &Path) -> Option<u64> {
    tokio::fs::metadata(path)
        .await
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
}

/// Writes `body` to a temporary file next to `path` and renames it into place.
///
/// Readers see either the old artifact or the complete new one.
async fn write_atomic(path: PathBuf, body: Bytes) -> io::Result<()> {
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut builder = tempfile::Builder::new();
        // Same mode as a plain `File::create`, before the umask.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir)?;
        tmp.write_all(&body)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
