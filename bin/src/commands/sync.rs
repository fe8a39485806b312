//! Sync command implementation.
//!
//! Mirrors every hourly artifact of a date range into the output folder,
//! reporting each unit as it completes.

use crate::display::{describe_outcome, parse_range};
use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use ticksync_lib::prelude::*;

/// Sync an instrument's artifacts for a date range.
pub(crate) async fn sync(
    instrument: &str,
    start_str: &str,
    end_str: &str,
    output_folder: PathBuf,
    threads: NonZeroUsize,
    quiet: bool,
) -> Result<()> {
    let range = parse_range(start_str, end_str)?;

    let config = ClientConfig {
        pool_idle_per_host: threads.get(),
        ..Default::default()
    };
    let client = DownloadClient::new(config)?;
    let engine = SyncEngine::new(client, &output_folder);
    let mut stream = std::pin::pin!(sync_stream(&engine, instrument, range, threads)?);

    std::fs::create_dir_all(&output_folder)
        .with_context(|| format!("Failed to create directory {}", output_folder.display()))?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(range.total_units() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} hours ({percent}%) {msg}")
                .context("Invalid progress template")?
                .progress_chars("=>-"),
        );
        pb.set_message(format!("{instrument} {range}"));
        pb
    };

    let mut summary = RunSummary::default();

    while let Some((unit, outcome)) = stream.next().await {
        summary.record(&outcome);
        if !quiet {
            progress.println(describe_outcome(&outcome, &engine.address(&unit)));
        }
        progress.inc(1);
    }

    progress.finish_with_message(summary.to_string());
    tracing::info!(%instrument, %range, %summary, "sync finished");

    Ok(())
}
