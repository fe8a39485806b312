//! Bounded-concurrency sync of every unit in a date range.

use futures::stream::{self, Stream, StreamExt};
use std::num::NonZeroUsize;
use ticksync_types::{DateRange, FetchUnit, UnitError};

use crate::{SyncEngine, SyncOutcome, Transport};

/// Creates a stream of sync outcomes for every unit of `instrument` in `range`.
///
/// Units are dispatched in date-major, hour-minor order with at most
/// `concurrency` syncs in flight. Outcomes arrive in completion order, which
/// is unspecified. A failed unit does not stop the others.
///
/// # Errors
///
/// Returns an error, before any sync starts, if the instrument is empty.
pub fn sync_stream<'a, T: Transport>(
    engine: &'a SyncEngine<T>,
    instrument: &'a str,
    range: DateRange,
    concurrency: NonZeroUsize,
) -> Result<impl Stream<Item = (FetchUnit, SyncOutcome)> + 'a, UnitError> {
    let units = range.units(instrument)?;
    Ok(stream::iter(units)
        .map(move |unit| async move {
            let outcome = engine.sync(&unit).await;
            (unit, outcome)
        })
        .buffer_unordered(concurrency.get()))
}

/// Syncs every unit of `instrument` in `range` and collects the outcomes.
///
/// See [`sync_stream`] for ordering and concurrency.
///
/// # Errors
///
/// Returns an error if the instrument is empty.
pub async fn run<T: Transport>(
    engine: &SyncEngine<T>,
    instrument: &str,
    range: DateRange,
    concurrency: NonZeroUsize,
) -> Result<Vec<(FetchUnit, SyncOutcome)>, UnitError> {
    Ok(sync_stream(engine, instrument, range, concurrency)?
        .collect()
        .await)
}

/// Outcome counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Units whose artifact was written.
    pub downloaded: usize,
    /// Units already current.
    pub skipped: usize,
    /// Units that failed.
    pub failed: usize,
}

impl RunSummary {
    /// Counts one outcome.
    pub const fn record(&mut self, outcome: &SyncOutcome) {
        match outcome {
            SyncOutcome::Downloaded { .. } => self.downloaded += 1,
            SyncOutcome::Skipped(_) => self.skipped += 1,
            SyncOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Returns the number of units counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

impl<'a> FromIterator<&'a SyncOutcome> for RunSummary {
    fn from_iter<I: IntoIterator<Item = &'a SyncOutcome>>(iter: I) -> Self {
        let mut summary = Self::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} downloaded, {} skipped, {} failed",
            self.downloaded, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockProbe, MockTransport};
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn two_days() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 4).unwrap(),
        )
        .unwrap()
    }

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_two_day_run_covers_48_distinct_units() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::new(MockTransport::serving(&[1u8; 20]), dir.path());

        let outcomes = run(&engine, "EURUSD", two_days(), workers(4)).await.unwrap();

        assert_eq!(outcomes.len(), 48);
        let units: HashSet<_> = outcomes.iter().map(|(unit, _)| unit.clone()).collect();
        assert_eq!(units.len(), 48);

        let urls = engine.transport().transferred_urls();
        assert_eq!(urls.len(), 48);
        assert_eq!(urls.iter().collect::<HashSet<_>>().len(), 48);

        assert!(outcomes.iter().all(|(_, outcome)| outcome.is_downloaded()));
        for (unit, _) in &outcomes {
            assert!(engine.address(unit).local.is_file());
        }
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::new(MockTransport::serving(&[1u8; 20]), dir.path());

        let outcomes = run(&engine, "EURUSD", two_days(), workers(3))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 48);
        let peak = engine.transport().peak_in_flight();
        assert!(peak > 1, "transfers never overlapped");
        assert!(peak <= 3, "{peak} transfers in flight");
    }

    #[tokio::test]
    async fn test_single_worker_completes_in_enumeration_order() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::new(MockTransport::serving(&[1u8; 20]), dir.path());

        let outcomes = run(&engine, "EURUSD", two_days(), workers(1))
            .await
            .unwrap();

        let units: Vec<_> = outcomes.into_iter().map(|(unit, _)| unit).collect();
        let expected: Vec<_> = two_days().units("EURUSD").unwrap().collect();
        assert_eq!(units, expected);
    }

    #[tokio::test]
    async fn test_failures_do_not_abort_run() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::new(MockTransport::missing(), dir.path());
        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let outcomes = run(&engine, "EURUSD", range, workers(8)).await.unwrap();
        let summary: RunSummary = outcomes.iter().map(|(_, outcome)| outcome).collect();

        assert_eq!(summary.failed, 24);
        assert_eq!(summary.total(), 24);
        assert!(!dir.path().join("EURUSD").exists());
    }

    #[tokio::test]
    async fn test_second_run_skips_everything() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::new(
            MockTransport::serving(&[1u8; 20]).with_probe(MockProbe::Size(20)),
            dir.path(),
        );
        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let first: RunSummary = run(&engine, "EURUSD", range, workers(4))
            .await
            .unwrap()
            .iter()
            .map(|(_, outcome)| outcome)
            .collect();
        let second: RunSummary = run(&engine, "EURUSD", range, workers(4))
            .await
            .unwrap()
            .iter()
            .map(|(_, outcome)| outcome)
            .collect();

        assert_eq!(first.downloaded, 24);
        assert_eq!(second.skipped, 24);
        assert_eq!(engine.transport().transfer_calls(), 24);
    }

    #[tokio::test]
    async fn test_empty_instrument_fails_before_any_sync() {
        let dir = TempDir::new().unwrap();
        let engine = SyncEngine::new(MockTransport::serving(&[1u8; 20]), dir.path());

        let result = run(&engine, "", two_days(), workers(2)).await;

        assert_eq!(result.unwrap_err(), UnitError::EmptyInstrument);
        assert_eq!(engine.transport().transfer_calls(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            downloaded: 3,
            skipped: 2,
            failed: 1,
        };
        assert_eq!(summary.to_string(), "3 downloaded, 2 skipped, 1 failed");
        assert_eq!(summary.total(), 6);
    }
}
