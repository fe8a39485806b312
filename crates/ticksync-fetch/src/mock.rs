//! In-memory transport for tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{ProbeError, TransferError, Transport};

/// What the mock answers to a probe.
#[derive(Debug, Clone, Copy)]
pub(crate) enum MockProbe {
    Size(u64),
    NoSize,
    Fail,
}

/// Serves the same body (or a 404) for every URL and counts calls.
#[derive(Debug)]
pub(crate) struct MockTransport {
    body: Option<Bytes>,
    probe: MockProbe,
    probes: AtomicUsize,
    transfers: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockTransport {
    pub(crate) fn serving(body: &[u8]) -> Self {
        Self {
            body: Some(Bytes::copy_from_slice(body)),
            probe: MockProbe::Fail,
            probes: AtomicUsize::new(0),
            transfers: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn missing() -> Self {
        Self {
            body: None,
            ..Self::serving(&[])
        }
    }

    pub(crate) fn with_probe(mut self, probe: MockProbe) -> Self {
        self.probe = probe;
        self
    }

    pub(crate) fn probe_calls(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub(crate) fn transfer_calls(&self) -> usize {
        self.transferred_urls().len()
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn transferred_urls(&self) -> Vec<String> {
        self.transfers.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn probe(&self, _url: &str) -> Result<Option<u64>, ProbeError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        match self.probe {
            MockProbe::Size(size) => Ok(Some(size)),
            MockProbe::NoSize => Ok(None),
            MockProbe::Fail => Err(ProbeError::Status { status: 503 }),
        }
    }

    async fn transfer(&self, url: &str) -> Result<Bytes, TransferError> {
        self.transfers.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        // Long enough for concurrent transfers to overlap.
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or(TransferError::Status { status: 404 })
    }
}
