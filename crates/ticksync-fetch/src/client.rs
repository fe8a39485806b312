//! HTTP transport for probing and transferring bi5 artifacts.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode, header::CONTENT_LENGTH};
use std::time::Duration;
use thiserror::Error;

/// Configuration for the download client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, applied to each probe and transfer.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Idle connections kept per host, usually the scheduler's concurrency.
    pub pool_idle_per_host: usize,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 8,
            user_agent: format!("ticksync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors from a size probe. These never reach the caller of a sync.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server did not answer 200.
    #[error("Probe returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// Errors from a full artifact transfer.
#[derive(Error, Debug)]
pub enum TransferError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server did not answer 200.
    #[error("No data (status {status})")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Server answered 200 with an empty body.
    #[error("No data (empty body)")]
    EmptyBody,
}

/// Remote side of a sync: a size probe and a full transfer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Asks for the remote artifact's size without transferring its body.
    ///
    /// Returns `Ok(None)` if the remote exists but reports no size.
    async fn probe(&self, url: &str) -> Result<Option<u64>, ProbeError>;

    /// Transfers the remote artifact's body.
    ///
    /// An empty body is returned as is; the sync engine treats it as a failure.
    async fn transfer(&self, url: &str) -> Result<Bytes, TransferError>;
}

/// HTTP client with connection pooling. Every call is a single attempt.
#[derive(Debug, Clone)]
pub struct DownloadClient {
    client: Client,
}

impl DownloadClient {
    /// Creates a new download client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }
}

#[async_trait]
impl Transport for DownloadClient {
    async fn probe(&self, url: &str) -> Result<Option<u64>, ProbeError> {
        let response = self.client.head(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ProbeError::Status {
                status: response.status().as_u16(),
            });
        }

        // The header is read directly: a HEAD response has no body to size.
        Ok(response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok()))
    }

    async fn transfer(&self, url: &str) -> Result<Bytes, TransferError> {
        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(TransferError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}
