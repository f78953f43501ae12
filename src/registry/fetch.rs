//! HTTP registry fetching.
//!
//! Downloads the published registry record over HTTP/HTTPS with a
//! blocking client.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::domain::RegistrySnapshot;
use crate::error::{RegistryVersionError, Result};

/// Source of a previously published snapshot.
///
/// `Ok(None)` means the source answered but nothing was published yet.
pub trait SnapshotFetcher {
    fn fetch_snapshot(&self, url: &str) -> Result<Option<RegistrySnapshot>>;
}

/// Fetches registry snapshots over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("registry-version/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl SnapshotFetcher for HttpFetcher {
    fn fetch_snapshot(&self, url: &str) -> Result<Option<RegistrySnapshot>> {
        tracing::debug!("Fetching registry from {}", url);
        let response = self.client.get(url).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Registry not published yet at {}", url);
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(RegistryVersionError::fetch(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            )));
        }

        let body = response.text()?;
        RegistrySnapshot::from_json(&body).map(Some)
    }
}
