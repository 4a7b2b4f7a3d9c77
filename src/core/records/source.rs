//! External record source.
//!
//! A single read-only fetch of the full list. No paging, filtering or sorting
//! parameters are sent; all of that happens client-side in the browser.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::model::Record;
use crate::config::SourceConfig;

/// The one message shown to the user for any fetch failure. The error's own
/// text only reaches the log and the notification overlay.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch posts";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Retrieve the complete record list.
    async fn fetch_all(&self) -> Result<Vec<Record>>;
}

// ============================================================================
// HTTP Source
// ============================================================================

/// GETs a JSON array of records from a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>> {
        log::debug!("Fetching records from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let records: Vec<Record> = serde_json::from_slice(&bytes)?;
        log::info!("Fetched {} records from {}", records.len(), self.url);
        Ok(records)
    }
}

// ============================================================================
// Static Source
// ============================================================================

/// Fixed in-memory source for tests that need a real (non-mock) fetch.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticRecordSource {
    outcome: std::result::Result<Vec<Record>, u16>,
}

#[cfg(test)]
impl StaticRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    /// Every fetch fails as if the server answered with `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>> {
        self.outcome.clone().map_err(FetchError::Status)
    }
}
