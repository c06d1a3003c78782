// src/services/fetcher.rs

//! Page fetching with bounded retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};

/// A single-attempt page fetch.
///
/// The trait seam lets the orchestrator run against an instrumented
/// fetcher in tests; production code uses [`HttpFetcher`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one URL, returning the raw document text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a shared reqwest client.
///
/// The client carries the default headers and timeout; its connection
/// pool is reused across all tasks in a batch. Any completed response
/// is returned as document text — only transport-level failures
/// (timeout, connection error, undecodable body) are errors.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let text = self.client.get(url).send().await?.text().await?;
        Ok(text)
    }
}

/// Fetch a page, retrying failures up to `max_attempts` with a fixed
/// `backoff` sleep between attempts (but not after the last one).
///
/// Exhausting all attempts yields the final attempt's error; the
/// attempt count does not leak into the result.
pub async fn fetch_with_retry(
    fetcher: &dyn PageFetcher,
    url: &str,
    max_attempts: usize,
    backoff: Duration,
) -> Result<String> {
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match fetcher.fetch(url).await {
            Ok(text) => return Ok(text),
            Err(error) => {
                log::debug!("Fetch attempt {attempt}/{max_attempts} failed for {url}: {error}");
                last_error = Some(error);
                if attempt < max_attempts {
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::lookup(url, "no fetch attempts configured")))
}
