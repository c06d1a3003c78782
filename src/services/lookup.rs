// src/services/lookup.rs

//! Batch lookup orchestration.
//!
//! Resolves each requested code against the catalog, fetches resolved
//! product pages concurrently with paced dispatch and bounded retry,
//! and reassembles results in input order.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, ProductResult};
use crate::services::catalog::CatalogIndex;
use crate::services::extractor::FieldExtractor;
use crate::services::fetcher::{fetch_with_retry, HttpFetcher, PageFetcher};
use crate::utils::http::create_client;

/// Orchestrates a batch of product lookups.
///
/// One instance holds the shared HTTP client and the parsed
/// selectors; each `lookup_batch` call creates and tears down its own
/// task set.
pub struct BatchLookup {
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<FieldExtractor>,
}

impl BatchLookup {
    /// Create a batch lookup service from configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_client(&config.http)?;
        Self::with_client(config, client)
    }

    /// Create a batch lookup service reusing an existing HTTP client.
    pub fn with_client(config: Arc<Config>, client: Client) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(client));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a batch lookup service with a custom fetcher.
    pub fn with_fetcher(config: Arc<Config>, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let extractor = Arc::new(FieldExtractor::new(&config.selectors)?);
        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// Look up every code against the catalog, returning exactly one
    /// result per input position, in input order.
    ///
    /// Codes absent from the catalog resolve immediately without a
    /// network call. The rest are dispatched as concurrent tasks; a
    /// fixed delay is slept before each dispatch after the first,
    /// bounding the request initiation rate. Completion order is
    /// unconstrained; output order is restored by index. Duplicate
    /// codes are dispatched independently, one task per position.
    pub async fn lookup_batch(
        &self,
        catalog: &CatalogIndex,
        codes: &[String],
    ) -> Vec<ProductResult> {
        let delay = self.config.lookup.request_delay();
        let mut results: Vec<Option<ProductResult>> = vec![None; codes.len()];
        let mut dispatched: Vec<(usize, tokio::task::JoinHandle<ProductResult>)> = Vec::new();

        for (index, code) in codes.iter().enumerate() {
            let Some(entry) = catalog.lookup(code) else {
                log::debug!("Code {code} not in catalog");
                results[index] = Some(ProductResult::not_found(code.clone()));
                continue;
            };

            if !dispatched.is_empty() && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            log::debug!("Dispatching lookup for {code} -> {}", entry.url);
            dispatched.push((index, self.spawn_lookup(code.clone(), entry.url.clone())));
        }

        let (indices, tasks): (Vec<_>, Vec<_>) = dispatched.into_iter().unzip();
        for (index, joined) in indices.into_iter().zip(join_all(tasks).await) {
            results[index] = Some(joined.unwrap_or_else(|e| {
                log::warn!("Lookup task for {} did not complete: {e}", codes[index]);
                ProductResult::fetch_failed(codes[index].clone())
            }));
        }

        results
            .into_iter()
            .zip(codes)
            .map(|(slot, code)| slot.unwrap_or_else(|| ProductResult::fetch_failed(code.clone())))
            .collect()
    }

    fn spawn_lookup(&self, code: String, url: String) -> tokio::task::JoinHandle<ProductResult> {
        let fetcher = Arc::clone(&self.fetcher);
        let extractor = Arc::clone(&self.extractor);
        let max_attempts = self.config.lookup.max_attempts;
        let backoff = self.config.lookup.backoff();

        tokio::spawn(async move {
            lookup_one(&*fetcher, &extractor, &code, &url, max_attempts, backoff).await
        })
    }
}

/// Fetch one resolved product page and extract its fields.
async fn lookup_one(
    fetcher: &dyn PageFetcher,
    extractor: &FieldExtractor,
    code: &str,
    url: &str,
    max_attempts: usize,
    backoff: Duration,
) -> ProductResult {
    match fetch_with_retry(fetcher, url, max_attempts, backoff).await {
        Ok(html) => ProductResult::found(code, extractor.extract(&html, url)),
        Err(error) => {
            log::warn!("Lookup failed for {code} ({url}): {error}");
            ProductResult::fetch_failed(code)
        }
    }
}
