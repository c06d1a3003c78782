// src/pipeline/lookup.rs

//! Batch lookup pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Config, LookupStatus, ProductResult};
use crate::services::{BatchLookup, CatalogIndex};

/// Summary of a batch lookup run.
#[derive(Debug, Clone, Serialize)]
pub struct LookupStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub failed: usize,
}

/// Run a batch lookup with logging and stats.
pub async fn run_lookup(
    config: Arc<Config>,
    catalog: &CatalogIndex,
    codes: &[String],
) -> Result<(Vec<ProductResult>, LookupStats)> {
    let started_at = Utc::now();
    log::info!(
        "Looking up {} codes against {} catalog entries",
        codes.len(),
        catalog.len()
    );

    let service = BatchLookup::new(config)?;
    let results = service.lookup_batch(catalog, codes).await;

    let stats = LookupStats {
        started_at,
        finished_at: Utc::now(),
        total: results.len(),
        found: count(&results, LookupStatus::Found),
        not_found: count(&results, LookupStatus::NotFound),
        failed: count(&results, LookupStatus::FetchFailed),
    };

    log::info!(
        "Lookup complete: {} found, {} not in catalog, {} failed ({} total)",
        stats.found,
        stats.not_found,
        stats.failed,
        stats.total
    );

    Ok((results, stats))
}

fn count(results: &[ProductResult], status: LookupStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}
