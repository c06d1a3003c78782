//! Service layer for the lookup application.
//!
//! This module contains the business logic for:
//! - Catalog indexing (`CatalogIndex`)
//! - Page fetching with retry (`PageFetcher`, `HttpFetcher`)
//! - Field extraction (`FieldExtractor`)
//! - Batch orchestration (`BatchLookup`)

mod catalog;
mod extractor;
mod fetcher;
mod lookup;

pub use catalog::CatalogIndex;
pub use extractor::FieldExtractor;
pub use fetcher::{fetch_with_retry, HttpFetcher, PageFetcher};
pub use lookup::BatchLookup;
