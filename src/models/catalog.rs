//! Catalog entry data structure.

use serde::{Deserialize, Serialize};

/// A single row of the product catalog: code and product page URL.
///
/// Immutable after load; the catalog is built once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Product code as stored in the source table
    pub code: String,

    /// Full URL of the product page
    pub url: String,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
        }
    }
}
