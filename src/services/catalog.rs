// src/services/catalog.rs

//! Product catalog index.
//!
//! Built once at startup from the external tabular source and shared
//! read-only across all lookup tasks.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::CatalogEntry;

/// Immutable index from normalized product code to catalog entry.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
    by_code: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Build an index from tabular rows.
    ///
    /// The first and fourth column of each row are taken as
    /// (code, url); rows with fewer columns are skipped. When several
    /// rows share a normalized code, the first row by source order
    /// wins.
    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<[String]>,
    {
        let mut index = Self::default();
        for row in rows {
            let row = row.as_ref();
            let (Some(code), Some(url)) = (row.first(), row.get(3)) else {
                log::warn!("Skipping catalog row with fewer than 4 columns");
                continue;
            };
            index.insert(CatalogEntry::new(code.clone(), url.clone()));
        }
        index
    }

    /// Build an index directly from entries.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Load an index from a JSON file containing an array of rows.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let rows: Vec<Vec<String>> = serde_json::from_str(&content)?;
        Ok(Self::from_rows(&rows))
    }

    /// Look up a code, normalizing it before comparison.
    pub fn lookup(&self, code: &str) -> Option<&CatalogEntry> {
        self.by_code
            .get(&normalize(code))
            .map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: CatalogEntry) {
        let key = normalize(&entry.code);
        let idx = self.entries.len();
        self.entries.push(entry);
        self.by_code.entry(key).or_insert(idx);
    }
}

/// Catalog codes are compared trimmed and case-folded.
fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
