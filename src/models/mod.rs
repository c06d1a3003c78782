// src/models/mod.rs

//! Domain models for the lookup application.
//!
//! This module contains all data structures used throughout the
//! application, organized by their primary purpose.

mod catalog;
mod config;
mod product;

// Re-export all public types
pub use catalog::CatalogEntry;
pub use config::{Config, HttpConfig, LookupConfig, SelectorConfig};
pub use product::{
    ExtractedFields, LookupStatus, ProductResult, FIELD_DASH, FIELD_ERROR, FIELD_UNDETERMINED,
    NAME_NOT_FOUND,
};
