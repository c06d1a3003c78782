// src/lib.rs

//! Batch product lookup library.
//!
//! Resolves product codes against a preloaded catalog of product page
//! URLs, fetches each page concurrently with pacing and bounded retry,
//! and extracts structured fields from the returned documents.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
