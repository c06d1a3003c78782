//! Pipeline entry points for lookup operations.
//!
//! - `run_lookup`: Resolve and fetch a batch of product codes

pub mod lookup;

pub use lookup::{run_lookup, LookupStats};
