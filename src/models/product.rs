//! Product lookup result data structures.

use serde::{Deserialize, Serialize};

/// Placeholder for a textual field the page did not provide.
pub const FIELD_UNDETERMINED: &str = "Không xác định";

/// Display name for a code absent from the catalog.
pub const NAME_NOT_FOUND: &str = "Không tìm thấy";

/// Placeholder for stock/price when the code is not in the catalog.
pub const FIELD_DASH: &str = "-";

/// Placeholder for all textual fields after a terminal fetch failure.
pub const FIELD_ERROR: &str = "Lỗi";

/// Terminal state of a single product lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// Page fetched and fields extracted
    Found,
    /// Code not present in the catalog; no network call was made
    NotFound,
    /// All fetch attempts failed
    FetchFailed,
}

/// Raw per-field extraction output.
///
/// Every field is independently optional; a missing element or
/// attribute yields `None` for that field only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub stock_status: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub drawing_image_url: Option<String>,
}

/// Result of looking up one product code.
///
/// Textual fields are always present (placeholder text when the page
/// did not provide them); image fields are present-or-null. `status`
/// is the authoritative outcome signal — the placeholder strings are
/// display values derived from it, not something to compare against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductResult {
    /// Product code exactly as submitted by the caller
    pub code: String,

    /// Product name
    pub name: String,

    /// Stock availability text
    pub stock_status: String,

    /// Price text
    pub price: String,

    /// Primary product image URL
    pub image_url: Option<String>,

    /// Technical drawing image URL
    pub drawing_image_url: Option<String>,

    /// Lookup outcome
    pub status: LookupStatus,
}

impl ProductResult {
    /// Build a successful result, filling missing textual fields with
    /// the undetermined placeholder.
    pub fn found(code: impl Into<String>, fields: ExtractedFields) -> Self {
        Self {
            code: code.into(),
            name: fields.name.unwrap_or_else(|| FIELD_UNDETERMINED.into()),
            stock_status: fields
                .stock_status
                .unwrap_or_else(|| FIELD_UNDETERMINED.into()),
            price: fields.price.unwrap_or_else(|| FIELD_UNDETERMINED.into()),
            image_url: fields.image_url,
            drawing_image_url: fields.drawing_image_url,
            status: LookupStatus::Found,
        }
    }

    /// Build a result for a code absent from the catalog.
    pub fn not_found(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: NAME_NOT_FOUND.into(),
            stock_status: FIELD_DASH.into(),
            price: FIELD_DASH.into(),
            image_url: None,
            drawing_image_url: None,
            status: LookupStatus::NotFound,
        }
    }

    /// Build a result for a code whose fetch attempts all failed.
    pub fn fetch_failed(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: FIELD_ERROR.into(),
            stock_status: FIELD_ERROR.into(),
            price: FIELD_ERROR.into(),
            image_url: None,
            drawing_image_url: None,
            status: LookupStatus::FetchFailed,
        }
    }
}
