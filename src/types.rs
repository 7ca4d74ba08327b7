//! Pass-through response shapes
//!
//! These records are never produced, validated, or transformed by this
//! crate; they exist so callers can name the common envelope and page
//! layouts at the type level. Unknown fields are preserved in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a paginated listing, in the usual offset-paged layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Zero-based page index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Total matching items across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    /// Total page count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    /// Any fields the server sent that the layout above does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Generic response envelope wrapping a payload with server metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// The wrapped payload, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Application-level status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Any fields the server sent that the layout above does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
