//! Page request/result types and the `/find` wire format

use crate::types::GazetteerEntry;
use serde::Deserialize;

/// Default number of entries requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// One bounded slice of a query's result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Free-text place-name query
    pub query: String,
    /// Start offset into the result set
    pub offset: u32,
    /// Maximum number of entries to return
    pub page_size: u32,
}

impl PageRequest {
    /// First page of a query at the given page size
    pub fn new(query: impl Into<String>, page_size: u32) -> Self {
        Self {
            query: query.into(),
            offset: 0,
            page_size,
        }
    }

    /// The request for the page after this one.
    ///
    /// Offsets advance by the page size, so page k starts at k * page_size.
    pub fn next(&self) -> Self {
        Self {
            query: self.query.clone(),
            offset: self.offset + self.page_size,
            page_size: self.page_size,
        }
    }
}

/// Result of a single page fetch
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    /// Entries in server order
    pub entries: Vec<GazetteerEntry>,
    /// Total matches the server reports for the whole query
    pub total_results: u64,
    /// Whether the server total indicates pages beyond this one
    pub has_more: bool,
}

/// Whether pages remain past the one at `offset`.
///
/// The server total is trusted as-is; a total of 0 is never greater than
/// offset + page_size, so an empty result set terminates after one page.
pub(crate) fn more_after(total_results: u64, offset: u32, page_size: u32) -> bool {
    total_results > u64::from(offset) + u64::from(page_size)
}

// ============================================================================
// Wire format
// ============================================================================

/// Body of a successful `/find` response
#[derive(Debug, Deserialize)]
pub(crate) struct FindResponse {
    pub header: FindHeader,
    /// The server omits this array entirely when nothing matches
    #[serde(default)]
    pub results: Vec<ResultEnvelope>,
}

/// Response header carrying the query-wide total
#[derive(Debug, Deserialize)]
pub(crate) struct FindHeader {
    #[serde(rename = "totalresults")]
    pub total_results: u64,
}

/// Each element of `results` wraps the record under a fixed field name
#[derive(Debug, Deserialize)]
pub(crate) struct ResultEnvelope {
    #[serde(rename = "GAZETTEER_ENTRY")]
    pub entry: GazetteerEntry,
}
