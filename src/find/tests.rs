//! Tests for the find module
//!
//! The aggregation loop is exercised with a scripted fetcher; nothing here
//! touches the network.

use super::types::{more_after, FindResponse};
use super::*;
use crate::error::{Error, Result};
use crate::types::GazetteerEntry;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;
use test_case::test_case;

fn entry(id: u64) -> GazetteerEntry {
    match json!({ "ID": id, "NAME1": format!("Place {id}") }) {
        serde_json::Value::Object(fields) => GazetteerEntry::new(fields),
        _ => unreachable!(),
    }
}

/// Serves a fixed result set of `total` entries, recording each offset
/// it is asked for.
struct ScriptedFetcher {
    total: u64,
    offsets: Mutex<Vec<u32>>,
    fail_at_offset: Option<u32>,
}

impl ScriptedFetcher {
    fn new(total: u64) -> Self {
        Self {
            total,
            offsets: Mutex::new(Vec::new()),
            fail_at_offset: None,
        }
    }

    fn failing_at(total: u64, offset: u32) -> Self {
        Self {
            total,
            offsets: Mutex::new(Vec::new()),
            fail_at_offset: Some(offset),
        }
    }

    fn offsets(&self) -> Vec<u32> {
        self.offsets.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        self.offsets.lock().unwrap().push(request.offset);

        if self.fail_at_offset == Some(request.offset) {
            return Err(Error::http_status(
                503,
                "service unavailable",
                "http://testserver/find?query=Glasgow",
            ));
        }

        let start = u64::from(request.offset).min(self.total);
        let end = (start + u64::from(request.page_size)).min(self.total);

        Ok(PageResult {
            entries: (start..end).map(entry).collect(),
            total_results: self.total,
            has_more: more_after(self.total, request.offset, request.page_size),
        })
    }
}

// ============================================================================
// PageRequest
// ============================================================================

#[test]
fn test_page_request_starts_at_zero() {
    let request = PageRequest::new("Glasgow", DEFAULT_PAGE_SIZE);
    assert_eq!(request.query, "Glasgow");
    assert_eq!(request.offset, 0);
    assert_eq!(request.page_size, 100);
}

#[test_case(100, 3 => vec![0, 100, 200]; "default page size")]
#[test_case(25, 4 => vec![0, 25, 50, 75]; "small pages")]
#[test_case(1, 2 => vec![0, 1]; "single entry pages")]
fn test_page_request_offsets_are_multiples_of_page_size(
    page_size: u32,
    pages: usize,
) -> Vec<u32> {
    let mut request = PageRequest::new("Leeds", page_size);
    let mut offsets = Vec::new();
    for _ in 0..pages {
        offsets.push(request.offset);
        request = request.next();
    }
    offsets
}

// ============================================================================
// has_more
// ============================================================================

#[test]
fn test_more_after_boundaries() {
    assert!(more_after(250, 0, 100));
    assert!(more_after(250, 100, 100));
    assert!(!more_after(250, 200, 100));

    // Exact fit leaves no further page
    assert!(!more_after(100, 0, 100));

    // Zero matches never indicate more
    assert!(!more_after(0, 0, 100));
}

// ============================================================================
// fetch_all
// ============================================================================

#[test_case(250, 100 => 3; "three pages")]
#[test_case(100, 100 => 1; "exact fit")]
#[test_case(101, 100 => 2; "one entry over")]
#[test_case(0, 100 => 1; "empty result set still fetches once")]
#[test_case(5, 2 => 3; "odd remainder")]
#[tokio::test]
async fn test_fetch_all_page_count(total: u64, page_size: u32) -> usize {
    let fetcher = ScriptedFetcher::new(total);
    let entries = fetch_all(&fetcher, "Glasgow", page_size).await.unwrap();
    assert_eq!(entries.len() as u64, total);
    fetcher.offsets().len()
}

#[tokio::test]
async fn test_fetch_all_keeps_server_order_across_pages() {
    let fetcher = ScriptedFetcher::new(250);
    let entries = fetch_all(&fetcher, "Glasgow", 100).await.unwrap();

    assert_eq!(entries.len(), 250);
    assert_eq!(fetcher.offsets(), vec![0, 100, 200]);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.get("ID"), Some(&json!(i as u64)));
    }
}

#[tokio::test]
async fn test_fetch_all_empty_result_set() {
    let fetcher = ScriptedFetcher::new(0);
    let entries = fetch_all(&fetcher, "Zzqqxx-nonexistent", 100).await.unwrap();

    assert!(entries.is_empty());
    assert_eq!(fetcher.offsets(), vec![0]);
}

#[tokio::test]
async fn test_fetch_all_single_page_when_total_fits() {
    let fetcher = ScriptedFetcher::new(40);
    let entries = fetch_all(&fetcher, "Oban", 100).await.unwrap();

    assert_eq!(entries.len(), 40);
    assert_eq!(fetcher.offsets(), vec![0]);
}

#[tokio::test]
async fn test_fetch_all_stops_at_first_error() {
    let fetcher = ScriptedFetcher::failing_at(500, 200);
    let err = fetch_all(&fetcher, "Glasgow", 100).await.unwrap_err();

    // Pages 0 and 100 succeeded; the failure at 200 ends the loop
    assert_eq!(fetcher.offsets(), vec![0, 100, 200]);
    match err {
        Error::HttpStatus { status, body, url } => {
            assert_eq!(status, 503);
            assert!(body.contains("unavailable"));
            assert!(url.contains("/find"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_find_response_unwraps_entries() {
    let body = json!({
        "header": {
            "totalresults": 2,
            "query": "Oban",
            "maxresults": 100,
            "offset": 0
        },
        "results": [
            {"GAZETTEER_ENTRY": {"NAME1": "Oban", "LOCAL_TYPE": "Town"}},
            {"GAZETTEER_ENTRY": {"NAME1": "Oban Bay", "LOCAL_TYPE": "Bay"}}
        ]
    });

    let response: FindResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.header.total_results, 2);
    assert_eq!(response.results.len(), 2);
    assert_eq!(
        response.results[0].entry.get("NAME1"),
        Some(&json!("Oban"))
    );
}

#[test]
fn test_find_response_tolerates_missing_results_array() {
    let response: FindResponse =
        serde_json::from_value(json!({"header": {"totalresults": 0}})).unwrap();

    assert_eq!(response.header.total_results, 0);
    assert!(response.results.is_empty());
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_rejects_invalid_base_url() {
    let result = NamesClient::builder(crate::auth::ApiKey::new("k"))
        .base_url("not a url")
        .build();
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_builder_rejects_zero_page_size() {
    let result = NamesClient::builder(crate::auth::ApiKey::new("k"))
        .page_size(0)
        .build();
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_builder_defaults() {
    let client = NamesClient::builder(crate::auth::ApiKey::new("k"))
        .build()
        .unwrap();
    assert_eq!(client.page_size(), DEFAULT_PAGE_SIZE);
}
