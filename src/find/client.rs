//! Names API client and page aggregation

use super::types::{more_after, FindResponse, PageRequest, PageResult, DEFAULT_PAGE_SIZE};
use crate::auth::{ApiKey, API_KEY_PARAM};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig, DEFAULT_TIMEOUT};
use crate::types::GazetteerEntry;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Production endpoint of the Names API
pub const DEFAULT_BASE_URL: &str = "https://api.os.uk/search/names/v1";

const FIND_PATH: &str = "/find";

/// One bounded lookup against a result set.
///
/// [`fetch_all`] drives any implementation of this trait, which keeps the
/// aggregation loop independent of the network; tests exercise it with a
/// scripted fake.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a single page
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult>;
}

/// Aggregate every page of a query into one ordered list.
///
/// Pages are fetched strictly in sequence, each awaited before the next is
/// issued. Entries keep server order, with page k's entries ahead of page
/// k+1's. An error on any page abandons the pages accumulated so far and
/// propagates to the caller.
pub async fn fetch_all<F>(fetcher: &F, query: &str, page_size: u32) -> Result<Vec<GazetteerEntry>>
where
    F: PageFetcher + ?Sized,
{
    let mut entries = Vec::new();
    let mut request = PageRequest::new(query, page_size);

    loop {
        let page = fetcher.fetch_page(&request).await?;
        entries.extend(page.entries);
        if !page.has_more {
            break;
        }
        request = request.next();
    }

    debug!("aggregated {} entries for query {query:?}", entries.len());
    Ok(entries)
}

/// Client for the Ordnance Survey Names API
#[derive(Debug)]
pub struct NamesClient {
    http: HttpClient,
    api_key: ApiKey,
    page_size: u32,
}

impl NamesClient {
    /// Client against the production endpoint with default settings
    pub fn new(api_key: ApiKey) -> Self {
        let http = HttpClient::with_config(
            HttpClientConfig::builder().base_url(DEFAULT_BASE_URL).build(),
        );
        Self {
            http,
            api_key,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Start building a client with custom settings
    pub fn builder(api_key: ApiKey) -> NamesClientBuilder {
        NamesClientBuilder::new(api_key)
    }

    /// Page size used by [`find_all`](Self::find_all)
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page of results.
    ///
    /// Sends the key, query, maximum result count and offset as query
    /// parameters, unwraps each record from its envelope, and computes
    /// `has_more` from the server-reported total.
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        let params = RequestConfig::new()
            .query(API_KEY_PARAM, self.api_key.expose())
            .query("query", &request.query)
            .query("maxresults", request.page_size.to_string())
            .query("offset", request.offset.to_string());

        let response: FindResponse = self.http.get_json_with_config(FIND_PATH, params).await?;

        let total_results = response.header.total_results;
        let entries: Vec<GazetteerEntry> =
            response.results.into_iter().map(|r| r.entry).collect();
        let has_more = more_after(total_results, request.offset, request.page_size);

        debug!(
            "page offset={} entries={} total={total_results} has_more={has_more}",
            request.offset,
            entries.len(),
        );

        Ok(PageResult {
            entries,
            total_results,
            has_more,
        })
    }

    /// Fetch every entry matching `query`, across all pages
    pub async fn find_all(&self, query: &str) -> Result<Vec<GazetteerEntry>> {
        fetch_all(self, query, self.page_size).await
    }

    /// Total matches the server reports for `query`, without aggregating.
    ///
    /// Fetches a single one-entry page and reads the header count.
    pub async fn total_results(&self, query: &str) -> Result<u64> {
        let page = self.fetch_page(&PageRequest::new(query, 1)).await?;
        Ok(page.total_results)
    }
}

#[async_trait]
impl PageFetcher for NamesClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        NamesClient::fetch_page(self, request).await
    }
}

/// Builder for [`NamesClient`]
#[derive(Debug)]
pub struct NamesClientBuilder {
    api_key: ApiKey,
    base_url: String,
    page_size: u32,
    timeout: Duration,
    user_agent: Option<String>,
}

impl NamesClientBuilder {
    fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Point the client at a different endpoint (tests, proxies)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Page size used by `find_all`
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User agent sent with every request
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Validate the configuration and build the client
    pub fn build(self) -> Result<NamesClient> {
        Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::config("page_size must be positive"));
        }

        let mut config = HttpClientConfig::builder()
            .base_url(self.base_url)
            .timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            config = config.user_agent(agent);
        }

        Ok(NamesClient {
            http: HttpClient::with_config(config.build()),
            api_key: self.api_key,
            page_size: self.page_size,
        })
    }
}
