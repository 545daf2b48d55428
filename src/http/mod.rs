//! HTTP transport module
//!
//! A thin GET-only wrapper over reqwest: base URL resolution, query
//! parameters, JSON decoding, and status checking. Every request runs with
//! a fixed timeout and non-success responses surface as typed errors.

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_TIMEOUT,
};
