//! HTTP transport
//!
//! A reqwest-backed client that issues the paged GETs. Retry with backoff
//! lives here, not in the controller: the pagination state machine treats
//! a rejected fetch as final and never re-issues it on its own.

mod client;

pub use client::{
    shared_client, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig,
};
