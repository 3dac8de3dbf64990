//! HTTP fetcher for the listing page
//!
//! One GET request, one page. There is no retry policy and no crawl
//! frontier; the fetch either yields a body or fails the mining run.

use crate::{ReelError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with the configured user agent
///
/// The client follows redirects per reqwest's default policy and applies
/// a 30 second request timeout with a 10 second connect timeout.
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the listing page and returns its body as text
///
/// The HTTP status code is logged but deliberately not enforced: whatever
/// body the server returns is handed to the extractor. An error page will
/// simply extract zero records downstream.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ReelError)` - Connection, timeout, or body read failure
pub async fn fetch_listing(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            tracing::error!("Request timed out: {}", url);
        } else if e.is_connect() {
            tracing::error!("Connection failed: {}", url);
        }
        ReelError::Http {
            url: url.to_string(),
            source: e,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("Server returned {} for {}; parsing body anyway", status, url);
    }

    response.text().await.map_err(|e| ReelError::Http {
        url: url.to_string(),
        source: e,
    })
}
