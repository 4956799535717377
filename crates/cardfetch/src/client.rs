use crate::prelude::*;
use cardfetch_core::upstream::UpstreamResponse;
use log::debug;
use std::time::Instant;

/// HTTP client for the card database
///
/// Every HTTP status is returned as data. Only a request that produced no
/// response at all fails, with [`Error::Transport`].
#[derive(Debug, Clone)]
pub struct CardClient {
    http: reqwest::Client,
}

impl CardClient {
    pub fn new() -> Result<Self, Error> {
        use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("cardfetch/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(f!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Issue a single GET and normalize whatever comes back
    pub async fn fetch(&self, url: &str) -> Result<UpstreamResponse, Error> {
        let start = Instant::now();
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(f!("Failed to fetch {url}: {e}")))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(f!("Failed to read response body from {url}: {e}")))?;

        debug!(
            "GET {url} -> {status} ({} bytes in {} ms)",
            body.len(),
            start.elapsed().as_millis()
        );

        Ok(UpstreamResponse::new(status, headers, body))
    }
}
