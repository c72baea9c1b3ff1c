//! HTTPS fetcher — one blocking GET per source, body returned as text.

use crate::error::{DocError, Result};
use log::info;
use reqwest::blocking::Client;

/// Fetch the full response body for `url`.
///
/// A transport failure (DNS, TLS, refused connection) maps to
/// [`DocError::Network`]; a response outside the 2xx range maps to
/// [`DocError::Fetch`]. One request per call — no retries, transport
/// default timeouts only.
pub fn fetch_text(client: &Client, url: &str) -> Result<String> {
    info!("fetching {url}");

    let response = client.get(url).send().map_err(|source| DocError::Network {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocError::Fetch {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    response.text().map_err(|source| DocError::Network {
        url: url.to_string(),
        source,
    })
}
