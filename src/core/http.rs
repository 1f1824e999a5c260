//! HTTP utilities for Sleeper API communication

use crate::{core::config::EngineConfig, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Headers sent with every upstream request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared upstream client. The timeout bounds every call, so a
/// hung upstream surfaces as an ordinary failed fetch.
pub fn build_client(config: &EngineConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(HeaderValue::from_str(&config.user_agent)?)
        .default_headers(common_headers())
        .timeout(config.timeout())
        .build()?;
    Ok(client)
}
