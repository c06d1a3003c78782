// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, REFERER};

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Create a configured HTTP client shared by all lookup tasks.
///
/// Every request carries the configured User-Agent and Referer
/// headers and the per-request timeout.
pub fn create_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    let referer = HeaderValue::from_str(&config.referer)
        .map_err(|e| AppError::config(format!("Invalid referer header: {e}")))?;
    headers.insert(REFERER, referer);

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_defaults() {
        assert!(create_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_create_client_rejects_bad_referer() {
        let config = HttpConfig {
            referer: "bad\nheader".to_string(),
            ..HttpConfig::default()
        };
        assert!(create_client(&config).is_err());
    }
}
