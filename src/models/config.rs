//! Application configuration structures.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Retry and pacing behavior
    #[serde(default)]
    pub lookup: LookupConfig,

    /// CSS selectors for product page extraction
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.lookup.max_attempts == 0 {
            return Err(AppError::validation("lookup.max_attempts must be > 0"));
        }
        if self.selectors.title.trim().is_empty() {
            return Err(AppError::validation("selectors.title is empty"));
        }
        if self.selectors.drawing_marker.trim().is_empty() {
            return Err(AppError::validation("selectors.drawing_marker is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Referer header identifying the calling site
    #[serde(default = "defaults::referer")]
    pub referer: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            referer: defaults::referer(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Retry and pacing behavior for batch lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Maximum fetch attempts per product page
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: usize,

    /// Delay between failed attempts in milliseconds
    #[serde(default = "defaults::backoff_ms")]
    pub backoff_ms: u64,

    /// Delay between task dispatches in milliseconds
    #[serde(default = "defaults::request_delay_ms")]
    pub request_delay_ms: u64,
}

impl LookupConfig {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::max_attempts(),
            backoff_ms: defaults::backoff_ms(),
            request_delay_ms: defaults::request_delay_ms(),
        }
    }
}

/// CSS selectors for extracting product fields from a page.
///
/// Defaults target a WooCommerce product page layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Selector for the product title heading
    #[serde(default = "defaults::title_selector")]
    pub title: String,

    /// Selector for the stock availability descriptor
    #[serde(default = "defaults::stock_selector")]
    pub stock_status: String,

    /// Selector for the price amount element
    #[serde(default = "defaults::price_selector")]
    pub price: String,

    /// Selector for the primary product image
    #[serde(default = "defaults::image_selector")]
    pub image: String,

    /// Image source attributes in priority order (lazy-load first)
    #[serde(default = "defaults::image_attrs")]
    pub image_attrs: Vec<String>,

    /// Substring of an image src identifying a technical drawing asset
    #[serde(default = "defaults::drawing_marker")]
    pub drawing_marker: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: defaults::title_selector(),
            stock_status: defaults::stock_selector(),
            price: defaults::price_selector(),
            image: defaults::image_selector(),
            image_attrs: defaults::image_attrs(),
            drawing_marker: defaults::drawing_marker(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0".into()
    }
    pub fn referer() -> String {
        "https://vongbicongnghiep.vn/".into()
    }
    pub fn timeout() -> u64 {
        15
    }

    // Lookup defaults
    pub fn max_attempts() -> usize {
        3
    }
    pub fn backoff_ms() -> u64 {
        1000
    }
    pub fn request_delay_ms() -> u64 {
        500
    }

    // Selector defaults
    pub fn title_selector() -> String {
        "h1.product_title.entry-title".into()
    }
    pub fn stock_selector() -> String {
        "div.availability span.electro-stock-availability p".into()
    }
    pub fn price_selector() -> String {
        "p.price span.woocommerce-Price-amount bdi".into()
    }
    pub fn image_selector() -> String {
        "img.wp-post-image".into()
    }
    pub fn image_attrs() -> Vec<String> {
        vec!["data-lazy-src".into(), "data-src".into(), "src".into()]
    }
    pub fn drawing_marker() -> String {
        "banve".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_attempts() {
        let mut config = Config::default();
        config.lookup.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [lookup]
            request_delay_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.lookup.request_delay_ms, 50);
        assert_eq!(config.lookup.max_attempts, 3);
        assert_eq!(config.http.timeout_secs, 15);
        assert_eq!(config.selectors.image_attrs[0], "data-lazy-src");
    }

    #[test]
    fn durations_convert_from_millis() {
        let lookup = LookupConfig::default();
        assert_eq!(lookup.backoff(), Duration::from_secs(1));
        assert_eq!(lookup.request_delay(), Duration::from_millis(500));
    }
}
