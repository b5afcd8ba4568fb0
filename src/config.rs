//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] holds the two endpoint locations, the paper result
//! cap, and the per-request timeout. The endpoint locations are the only
//! values that may come from the environment.

use crate::error::SearchError;
use url::Url;

/// Environment variable overriding the paper-search endpoint.
pub const ENV_PAPER_URL: &str = "PRIOR_ART_PAPER_URL";
/// Environment variable overriding the patent-search endpoint.
pub const ENV_PATENT_URL: &str = "PRIOR_ART_PATENT_URL";

/// Configuration for a prior-art search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Paper-search endpoint URL.
    pub paper_search_url: String,
    /// Patent-search endpoint URL.
    pub patent_search_url: String,
    /// Maximum number of papers requested per dispatch.
    pub max_results: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            paper_search_url: "http://localhost:8000/api/search/papers".into(),
            patent_search_url: "http://localhost:8000/api/search/patents".into(),
            max_results: 10,
            timeout_seconds: 8,
        }
    }
}

impl SearchConfig {
    /// Build a configuration from defaults, with the two endpoint
    /// locations overridable via [`ENV_PAPER_URL`] and
    /// [`ENV_PATENT_URL`]. No other field is environment-driven.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(ENV_PAPER_URL) {
            config.paper_search_url = value;
        }
        if let Ok(value) = std::env::var(ENV_PATENT_URL) {
            config.patent_search_url = value;
        }
        config
    }

    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - both endpoint URLs must parse
    /// - `max_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if Url::parse(&self.paper_search_url).is_err() {
            return Err(SearchError::Config(format!(
                "invalid paper_search_url: {}",
                self.paper_search_url
            )));
        }
        if Url::parse(&self.patent_search_url).is_err() {
            return Err(SearchError::Config(format!(
                "invalid patent_search_url: {}",
                self.patent_search_url
            )));
        }
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
