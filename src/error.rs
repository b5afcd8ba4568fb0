//! Error types for the prior-art-search crate.
//!
//! All errors use stable string messages suitable for programmatic
//! handling. The presentation layer never shows a raw transport error to
//! the user; it substitutes the fixed per-channel message from
//! [`crate::types::Channel::failure_message`].

/// Errors that can occur during a prior-art search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The invention description was empty or whitespace-only.
    #[error("invention description is empty")]
    EmptyDescription,

    /// An HTTP request to a search endpoint failed or returned a
    /// non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a search endpoint response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Whether this error belongs to the channel-transport class
    /// (network or decode failure on one channel), as opposed to a
    /// validation or configuration problem caught before any request
    /// is issued.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Parse(_))
    }
}

/// Convenience type alias for prior-art-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
