//! The two remote search endpoints, behind a mockable trait.
//!
//! [`SearchBackend`] is the seam between the orchestrator and the
//! network: one method per channel, each posting a field-tagged JSON
//! request and returning an ordered sequence of that channel's result
//! records. [`HttpBackend`] is the reqwest implementation; tests supply
//! their own.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{PaperResult, PaperSearchRequest, PatentResult, PatentSearchRequest};
use std::time::Duration;

/// A backend capable of serving both search channels.
///
/// The two methods are independent; callers may (and do) run them
/// concurrently with no synchronization between them. Implementations
/// must be `Send + Sync` so the two calls can be spawned as separate
/// tasks.
pub trait SearchBackend: Send + Sync {
    /// Search for candidate research papers.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure or a
    /// non-success status, [`SearchError::Parse`] if the response body
    /// is not a valid result sequence.
    fn search_papers(
        &self,
        request: &PaperSearchRequest,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<PaperResult>, SearchError>> + Send;

    /// Search for candidate patents.
    ///
    /// # Errors
    ///
    /// Same classes as [`SearchBackend::search_papers`].
    fn search_patents(
        &self,
        request: &PatentSearchRequest,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<PatentResult>, SearchError>> + Send;
}

/// Build a [`reqwest::Client`] for the search endpoints.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Production backend speaking JSON over HTTP to the two configured
/// endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBackend;

impl SearchBackend for HttpBackend {
    async fn search_papers(
        &self,
        request: &PaperSearchRequest,
        config: &SearchConfig,
    ) -> Result<Vec<PaperResult>, SearchError> {
        tracing::trace!(url = %config.paper_search_url, "paper search request");

        let client = build_client(config)?;
        let response = client
            .post(&config.paper_search_url)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("paper search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("paper search HTTP error: {e}")))?;

        let results: Vec<PaperResult> = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("paper search response parse failed: {e}")))?;

        tracing::debug!(count = results.len(), "paper search response received");
        Ok(results)
    }

    async fn search_patents(
        &self,
        request: &PatentSearchRequest,
        config: &SearchConfig,
    ) -> Result<Vec<PatentResult>, SearchError> {
        tracing::trace!(url = %config.patent_search_url, "patent search request");

        let client = build_client(config)?;
        let response = client
            .post(&config.patent_search_url)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("patent search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("patent search HTTP error: {e}")))?;

        let results: Vec<PatentResult> = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("patent search response parse failed: {e}")))?;

        tracing::debug!(count = results.len(), "patent search response received");
        Ok(results)
    }
}
