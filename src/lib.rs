//! # prior-art-search
//!
//! Client-side orchestration for a prior-art discovery tool: a user
//! describes an invention, and two independent backend services are
//! queried concurrently, one for candidate research papers and one for
//! candidate patents, each result scored for relevance by the backend.
//!
//! This crate is the search orchestration and result-presentation state
//! machine. It compiles into a host UI as a library dependency; the
//! backends' ranking and retrieval are opaque collaborators consumed
//! only through their JSON response contract.
//!
//! ## Design
//!
//! - Two independent channels (papers, patents) with their own phase,
//!   results, and error state; neither ever blocks the other
//! - A dispatch-generation counter so a superseded dispatch's late
//!   response can never overwrite newer state
//! - All state mutation on one control thread, fed by completion events
//!   from two independently spawned backend calls
//! - Relevance scores bucketed into qualitative display tiers
//! - Nested disclosure state (section and per-card) recreated whenever
//!   a channel's result sequence is replaced

pub mod backend;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod orchestrator;
pub mod relevance;
pub mod types;
pub mod ui;

pub use backend::{HttpBackend, SearchBackend};
pub use config::SearchConfig;
pub use disclosure::Disclosure;
pub use error::{Result, SearchError};
pub use orchestrator::{
    ChannelPhase, Dispatch, SearchEvent, SearchOrchestrator, SearchOutcome,
};
pub use relevance::{classify, RelevanceTier};
pub use types::{Channel, PaperResult, PatentResult};
pub use ui::{PaperCard, PatentCard, ResultSection, SearchPage, SectionView};

use orchestrator::drive;

/// One-shot prior-art search against the configured HTTP endpoints.
///
/// Issues the paper and patent calls concurrently and returns both
/// channels' independent outcomes. Hosts that need incremental,
/// per-channel updates should use [`ui::SearchPage`] with
/// [`orchestrator::spawn_dispatch`] instead.
///
/// # Errors
///
/// Returns [`SearchError::EmptyDescription`] for a blank description
/// and [`SearchError::Config`] for an invalid configuration. Per-channel
/// transport failures are reported inside the returned
/// [`SearchOutcome`], not as an overall error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> prior_art_search::Result<()> {
/// let config = prior_art_search::SearchConfig::from_env();
/// let outcome =
///     prior_art_search::search("A wireless charging pad with adaptive coil alignment", &config)
///         .await?;
/// if let Ok(papers) = &outcome.papers {
///     for paper in papers {
///         println!(
///             "{}: {}",
///             paper.title,
///             prior_art_search::relevance::badge(paper.relevance_score)
///         );
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(description: &str, config: &SearchConfig) -> Result<SearchOutcome> {
    drive::search_once(&HttpBackend, config, description).await
}
