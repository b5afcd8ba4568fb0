//! Async plumbing between a [`Dispatch`] ticket and the orchestrator.
//!
//! The two backend calls run as independent tokio tasks; each sends a
//! [`SearchEvent`] the instant its own call resolves, with no
//! synchronization against the other. All state mutation stays on the
//! control thread that owns the [`SearchOrchestrator`] and drains the
//! event receiver, so the two channels can never race on shared state.

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::orchestrator::dispatch::{Dispatch, SearchOrchestrator};
use crate::types::{PaperResult, PaperSearchRequest, PatentResult, PatentSearchRequest};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One channel's completion, tagged with the dispatch generation it
/// belongs to so stale completions can be recognised at commit time.
#[derive(Debug)]
pub enum SearchEvent {
    /// The paper channel's call resolved.
    Papers {
        /// Generation of the dispatch that issued the call.
        generation: u64,
        /// The call's outcome.
        outcome: Result<Vec<PaperResult>, SearchError>,
    },
    /// The patent channel's call resolved.
    Patents {
        /// Generation of the dispatch that issued the call.
        generation: u64,
        /// The call's outcome.
        outcome: Result<Vec<PatentResult>, SearchError>,
    },
}

impl SearchOrchestrator {
    /// Route a completion event into the matching channel's commit.
    /// Returns whether the event was applied (stale events are not).
    pub fn apply_event(&mut self, event: SearchEvent) -> bool {
        match event {
            SearchEvent::Papers {
                generation,
                outcome,
            } => self.commit_papers(generation, outcome),
            SearchEvent::Patents {
                generation,
                outcome,
            } => self.commit_patents(generation, outcome),
        }
    }
}

/// Fan a dispatch out as two independent tasks.
///
/// Each task issues its channel's call and sends the completion on
/// `events` the moment it resolves; completion order between the two is
/// unconstrained. Neither task retries, and neither is cancelled when
/// superseded; a later dispatch simply wins at commit time.
pub fn spawn_dispatch<B>(
    backend: Arc<B>,
    config: SearchConfig,
    dispatch: Dispatch,
    events: mpsc::UnboundedSender<SearchEvent>,
) where
    B: SearchBackend + 'static,
{
    let generation = dispatch.generation;

    {
        let backend = Arc::clone(&backend);
        let config = config.clone();
        let request = dispatch.papers;
        let events = events.clone();
        tokio::spawn(async move {
            let outcome = backend.search_papers(&request, &config).await;
            // The receiver may be gone if the page was torn down.
            let _ = events.send(SearchEvent::Papers {
                generation,
                outcome,
            });
        });
    }

    {
        let request = dispatch.patents;
        tokio::spawn(async move {
            let outcome = backend.search_patents(&request, &config).await;
            let _ = events.send(SearchEvent::Patents {
                generation,
                outcome,
            });
        });
    }
}

/// Drain events until neither channel is loading (or the sender side is
/// dropped). Convenience for hosts that block on one dispatch cycle.
pub async fn run_until_settled(
    orchestrator: &mut SearchOrchestrator,
    events: &mut mpsc::UnboundedReceiver<SearchEvent>,
) {
    while orchestrator.is_loading() {
        match events.recv().await {
            Some(event) => {
                orchestrator.apply_event(event);
            }
            None => break,
        }
    }
}

/// The two channels' independent outcomes for one description.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Paper channel outcome.
    pub papers: Result<Vec<PaperResult>, SearchError>,
    /// Patent channel outcome.
    pub patents: Result<Vec<PatentResult>, SearchError>,
}

/// One-shot search: validate, fan out both calls concurrently, and
/// return both outcomes once each has resolved.
///
/// The two outcomes are independent: one channel failing does not
/// affect the other's results.
///
/// # Errors
///
/// Returns [`SearchError::EmptyDescription`] for a blank description
/// and [`SearchError::Config`] for an invalid configuration; these are
/// caught before any network activity.
pub async fn search_once<B>(
    backend: &B,
    config: &SearchConfig,
    description: &str,
) -> Result<SearchOutcome, SearchError>
where
    B: SearchBackend,
{
    config.validate()?;
    if description.trim().is_empty() {
        return Err(SearchError::EmptyDescription);
    }

    let papers_request = PaperSearchRequest {
        description: description.to_owned(),
        max_results: config.max_results,
    };
    let patents_request = PatentSearchRequest {
        description: description.to_owned(),
    };

    let (papers, patents) = futures::future::join(
        backend.search_papers(&papers_request, config),
        backend.search_patents(&patents_request, config),
    )
    .await;

    Ok(SearchOutcome { papers, patents })
}
