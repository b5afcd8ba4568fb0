//! The search orchestrator: validation, dispatch, and generation-checked
//! commits.
//!
//! [`SearchOrchestrator`] owns the invention description, the shared
//! validation error, and one [`ChannelState`] per channel. A dispatch
//! validates the description, bumps the generation counter, moves both
//! channels to `Loading`, and hands back an immutable [`Dispatch`]
//! ticket describing the two requests to issue. Completions are applied
//! through the `commit_*` methods, which drop any completion whose
//! generation no longer matches the channel (a superseded dispatch's
//! late response must not overwrite newer state).

use crate::error::SearchError;
use crate::orchestrator::state::ChannelState;
use crate::types::{Channel, PaperResult, PaperSearchRequest, PatentResult, PatentSearchRequest};

/// Inline message shown when dispatch is attempted with an empty or
/// whitespace-only description.
pub const VALIDATION_MESSAGE: &str = "Please enter a description of your invention.";

/// The immutable outcome of a successful dispatch: the generation it
/// was issued under and the two per-channel requests to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// Generation this dispatch was issued under. Completions must echo
    /// it back for the commit to apply.
    pub generation: u64,
    /// Request for the paper channel.
    pub papers: PaperSearchRequest,
    /// Request for the patent channel.
    pub patents: PatentSearchRequest,
}

/// Owns all search state: input, validation error, and the two
/// independent channel states.
///
/// All methods are synchronous; the async work happens in
/// [`crate::orchestrator::drive`], which feeds completions back in as
/// events on the single control thread.
#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    description: String,
    validation_error: Option<String>,
    papers: ChannelState<PaperResult>,
    patents: ChannelState<PatentResult>,
    generation: u64,
    max_results: usize,
}

impl SearchOrchestrator {
    /// A fresh orchestrator. `max_results` caps the paper request.
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results,
            ..Default::default()
        }
    }

    /// The current invention description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the invention description. Ignored while a search is in
    /// flight (the input is disabled during loading).
    pub fn set_description(&mut self, description: impl Into<String>) {
        if self.is_loading() {
            return;
        }
        self.description = description.into();
    }

    /// The shared validation error, if the last dispatch attempt was
    /// rejected for an empty description.
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// State of the paper channel.
    pub fn papers(&self) -> &ChannelState<PaperResult> {
        &self.papers
    }

    /// State of the patent channel.
    pub fn patents(&self) -> &ChannelState<PatentResult> {
        &self.patents
    }

    /// Whether either channel has a call in flight. While true, all
    /// dispatch routes are ignored.
    pub fn is_loading(&self) -> bool {
        self.papers.is_loading() || self.patents.is_loading()
    }

    /// Attempt to start a new dispatch cycle.
    ///
    /// Returns `None` without touching any state if a search is already
    /// in flight. Returns `None` and sets the shared validation error
    /// if the description is empty or whitespace-only (channel states
    /// are left untouched; no network activity may be performed).
    ///
    /// On success, clears the validation error, moves both channels to
    /// `Loading` under a fresh generation, and returns the ticket the
    /// caller uses to issue the two concurrent calls.
    pub fn begin_dispatch(&mut self) -> Option<Dispatch> {
        if self.is_loading() {
            tracing::debug!("dispatch ignored: a search is already in flight");
            return None;
        }
        if self.description.trim().is_empty() {
            self.validation_error = Some(VALIDATION_MESSAGE.to_owned());
            return None;
        }
        self.validation_error = None;
        self.generation += 1;
        self.papers.begin(self.generation);
        self.patents.begin(self.generation);
        tracing::debug!(generation = self.generation, "dispatch started");

        Some(Dispatch {
            generation: self.generation,
            papers: PaperSearchRequest {
                description: self.description.clone(),
                max_results: self.max_results,
            },
            patents: PatentSearchRequest {
                description: self.description.clone(),
            },
        })
    }

    /// The line-confirm input gesture on the description field (Enter
    /// without a newline). Equivalent to [`Self::begin_dispatch`],
    /// including the in-flight guard.
    pub fn submit_line(&mut self) -> Option<Dispatch> {
        self.begin_dispatch()
    }

    /// Apply the paper channel's completion for `generation`.
    ///
    /// Stale completions (generation mismatch) are silently dropped.
    /// Returns whether the completion was applied.
    pub fn commit_papers(
        &mut self,
        generation: u64,
        outcome: Result<Vec<PaperResult>, SearchError>,
    ) -> bool {
        Self::commit(Channel::Papers, &mut self.papers, generation, outcome)
    }

    /// Apply the patent channel's completion for `generation`.
    ///
    /// Stale completions (generation mismatch) are silently dropped.
    /// Returns whether the completion was applied.
    pub fn commit_patents(
        &mut self,
        generation: u64,
        outcome: Result<Vec<PatentResult>, SearchError>,
    ) -> bool {
        Self::commit(Channel::Patents, &mut self.patents, generation, outcome)
    }

    fn commit<T>(
        channel: Channel,
        state: &mut ChannelState<T>,
        generation: u64,
        outcome: Result<Vec<T>, SearchError>,
    ) -> bool {
        if generation != state.generation() {
            tracing::debug!(
                %channel,
                generation,
                current = state.generation(),
                "stale completion discarded"
            );
            return false;
        }
        match outcome {
            Ok(results) => {
                tracing::debug!(%channel, count = results.len(), "channel succeeded");
                state.succeed(results);
            }
            Err(err) => {
                tracing::warn!(%channel, error = %err, "channel failed");
                state.fail(channel.failure_message());
            }
        }
        true
    }
}
