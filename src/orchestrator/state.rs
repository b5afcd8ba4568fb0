//! Per-channel request lifecycle state.
//!
//! Each result channel owns one [`ChannelState`]: a phase, the current
//! result sequence, an optional error message, and the generation of
//! the dispatch that last touched it. The two channels' states advance
//! independently and never block each other.
//!
//! Invariant (enforced by the transition methods, which are the only
//! way to mutate a `ChannelState`): `results` is non-empty only when
//! the phase is `Succeeded`; `error` is set only when the phase is
//! `Failed`; at most one of the two holds at a time.

/// Lifecycle phase of one result channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelPhase {
    /// No dispatch has touched this channel yet.
    #[default]
    Idle,
    /// A call is in flight.
    Loading,
    /// The last call resolved with a (possibly empty) result sequence.
    Succeeded,
    /// The last call failed; `error` carries the user-facing message.
    Failed,
}

/// State of one result channel across dispatch cycles.
#[derive(Debug, Clone)]
pub struct ChannelState<T> {
    phase: ChannelPhase,
    results: Vec<T>,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for ChannelState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChannelState<T> {
    /// A fresh channel in the `Idle` phase.
    pub fn new() -> Self {
        Self {
            phase: ChannelPhase::Idle,
            results: Vec::new(),
            error: None,
            generation: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ChannelPhase {
        self.phase
    }

    /// Current result sequence (empty unless `Succeeded`).
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Current error message (set only when `Failed`).
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generation of the dispatch that last touched this channel.
    /// Completion events carrying any other generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a call is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == ChannelPhase::Loading
    }

    /// Enter `Loading` for a new dispatch generation, discarding prior
    /// results and error.
    pub fn begin(&mut self, generation: u64) {
        self.phase = ChannelPhase::Loading;
        self.results.clear();
        self.error = None;
        self.generation = generation;
    }

    /// Enter `Succeeded` with a replacement result sequence.
    pub fn succeed(&mut self, results: Vec<T>) {
        self.phase = ChannelPhase::Succeeded;
        self.results = results;
        self.error = None;
    }

    /// Enter `Failed` with a user-facing message, discarding results.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = ChannelPhase::Failed;
        self.results.clear();
        self.error = Some(message.into());
    }
}
