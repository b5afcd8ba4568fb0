//! Search orchestration: input validation, concurrent two-channel
//! dispatch, and generation-checked state commits.
//!
//! The orchestrator is a synchronous state machine
//! ([`dispatch::SearchOrchestrator`]) driven by events from the async
//! fan-out in [`drive`]. Per-channel lifecycle state lives in [`state`].

pub mod dispatch;
pub mod drive;
pub mod state;

pub use dispatch::{Dispatch, SearchOrchestrator, VALIDATION_MESSAGE};
pub use drive::{run_until_settled, search_once, spawn_dispatch, SearchEvent, SearchOutcome};
pub use state::{ChannelPhase, ChannelState};
