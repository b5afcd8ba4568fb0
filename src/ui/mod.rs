//! Presentation state: result cards, collapsible sections, and the page
//! that wires them to the orchestrator.
//!
//! These types hold display state only, with no rendering framework. A host
//! UI reads the derived state (section view, visible cards, badge and
//! summary text) and writes back disclosure toggles.

pub mod card;
pub mod page;
pub mod section;

pub use card::{PaperCard, PatentCard, SUMMARY_PREVIEW_CHARS};
pub use page::SearchPage;
pub use section::{ResultSection, SectionView};
