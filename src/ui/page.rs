//! Page composition: one orchestrator wired to two result sections.
//!
//! [`SearchPage`] is the thin top layer. It forwards input to the
//! orchestrator, and after every dispatch or completion rebuilds the
//! affected section's card arena from that channel's state, so
//! disclosure state for removed results dies with them.
//!
//! # Wiring
//!
//! ```no_run
//! use prior_art_search::backend::HttpBackend;
//! use prior_art_search::config::SearchConfig;
//! use prior_art_search::orchestrator::spawn_dispatch;
//! use prior_art_search::ui::page::SearchPage;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = SearchConfig::from_env();
//! let mut page = SearchPage::new(config.clone());
//! let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
//!
//! page.set_description("A wireless charging pad with adaptive coil alignment");
//! if let Some(dispatch) = page.submit() {
//!     spawn_dispatch(Arc::new(HttpBackend), config, dispatch, events_tx);
//! }
//! while let Some(event) = events_rx.recv().await {
//!     page.apply_event(event);
//! }
//! # }
//! ```

use crate::config::SearchConfig;
use crate::orchestrator::dispatch::{Dispatch, SearchOrchestrator};
use crate::orchestrator::drive::SearchEvent;
use crate::types::Channel;
use crate::ui::card::{PaperCard, PatentCard};
use crate::ui::section::ResultSection;

/// The whole page: description input, shared validation error, and the
/// two collapsible result sections.
#[derive(Debug)]
pub struct SearchPage {
    orchestrator: SearchOrchestrator,
    paper_section: ResultSection<PaperCard>,
    patent_section: ResultSection<PatentCard>,
}

impl SearchPage {
    /// A fresh page using `config` for the paper result cap.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            orchestrator: SearchOrchestrator::new(config.max_results),
            paper_section: ResultSection::new(Channel::Papers),
            patent_section: ResultSection::new(Channel::Patents),
        }
    }

    /// The current invention description.
    pub fn description(&self) -> &str {
        self.orchestrator.description()
    }

    /// Update the invention description (ignored while loading).
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.orchestrator.set_description(description);
    }

    /// The inline validation error near the input, if any.
    pub fn validation_error(&self) -> Option<&str> {
        self.orchestrator.validation_error()
    }

    /// The paper channel's error message, if its last call failed.
    pub fn paper_error(&self) -> Option<&str> {
        self.orchestrator.papers().error()
    }

    /// The patent channel's error message, if its last call failed.
    pub fn patent_error(&self) -> Option<&str> {
        self.orchestrator.patents().error()
    }

    /// Whether either channel has a call in flight.
    pub fn is_loading(&self) -> bool {
        self.orchestrator.is_loading()
    }

    /// The explicit search control. On success both sections enter
    /// their loading state and the returned [`Dispatch`] must be handed
    /// to [`crate::orchestrator::spawn_dispatch`].
    pub fn submit(&mut self) -> Option<Dispatch> {
        let dispatch = self.orchestrator.begin_dispatch()?;
        self.sync_section(Channel::Papers);
        self.sync_section(Channel::Patents);
        Some(dispatch)
    }

    /// The line-confirm gesture on the description field. Same
    /// behaviour and loading guard as [`Self::submit`].
    pub fn submit_line(&mut self) -> Option<Dispatch> {
        self.submit()
    }

    /// Apply one channel completion and refresh that channel's section.
    /// Stale events are dropped without touching any section. Returns
    /// whether the event was applied.
    pub fn apply_event(&mut self, event: SearchEvent) -> bool {
        let channel = match &event {
            SearchEvent::Papers { .. } => Channel::Papers,
            SearchEvent::Patents { .. } => Channel::Patents,
        };
        let applied = self.orchestrator.apply_event(event);
        if applied {
            self.sync_section(channel);
        }
        applied
    }

    /// The papers section.
    pub fn paper_section(&self) -> &ResultSection<PaperCard> {
        &self.paper_section
    }

    /// Mutable papers section (for disclosure toggles).
    pub fn paper_section_mut(&mut self) -> &mut ResultSection<PaperCard> {
        &mut self.paper_section
    }

    /// The patents section.
    pub fn patent_section(&self) -> &ResultSection<PatentCard> {
        &self.patent_section
    }

    /// Mutable patents section (for disclosure toggles).
    pub fn patent_section_mut(&mut self) -> &mut ResultSection<PatentCard> {
        &mut self.patent_section
    }

    /// Read access to the underlying orchestrator state.
    pub fn orchestrator(&self) -> &SearchOrchestrator {
        &self.orchestrator
    }

    fn sync_section(&mut self, channel: Channel) {
        match channel {
            Channel::Papers => {
                let state = self.orchestrator.papers();
                let cards = state.results().iter().cloned().map(PaperCard::new).collect();
                self.paper_section.update(state.phase(), cards);
            }
            Channel::Patents => {
                let state = self.orchestrator.patents();
                let cards = state
                    .results()
                    .iter()
                    .cloned()
                    .map(PatentCard::new)
                    .collect();
                self.patent_section.update(state.phase(), cards);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::types::{PaperResult, PatentResult};
    use crate::ui::section::SectionView;

    fn page() -> SearchPage {
        SearchPage::new(SearchConfig::default())
    }

    fn paper(score: f64) -> PaperResult {
        PaperResult {
            title: "T".into(),
            summary: "S".into(),
            authors: vec![],
            pdf_url: "https://example.com/p.pdf".into(),
            published: "2024-01-01".into(),
            relevance_score: score,
            reasoning: String::new(),
        }
    }

    fn patent(score: f64) -> PatentResult {
        PatentResult {
            id: "US1B2".into(),
            title: "T".into(),
            summary: "S".into(),
            relevance_score: score,
        }
    }

    #[test]
    fn empty_submit_shows_validation_error_and_leaves_sections_hidden() {
        let mut page = page();
        assert!(page.submit().is_none());
        assert!(page.validation_error().is_some());
        assert_eq!(page.paper_section().view(), SectionView::Hidden);
        assert_eq!(page.patent_section().view(), SectionView::Hidden);
    }

    #[test]
    fn submit_moves_both_sections_to_loading() {
        let mut page = page();
        page.set_description("pad");
        let dispatch = page.submit().expect("dispatch");
        assert_eq!(page.paper_section().view(), SectionView::Loading);
        assert_eq!(page.patent_section().view(), SectionView::Loading);
        assert!(page.is_loading());
        assert_eq!(dispatch.papers.max_results, 10);
    }

    #[test]
    fn submit_line_honours_the_loading_guard() {
        let mut page = page();
        page.set_description("pad");
        assert!(page.submit_line().is_some());
        assert!(page.submit_line().is_none());
        assert!(page.submit().is_none());
    }

    #[test]
    fn sections_settle_independently() {
        let mut page = page();
        page.set_description("pad");
        let dispatch = page.submit().expect("dispatch");

        assert!(page.apply_event(SearchEvent::Papers {
            generation: dispatch.generation,
            outcome: Ok(vec![paper(0.85)]),
        }));
        assert_eq!(page.paper_section().view(), SectionView::Populated);
        assert_eq!(page.patent_section().view(), SectionView::Loading);

        assert!(page.apply_event(SearchEvent::Patents {
            generation: dispatch.generation,
            outcome: Ok(vec![patent(0.4)]),
        }));
        assert_eq!(page.patent_section().view(), SectionView::Populated);
    }

    #[test]
    fn failed_channel_surfaces_its_error_without_touching_the_other() {
        let mut page = page();
        page.set_description("pad");
        let dispatch = page.submit().expect("dispatch");

        page.apply_event(SearchEvent::Papers {
            generation: dispatch.generation,
            outcome: Ok(vec![paper(0.85)]),
        });
        page.apply_event(SearchEvent::Patents {
            generation: dispatch.generation,
            outcome: Err(SearchError::Http("boom".into())),
        });

        assert_eq!(
            page.patent_error(),
            Some("Failed to search for patents. Please try again.")
        );
        assert_eq!(page.patent_section().view(), SectionView::Empty);
        assert!(page.paper_error().is_none());
        assert_eq!(page.paper_section().view(), SectionView::Populated);
        assert_eq!(page.paper_section().cards().len(), 1);
    }

    #[test]
    fn stale_event_changes_nothing() {
        let mut page = page();
        page.set_description("pad");
        let first = page.submit().expect("first");
        page.apply_event(SearchEvent::Papers {
            generation: first.generation,
            outcome: Ok(vec![]),
        });
        page.apply_event(SearchEvent::Patents {
            generation: first.generation,
            outcome: Ok(vec![]),
        });

        let _second = page.submit().expect("second");
        assert!(!page.apply_event(SearchEvent::Papers {
            generation: first.generation,
            outcome: Ok(vec![paper(0.99)]),
        }));
        assert_eq!(page.paper_section().view(), SectionView::Loading);
    }

    #[test]
    fn new_results_replace_cards_and_their_disclosure() {
        let mut page = page();
        page.set_description("pad");
        let first = page.submit().expect("first");

        let long = "x".repeat(200);
        let mut result = paper(0.9);
        result.summary = long;
        page.apply_event(SearchEvent::Papers {
            generation: first.generation,
            outcome: Ok(vec![result.clone()]),
        });
        page.apply_event(SearchEvent::Patents {
            generation: first.generation,
            outcome: Ok(vec![]),
        });

        // Expand the first card's summary, then run a fresh search.
        page.paper_section_mut().cards_mut()[0].toggle_summary();
        assert!(page.paper_section().cards()[0].summary_expanded());

        let second = page.submit().expect("second");
        page.apply_event(SearchEvent::Papers {
            generation: second.generation,
            outcome: Ok(vec![result]),
        });
        assert!(!page.paper_section().cards()[0].summary_expanded());
    }
}
