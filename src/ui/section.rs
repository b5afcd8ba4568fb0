//! Collapsible result section: one named group of cards per channel.
//!
//! A section's visual state is derived from its channel's phase and
//! result count. Only a populated section has an interactive header;
//! loading and empty sections ignore disclosure input. A failed channel
//! renders like an empty one (stale results are never shown), with the
//! error itself surfaced from the orchestrator's channel state, not
//! here.

use crate::disclosure::Disclosure;
use crate::orchestrator::state::ChannelPhase;
use crate::types::Channel;

/// Mutually exclusive visual states of a result section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
    /// Nothing to show yet (channel still idle; section not rendered).
    Hidden,
    /// Busy indicator with the channel's loading label.
    Loading,
    /// Header plus the channel's inline no-results notice.
    Empty,
    /// Interactive header over the list of cards.
    Populated,
}

/// One channel's collapsible group of result cards.
///
/// The card arena is replaced wholesale on every update, so disclosure
/// state belonging to removed results is destroyed with them.
#[derive(Debug, Clone)]
pub struct ResultSection<C> {
    channel: Channel,
    view: SectionView,
    disclosure: Disclosure,
    cards: Vec<C>,
}

impl<C> ResultSection<C> {
    /// A fresh, hidden section for `channel`.
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            view: SectionView::Hidden,
            disclosure: Disclosure::inert(),
            cards: Vec::new(),
        }
    }

    /// The channel this section presents.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Current visual state.
    pub fn view(&self) -> SectionView {
        self.view
    }

    /// Section header text.
    pub fn title(&self) -> &'static str {
        self.channel.section_title()
    }

    /// Busy-indicator text (meaningful while [`SectionView::Loading`]).
    pub fn loading_label(&self) -> &'static str {
        self.channel.loading_label()
    }

    /// No-results notice (meaningful while [`SectionView::Empty`]).
    pub fn empty_notice(&self) -> &'static str {
        self.channel.empty_notice()
    }

    /// Rebuild this section from its channel's phase and a fresh card
    /// arena. A populated section starts expanded; every other state is
    /// non-interactive.
    pub fn update(&mut self, phase: ChannelPhase, cards: Vec<C>) {
        match phase {
            ChannelPhase::Idle => {
                self.view = SectionView::Hidden;
                self.cards = Vec::new();
                self.disclosure = Disclosure::inert();
            }
            ChannelPhase::Loading => {
                self.view = SectionView::Loading;
                self.cards = Vec::new();
                self.disclosure = Disclosure::inert();
            }
            ChannelPhase::Succeeded if cards.is_empty() => {
                self.view = SectionView::Empty;
                self.cards = Vec::new();
                self.disclosure = Disclosure::inert();
            }
            ChannelPhase::Succeeded => {
                self.view = SectionView::Populated;
                self.cards = cards;
                self.disclosure = Disclosure::section();
            }
            // No stale results on failure; the error message comes from
            // the orchestrator's channel state.
            ChannelPhase::Failed => {
                self.view = SectionView::Empty;
                self.cards = Vec::new();
                self.disclosure = Disclosure::inert();
            }
        }
    }

    /// Whether the card list is currently shown.
    pub fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    /// Toggle the section header. Only a populated section responds;
    /// toggling never re-fetches. Returns whether the state changed.
    pub fn toggle(&mut self) -> bool {
        self.disclosure.toggle()
    }

    /// All cards in this section, regardless of disclosure.
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Mutable card access for per-card toggles.
    pub fn cards_mut(&mut self) -> &mut [C] {
        &mut self.cards
    }

    /// The cards currently visible: the full list when populated and
    /// expanded, otherwise nothing.
    pub fn visible_cards(&self) -> &[C] {
        if self.view == SectionView::Populated && self.disclosure.is_expanded() {
            &self.cards
        } else {
            &[]
        }
    }
}
