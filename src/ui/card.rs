//! Per-result card state: relevance badge, summary preview truncation,
//! and the card's own disclosure units.
//!
//! A card owns one [`Disclosure`] per expandable field. The summary
//! field is expandable only when the text exceeds the fixed preview
//! length; paper cards additionally expose the backend's reasoning when
//! it is present and non-empty. Toggling one card never affects any
//! other card.

use crate::disclosure::Disclosure;
use crate::relevance::{self, RelevanceTier};
use crate::types::{PaperResult, PatentResult};
use std::borrow::Cow;

/// Maximum summary length (in characters) shown while collapsed.
pub const SUMMARY_PREVIEW_CHARS: usize = 150;

/// Whether `text` is long enough to need a show-more control.
fn exceeds_preview(text: &str) -> bool {
    text.chars().count() > SUMMARY_PREVIEW_CHARS
}

/// The collapsed rendering of `text`: the first
/// [`SUMMARY_PREVIEW_CHARS`] characters followed by an ellipsis.
fn truncate_preview(text: &str) -> String {
    let mut preview: String = text.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    preview.push('…');
    preview
}

/// Collapsed-vs-expanded text for one summary field.
fn summary_text<'a>(text: &'a str, disclosure: &Disclosure) -> Cow<'a, str> {
    if disclosure.is_expanded() || !exceeds_preview(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(truncate_preview(text))
    }
}

/// Presentation state for one paper result.
#[derive(Debug, Clone)]
pub struct PaperCard {
    result: PaperResult,
    summary: Disclosure,
    reasoning: Disclosure,
}

impl PaperCard {
    /// Build a card for one result. Disclosure units start collapsed;
    /// fields with nothing to expand are inert.
    pub fn new(result: PaperResult) -> Self {
        let summary = if exceeds_preview(&result.summary) {
            Disclosure::detail()
        } else {
            Disclosure::inert()
        };
        let reasoning = if result.reasoning.trim().is_empty() {
            Disclosure::inert()
        } else {
            Disclosure::detail()
        };
        Self {
            result,
            summary,
            reasoning,
        }
    }

    /// The underlying result record.
    pub fn result(&self) -> &PaperResult {
        &self.result
    }

    /// Relevance tier for this card's score.
    pub fn tier(&self) -> RelevanceTier {
        relevance::classify(self.result.relevance_score)
    }

    /// Badge text, e.g. `"Really Relevant (0.85)"`.
    pub fn badge(&self) -> String {
        relevance::badge(self.result.relevance_score)
    }

    /// Author names joined for display.
    pub fn authors_line(&self) -> String {
        self.result.authors.join(", ")
    }

    /// The summary as currently rendered: full text when expanded or
    /// short, otherwise the truncated preview with an ellipsis.
    pub fn summary_text(&self) -> Cow<'_, str> {
        summary_text(&self.result.summary, &self.summary)
    }

    /// Whether a show more/less control is rendered for the summary.
    pub fn has_summary_toggle(&self) -> bool {
        self.summary.is_interactive()
    }

    /// Whether the summary is currently expanded.
    pub fn summary_expanded(&self) -> bool {
        self.summary.is_expanded()
    }

    /// Toggle the summary field. No-op when the summary fits the
    /// preview. Returns whether the state changed.
    pub fn toggle_summary(&mut self) -> bool {
        self.summary.toggle()
    }

    /// Whether this card offers a reasoning disclosure (reasoning
    /// present and non-empty).
    pub fn has_reasoning_toggle(&self) -> bool {
        self.reasoning.is_interactive()
    }

    /// The reasoning text, visible only while expanded.
    pub fn reasoning_text(&self) -> Option<&str> {
        if self.reasoning.is_expanded() {
            Some(&self.result.reasoning)
        } else {
            None
        }
    }

    /// Toggle the reasoning panel. No-op when there is no reasoning.
    /// Returns whether the state changed.
    pub fn toggle_reasoning(&mut self) -> bool {
        self.reasoning.toggle()
    }
}

/// Presentation state for one patent result.
#[derive(Debug, Clone)]
pub struct PatentCard {
    result: PatentResult,
    summary: Disclosure,
}

impl PatentCard {
    /// Build a card for one result; the summary disclosure is inert
    /// when the text fits the preview.
    pub fn new(result: PatentResult) -> Self {
        let summary = if exceeds_preview(&result.summary) {
            Disclosure::detail()
        } else {
            Disclosure::inert()
        };
        Self { result, summary }
    }

    /// The underlying result record.
    pub fn result(&self) -> &PatentResult {
        &self.result
    }

    /// Relevance tier for this card's score.
    pub fn tier(&self) -> RelevanceTier {
        relevance::classify(self.result.relevance_score)
    }

    /// Badge text, e.g. `"Somewhat Relevant (0.50)"`.
    pub fn badge(&self) -> String {
        relevance::badge(self.result.relevance_score)
    }

    /// The summary as currently rendered.
    pub fn summary_text(&self) -> Cow<'_, str> {
        summary_text(&self.result.summary, &self.summary)
    }

    /// Whether a show more/less control is rendered for the summary.
    pub fn has_summary_toggle(&self) -> bool {
        self.summary.is_interactive()
    }

    /// Whether the summary is currently expanded.
    pub fn summary_expanded(&self) -> bool {
        self.summary.is_expanded()
    }

    /// Toggle the summary field. Returns whether the state changed.
    pub fn toggle_summary(&mut self) -> bool {
        self.summary.toggle()
    }
}
