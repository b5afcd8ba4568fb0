//! Core types for search requests, result records, and channel identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate research paper returned by the paper-search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperResult {
    /// The paper title.
    pub title: String,
    /// Abstract / summary text.
    pub summary: String,
    /// Author names in publication order.
    pub authors: Vec<String>,
    /// Link to the paper PDF.
    pub pdf_url: String,
    /// Publication date as returned by the endpoint (display text).
    pub published: String,
    /// Relevance to the invention description, in `[0, 1]`.
    pub relevance_score: f64,
    /// The backend's explanation of why this paper is relevant. Older
    /// backend revisions omit this field entirely.
    #[serde(default)]
    pub reasoning: String,
}

/// A candidate patent returned by the patent-search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentResult {
    /// Patent identifier (e.g. publication number).
    pub id: String,
    /// Patent title.
    pub title: String,
    /// Abstract / summary text.
    pub summary: String,
    /// Relevance to the invention description, in `[0, 1]`.
    pub relevance_score: f64,
}

/// Request body for the paper-search endpoint.
///
/// Constructed fresh per dispatch and immutable once sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSearchRequest {
    /// The user's invention description, verbatim.
    pub description: String,
    /// Maximum number of papers the backend should return.
    pub max_results: usize,
}

/// Request body for the patent-search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentSearchRequest {
    /// The user's invention description, verbatim.
    pub description: String,
}

/// The two independent result channels.
///
/// Each channel has its own request, loading state, and error state;
/// the two never share phase or error state with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Research papers from the paper-search endpoint.
    Papers,
    /// Patents from the patent-search endpoint.
    Patents,
}

impl Channel {
    /// Returns the human-readable name of this channel.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Papers => "Papers",
            Self::Patents => "Patents",
        }
    }

    /// Section header text for this channel's result group.
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Papers => "Research Papers",
            Self::Patents => "Patents",
        }
    }

    /// Busy-indicator text shown while this channel is loading.
    pub fn loading_label(&self) -> &'static str {
        match self {
            Self::Papers => "Searching for papers...",
            Self::Patents => "Searching for patents...",
        }
    }

    /// Inline notice shown when a search succeeds with zero results.
    pub fn empty_notice(&self) -> &'static str {
        match self {
            Self::Papers => "No relevant papers found.",
            Self::Patents => "No relevant patents found.",
        }
    }

    /// The stable, user-facing message shown when this channel's call
    /// fails. Raw transport errors are never surfaced.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Papers => "Failed to search for papers. Please try again.",
            Self::Patents => "Failed to search for patents. Please try again.",
        }
    }

    /// Returns both channel variants.
    pub fn all() -> &'static [Channel] {
        &[Self::Papers, Self::Patents]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_result_serde_round_trip() {
        let paper = PaperResult {
            title: "Adaptive Coil Alignment".into(),
            summary: "A study of resonant coupling.".into(),
            authors: vec!["A. Ampere".into(), "M. Faraday".into()],
            pdf_url: "https://arxiv.org/pdf/0000.00000".into(),
            published: "2024-11-02".into(),
            relevance_score: 0.85,
            reasoning: "Directly addresses coil alignment.".into(),
        };
        let json = serde_json::to_string(&paper).expect("serialize");
        let decoded: PaperResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, paper);
    }

    #[test]
    fn paper_result_reasoning_defaults_when_absent() {
        let json = r#"{
            "title": "T",
            "summary": "S",
            "authors": ["A"],
            "pdf_url": "https://example.com/p.pdf",
            "published": "2023-01-01",
            "relevance_score": 0.4
        }"#;
        let decoded: PaperResult = serde_json::from_str(json).expect("deserialize");
        assert!(decoded.reasoning.is_empty());
    }

    #[test]
    fn patent_result_deserializes_field_tagged() {
        let json = r#"{"id":"US1234567B2","title":"Charging pad","summary":"Coils.","relevance_score":0.2}"#;
        let decoded: PatentResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(decoded.id, "US1234567B2");
        assert!((decoded.relevance_score - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn paper_request_carries_max_results() {
        let request = PaperSearchRequest {
            description: "a pad".into(),
            max_results: 10,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["description"], "a pad");
        assert_eq!(json["max_results"], 10);
    }

    #[test]
    fn patent_request_carries_only_description() {
        let request = PatentSearchRequest {
            description: "a pad".into(),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["description"], "a pad");
        assert_eq!(json.as_object().expect("object").len(), 1);
    }

    #[test]
    fn channel_display_strings() {
        assert_eq!(Channel::Papers.to_string(), "Papers");
        assert_eq!(Channel::Patents.to_string(), "Patents");
        assert_eq!(Channel::Papers.loading_label(), "Searching for papers...");
        assert_eq!(
            Channel::Patents.failure_message(),
            "Failed to search for patents. Please try again."
        );
        assert_eq!(Channel::all().len(), 2);
    }
}
