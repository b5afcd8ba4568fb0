//! Qualitative relevance tiers derived from numeric scores.
//!
//! Backends score each result in `[0, 1]`; this module buckets the
//! score into one of three display tiers with a fixed label and colour.
//! Classification is pure and deterministic. Scores outside `[0, 1]`
//! are not rejected; they simply land in the boundary tier.

use std::fmt;

/// Scores at or above this value are [`RelevanceTier::SomewhatRelevant`].
pub const SOMEWHAT_RELEVANT_THRESHOLD: f64 = 0.3;
/// Scores at or above this value are [`RelevanceTier::HighlyRelevant`].
pub const HIGHLY_RELEVANT_THRESHOLD: f64 = 0.7;

/// Qualitative relevance bucket for display purposes only.
///
/// Always derived from a score via [`classify`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelevanceTier {
    /// Score below 0.3.
    NotRelevant,
    /// Score in `[0.3, 0.7)`.
    SomewhatRelevant,
    /// Score at or above 0.7.
    HighlyRelevant,
}

impl RelevanceTier {
    /// The user-visible label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotRelevant => "Not Relevant",
            Self::SomewhatRelevant => "Somewhat Relevant",
            Self::HighlyRelevant => "Really Relevant",
        }
    }

    /// The display colour paired with this tier.
    pub fn color(&self) -> &'static str {
        match self {
            Self::NotRelevant => "red",
            Self::SomewhatRelevant => "amber",
            Self::HighlyRelevant => "green",
        }
    }
}

impl fmt::Display for RelevanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a relevance score into its display tier.
///
/// Boundaries are inclusive toward the higher tier: 0.3 is
/// `SomewhatRelevant`, 0.7 is `HighlyRelevant`. Out-of-range scores
/// clamp into the nearest boundary tier (a NaN score falls through to
/// `NotRelevant`).
pub fn classify(score: f64) -> RelevanceTier {
    if score >= HIGHLY_RELEVANT_THRESHOLD {
        RelevanceTier::HighlyRelevant
    } else if score >= SOMEWHAT_RELEVANT_THRESHOLD {
        RelevanceTier::SomewhatRelevant
    } else {
        RelevanceTier::NotRelevant
    }
}

/// The badge text shown on a result card, e.g. `"Really Relevant (0.85)"`.
pub fn badge(score: f64) -> String {
    format!("{} ({score:.2})", classify(score).label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_below_lower_threshold_are_not_relevant() {
        assert_eq!(classify(0.0), RelevanceTier::NotRelevant);
        assert_eq!(classify(0.15), RelevanceTier::NotRelevant);
        assert_eq!(classify(0.299), RelevanceTier::NotRelevant);
    }

    #[test]
    fn mid_range_scores_are_somewhat_relevant() {
        assert_eq!(classify(0.35), RelevanceTier::SomewhatRelevant);
        assert_eq!(classify(0.5), RelevanceTier::SomewhatRelevant);
        assert_eq!(classify(0.699), RelevanceTier::SomewhatRelevant);
    }

    #[test]
    fn high_scores_are_highly_relevant() {
        assert_eq!(classify(0.7), RelevanceTier::HighlyRelevant);
        assert_eq!(classify(0.85), RelevanceTier::HighlyRelevant);
        assert_eq!(classify(1.0), RelevanceTier::HighlyRelevant);
    }

    #[test]
    fn boundaries_map_to_the_higher_tier() {
        assert_eq!(classify(0.3), RelevanceTier::SomewhatRelevant);
        assert_eq!(classify(0.7), RelevanceTier::HighlyRelevant);
    }

    #[test]
    fn out_of_range_scores_clamp_to_boundary_tiers() {
        assert_eq!(classify(-0.5), RelevanceTier::NotRelevant);
        assert_eq!(classify(1.5), RelevanceTier::HighlyRelevant);
    }

    #[test]
    fn nan_falls_through_to_not_relevant() {
        assert_eq!(classify(f64::NAN), RelevanceTier::NotRelevant);
    }

    #[test]
    fn labels_and_colors_are_fixed_pairs() {
        assert_eq!(RelevanceTier::NotRelevant.label(), "Not Relevant");
        assert_eq!(RelevanceTier::NotRelevant.color(), "red");
        assert_eq!(RelevanceTier::SomewhatRelevant.label(), "Somewhat Relevant");
        assert_eq!(RelevanceTier::SomewhatRelevant.color(), "amber");
        assert_eq!(RelevanceTier::HighlyRelevant.label(), "Really Relevant");
        assert_eq!(RelevanceTier::HighlyRelevant.color(), "green");
    }

    #[test]
    fn badge_formats_score_to_two_decimals() {
        assert_eq!(badge(0.85), "Really Relevant (0.85)");
        assert_eq!(badge(0.5), "Somewhat Relevant (0.50)");
        assert_eq!(badge(0.1234), "Not Relevant (0.12)");
    }
}
