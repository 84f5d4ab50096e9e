//! Structured scoring results.
//!
//! Scoring produces these records first; human-readable reason strings are
//! derived from them in a separate presentation step, so the numeric side
//! stays testable on its own.

use crate::Category;

/// Upper bound for a club's total score.
pub const MAX_SCORE: f32 = 100.0;

/// Outcome of matching query tokens against one text field.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMatch {
    /// Fraction of query tokens found in the haystack, in `0.0..=1.0`.
    pub score: f32,
    /// The tokens that were found.
    pub matched_tokens: Vec<String>,
    /// Number of tokens that were found.
    pub matched_count: usize,
    /// Number of tokens tested.
    pub total_tokens: usize,
}

impl TextMatch {
    /// Report whether any token matched.
    pub fn is_hit(&self) -> bool {
        self.score > 0.0
    }
}

/// Keyword tier that matched a category.
///
/// Tier precedence is a deliberate tie-break: a category named outright
/// should outrank one merely alluded to by a generic verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MatchTier {
    /// The category's core name.
    Primary,
    /// A named instance or sub-type.
    Specific,
    /// A loosely related verb or noun.
    Secondary,
}

impl MatchTier {
    /// Fixed bonus added to a club's total for this tier.
    pub fn bonus(&self) -> f32 {
        match self {
            Self::Primary => 30.0,
            Self::Specific => 25.0,
            Self::Secondary => 15.0,
        }
    }

    /// Return the tier as a lowercase `&str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Specific => "specific",
            Self::Secondary => "secondary",
        }
    }
}

/// A category keyword hit against the query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryMatch {
    /// The club's category.
    pub category: Category,
    /// Tier whose keyword list produced the hit.
    pub tier: MatchTier,
    /// The keyword that was found in the query.
    pub keyword: String,
}

/// One matched entry within an activity list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityEntryMatch {
    /// Display label of the matched entry.
    pub label: String,
    /// Match score of the entry, in `0.0..=1.0`.
    pub score: f32,
}

/// Aggregate match over a list of activities.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivitySignal {
    /// Mean per-entry score across the whole list, in `0.0..=1.0`.
    pub score: f32,
    /// Number of entries that matched.
    pub matched_count: usize,
    /// Number of entries in the list.
    pub total: usize,
    /// The entries that matched, with their scores.
    pub matched: Vec<ActivityEntryMatch>,
}

/// Which sub-signals fired for a club, and with what sub-scores.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Match against the club name.
    pub name: Option<TextMatch>,
    /// Match against the description.
    pub description: Option<TextMatch>,
    /// Match against the founding history, when present.
    pub history: Option<TextMatch>,
    /// Aggregate match over past activities.
    pub past_activities: Option<ActivitySignal>,
    /// Aggregate match over activities still accepting registrations.
    pub open_activities: Option<ActivitySignal>,
    /// Category keyword hit.
    pub category: Option<CategoryMatch>,
}

impl ScoreBreakdown {
    /// Report whether no signal fired at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.history.is_none()
            && self.past_activities.is_none()
            && self.open_activities.is_none()
            && self.category.is_none()
    }
}

/// A club's total score with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClubScore {
    /// Weighted total, clamped into `0.0..=100.0`.
    pub total: f32,
    /// Human-readable reasons, one per fired signal.
    pub reasons: Vec<String>,
    /// Structured per-signal results.
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_bonuses_are_ordered() {
        assert!(MatchTier::Primary.bonus() > MatchTier::Specific.bonus());
        assert!(MatchTier::Specific.bonus() > MatchTier::Secondary.bonus());
    }

    #[test]
    fn empty_breakdown_reports_empty() {
        assert!(ScoreBreakdown::default().is_empty());
        let fired = ScoreBreakdown {
            name: Some(TextMatch {
                score: 1.0,
                matched_tokens: vec!["กีฬา".into()],
                matched_count: 1,
                total_tokens: 1,
            }),
            ..ScoreBreakdown::default()
        };
        assert!(!fired.is_empty());
    }
}
