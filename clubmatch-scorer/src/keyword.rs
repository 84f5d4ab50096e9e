//! Keyword scoring that combines per-field text coverage with category
//! vocabulary.
//!
//! Each signal contributes its coverage score times a weight; the category
//! bonus is a flat add from the matched keyword tier. The total saturates at
//! 100 rather than being re-normalised, so a club can max out several signals
//! and still report 100.

use clubmatch_core::{
    Activity, ActivityEntryMatch, ActivitySignal, Club, ClubScore, InterestQuery, ScoreBreakdown,
    Scorer, TextMatch,
};

use crate::{
    lexicon::CategoryLexicon,
    reasons,
    text::match_text,
    weights::{KeywordScorerError, SignalWeights},
};

/// Scorer matching query keywords against every textual facet of a club.
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    lexicon: CategoryLexicon,
    weights: SignalWeights,
}

impl KeywordScorer {
    /// Construct a scorer with the default lexicon and weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer from a custom lexicon and weights.
    ///
    /// # Errors
    /// Returns [`KeywordScorerError`] when the weights are invalid.
    pub fn with_config(
        lexicon: CategoryLexicon,
        weights: SignalWeights,
    ) -> Result<Self, KeywordScorerError> {
        let validated = weights.validate()?;
        Ok(Self {
            lexicon,
            weights: validated,
        })
    }

    /// The lexicon in use.
    #[must_use]
    pub fn lexicon(&self) -> &CategoryLexicon {
        &self.lexicon
    }

    fn breakdown(
        &self,
        club: &Club,
        activities: &[Activity],
        query: &InterestQuery,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            name: text_signal(&club.name, query),
            description: text_signal(&club.description, query),
            history: club
                .history
                .as_deref()
                .and_then(|history| text_signal(history, query)),
            past_activities: past_signal(&club.past_activities, query),
            open_activities: open_signal(club, activities, query),
            category: self.lexicon.match_category(club.category, query),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of signal scores"
    )]
    fn weighted_total(&self, breakdown: &ScoreBreakdown) -> f32 {
        let mut total = 0.0_f32;
        if let Some(found) = &breakdown.name {
            total += found.score * self.weights.name;
        }
        if let Some(found) = &breakdown.description {
            total += found.score * self.weights.description;
        }
        if let Some(found) = &breakdown.history {
            total += found.score * self.weights.history;
        }
        if let Some(signal) = &breakdown.past_activities {
            total += signal.score * self.weights.past_activities;
        }
        if let Some(signal) = &breakdown.open_activities {
            total += signal.score * self.weights.open_activities;
        }
        if let Some(hit) = &breakdown.category {
            total += hit.tier.bonus();
        }
        total
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, club: &Club, activities: &[Activity], query: &InterestQuery) -> ClubScore {
        let breakdown = self.breakdown(club, activities, query);
        let total = Self::sanitise(self.weighted_total(&breakdown));
        let reasons = reasons::describe(&breakdown);
        ClubScore {
            total,
            reasons,
            breakdown,
        }
    }
}

fn text_signal(haystack: &str, query: &InterestQuery) -> Option<TextMatch> {
    let found = match_text(haystack, query);
    found.is_hit().then_some(found)
}

/// Mean coverage across every past-activity entry; entries that miss drag the
/// mean down rather than being skipped.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the aggregate is a mean over small activity lists"
)]
fn past_signal(entries: &[String], query: &InterestQuery) -> Option<ActivitySignal> {
    if entries.is_empty() {
        return None;
    }
    let mut sum = 0.0_f32;
    let mut matched = Vec::new();
    for entry in entries {
        let found = match_text(entry, query);
        if found.is_hit() {
            sum += found.score;
            matched.push(ActivityEntryMatch {
                label: entry.clone(),
                score: found.score,
            });
        }
    }
    let score = sum / entries.len() as f32;
    (score > 0.0_f32).then_some(ActivitySignal {
        score,
        matched_count: matched.len(),
        total: entries.len(),
        matched,
    })
}

/// Mean of `max(name match, description match)` over the club's activities
/// that still accept registrations.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the aggregate is a mean over small activity lists"
)]
fn open_signal(club: &Club, activities: &[Activity], query: &InterestQuery) -> Option<ActivitySignal> {
    let open: Vec<&Activity> = activities
        .iter()
        .filter(|activity| activity.club == club.name && activity.status.is_accepting())
        .collect();
    if open.is_empty() {
        return None;
    }
    let mut sum = 0.0_f32;
    let mut matched = Vec::new();
    for activity in &open {
        let name_found = match_text(&activity.name, query);
        let description_found = match_text(&activity.description, query);
        let score = name_found.score.max(description_found.score);
        if score > 0.0_f32 {
            sum += score;
            matched.push(ActivityEntryMatch {
                label: activity.name.clone(),
                score,
            });
        }
    }
    let score = sum / open.len() as f32;
    (score > 0.0_f32).then_some(ActivitySignal {
        score,
        matched_count: matched.len(),
        total: open.len(),
        matched,
    })
}
