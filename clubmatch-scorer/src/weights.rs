//! Relative weighting of the scoring signals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multipliers applied to each signal's coverage score.
///
/// The category bonus is not weighted here; it is a flat add determined by
/// the matched keyword tier.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    /// Multiplier for the club-name match.
    pub name: f32,
    /// Multiplier for the description match.
    pub description: f32,
    /// Multiplier for the history match.
    pub history: f32,
    /// Multiplier for the past-activity aggregate.
    pub past_activities: f32,
    /// Multiplier for the open-activity aggregate.
    pub open_activities: f32,
}

/// Errors raised when configuring the keyword scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordScorerError {
    /// Provided weights were unusable.
    #[error("signal weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}

impl SignalWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`KeywordScorerError::InvalidWeights`] when any value is not
    /// finite, any value is negative, or the total weight is zero.
    pub fn validate(self) -> Result<Self, KeywordScorerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(KeywordScorerError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.name.is_finite()
            && self.description.is_finite()
            && self.history.is_finite()
            && self.past_activities.is_finite()
            && self.open_activities.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.name >= 0.0_f32
            && self.description >= 0.0_f32
            && self.history >= 0.0_f32
            && self.past_activities >= 0.0_f32
            && self.open_activities >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.name + self.description + self.history + self.past_activities + self.open_activities)
            != 0.0_f32
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            name: 30.0_f32,
            description: 25.0_f32,
            history: 15.0_f32,
            past_activities: 20.0_f32,
            open_activities: 10.0_f32,
        }
    }
}
