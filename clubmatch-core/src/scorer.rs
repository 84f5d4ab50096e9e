//! Score clubs against an interest query.
//!
//! The `Scorer` trait assigns a [`ClubScore`] to a [`Club`](crate::Club)
//! given the user's [`InterestQuery`](crate::InterestQuery) and the activity
//! catalogue.

use crate::{Activity, Club, ClubScore, InterestQuery, score::MAX_SCORE};

/// Calculate a relevance score for a club.
///
/// Higher totals indicate a better match between the club and the query.
/// Implementations must be thread-safe (`Send` + `Sync`) so scorers can run
/// across threads. The method is infallible; implementers must return a
/// zero-total score when no signal fires.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) totals.
/// - Return non-negative values.
/// - Clamp totals into the range `0.0..=100.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use clubmatch_core::{Activity, Club, ClubScore, InterestQuery, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _club: &Club, _activities: &[Activity], _query: &InterestQuery) -> ClubScore {
///         ClubScore {
///             total: Self::sanitise(50.0),
///             ..ClubScore::default()
///         }
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let club = Club::new(1, "ชมรมกีฬา", clubmatch_core::Category::Sports, "ฝึกซ้อมกีฬา")?;
/// let query = InterestQuery::new("กีฬา")?;
/// let score = FlatScorer.score(&club, &[], &query);
/// assert_eq!(score.total, 50.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `club` according to `query`.
    ///
    /// `activities` is the full activity catalogue; implementations select
    /// the club's own entries from it.
    fn score(&self, club: &Club, activities: &[Activity], query: &InterestQuery) -> ClubScore;

    /// Clamp and validate a raw total.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(total: f32) -> f32
    where
        Self: Sized,
    {
        if !total.is_finite() {
            return 0.0;
        }
        total.clamp(0.0, MAX_SCORE)
    }
}
