//! Ranking pipeline over a club catalogue.

use clubmatch_core::{Activity, Club, InterestQuery, ScoreBreakdown, Scorer};
use serde::{Deserialize, Serialize};

/// Maximum number of recommendations returned to the caller.
pub const TOP_RESULTS: usize = 5;

/// One recommended club with its score and supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended club.
    pub club: Club,
    /// Total score in `0.0..=100.0`.
    pub score: f32,
    /// Human-readable reasons, one per fired signal.
    pub reasons: Vec<String>,
    /// Structured per-signal results.
    pub breakdown: ScoreBreakdown,
}

/// Ranked outcome of one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// The query as the user typed it.
    pub search_term: String,
    /// Number of clubs retained before truncation to [`TOP_RESULTS`].
    pub total_matches: usize,
    /// The top-ranked clubs, best first.
    pub recommendations: Vec<Recommendation>,
    /// Templated Thai summary of the run.
    pub analysis: String,
}

/// Score every club and return the top matches.
///
/// Clubs with no firing signal are dropped entirely; the survivors are
/// stable-sorted descending by score, so catalogue order breaks ties.
/// `total_matches` reports the retained count before truncation, letting a
/// caller display "12 matches found, showing top 5".
///
/// # Examples
/// ```
/// use clubmatch_core::{Category, Club, InterestQuery};
/// use clubmatch_scorer::{KeywordScorer, recommend};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let clubs = vec![Club::new(1, "ชมรมฟุตบอล", Category::Sports, "ฝึกซ้อมฟุตบอลทุกเย็น")?];
/// let query = InterestQuery::new("ฟุตบอล")?;
/// let report = recommend(&KeywordScorer::new(), &clubs, &[], &query);
/// assert_eq!(report.total_matches, 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn recommend<S: Scorer>(
    scorer: &S,
    clubs: &[Club],
    activities: &[Activity],
    query: &InterestQuery,
) -> RecommendationReport {
    let mut retained: Vec<Recommendation> = clubs
        .iter()
        .filter_map(|club| {
            let scored = scorer.score(club, activities, query);
            (scored.total > 0.0_f32).then(|| Recommendation {
                club: club.clone(),
                score: scored.total,
                reasons: scored.reasons,
                breakdown: scored.breakdown,
            })
        })
        .collect();
    retained.sort_by(|a, b| b.score.total_cmp(&a.score));
    let total_matches = retained.len();
    retained.truncate(TOP_RESULTS);
    log::debug!(
        "query \"{}\" matched {total_matches} clubs, returning {}",
        query.raw(),
        retained.len()
    );
    let analysis = analysis_text(query, &retained);
    RecommendationReport {
        search_term: query.raw().to_owned(),
        total_matches,
        recommendations: retained,
        analysis,
    }
}

/// Summarise the returned set: count, top score, and mean score.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the summary averages at most TOP_RESULTS scores"
)]
fn analysis_text(query: &InterestQuery, top: &[Recommendation]) -> String {
    let Some(first) = top.first() else {
        return format!("ไม่พบชมรมที่ตรงกับคำค้นหา \"{}\"", query.raw());
    };
    let sum: f32 = top.iter().map(|entry| entry.score).sum();
    let mean = sum / top.len() as f32;
    format!(
        "พบ {} ชมรมที่เหมาะสมกับ \"{}\" (คะแนนสูงสุด: {}%, เฉลี่ย: {}%)",
        top.len(),
        query.raw(),
        round_score(first.score),
        round_score(mean)
    )
}

/// Round a `0.0..=100.0` total to a whole number for display.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "totals are sanitised into 0..=100 before display"
)]
fn round_score(score: f32) -> u32 {
    score.round() as u32
}
