//! Token-coverage text matching.

use clubmatch_core::{InterestQuery, TextMatch};

/// Match the query's tokens against `haystack` by substring containment.
///
/// The score is the fraction of tokens found, not a similarity metric. A
/// token matches anywhere inside a word: "บอล" hits a haystack containing
/// "ฟุตบอล". A query with no usable tokens scores zero rather than dividing
/// by zero.
///
/// # Examples
/// ```
/// use clubmatch_core::InterestQuery;
/// use clubmatch_scorer::match_text;
///
/// # fn main() -> Result<(), clubmatch_core::QueryError> {
/// let query = InterestQuery::new("บอล ดนตรี")?;
/// let result = match_text("ชมรมฟุตบอล", &query);
/// assert_eq!(result.matched_tokens, ["บอล"]);
/// assert!((result.score - 0.5).abs() < f32::EPSILON);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the score is a coverage ratio over small token counts"
)]
pub fn match_text(haystack: &str, query: &InterestQuery) -> TextMatch {
    let tokens = query.tokens();
    if tokens.is_empty() {
        return TextMatch::default();
    }
    let lowered = haystack.to_lowercase();
    let matched_tokens: Vec<String> = tokens
        .iter()
        .filter(|token| lowered.contains(token.as_str()))
        .cloned()
        .collect();
    let matched_count = matched_tokens.len();
    TextMatch {
        score: matched_count as f32 / tokens.len() as f32,
        matched_tokens,
        matched_count,
        total_tokens: tokens.len(),
    }
}
