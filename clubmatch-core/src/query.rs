//! Validated free-text interest queries.
//!
//! The query is tokenised once at construction so every scoring signal works
//! from the same lower-cased view of the user's input.

use thiserror::Error;

/// A user's free-text description of their interests.
///
/// Construction rejects empty input; tokenisation lower-cases the text,
/// splits on whitespace runs, and discards tokens of one character or less.
///
/// # Examples
/// ```
/// use clubmatch_core::InterestQuery;
///
/// # fn main() -> Result<(), clubmatch_core::QueryError> {
/// let query = InterestQuery::new("ชอบเล่น ฟุตบอล")?;
/// assert_eq!(query.tokens(), ["ชอบเล่น", "ฟุตบอล"]);
/// assert!(InterestQuery::new("   ").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestQuery {
    raw: String,
    lowered: String,
    tokens: Vec<String>,
}

/// Errors returned by [`InterestQuery::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query contained no non-whitespace characters.
    #[error("interest query must contain at least one non-whitespace character")]
    Empty,
}

impl InterestQuery {
    /// Validates and constructs an [`InterestQuery`].
    ///
    /// # Errors
    /// Returns [`QueryError::Empty`] for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, QueryError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(QueryError::Empty);
        }
        let lowered = raw.to_lowercase();
        let tokens = lowered
            .split_whitespace()
            .filter(|token| token.chars().count() > 1)
            .map(str::to_owned)
            .collect();
        Ok(Self {
            raw,
            lowered,
            tokens,
        })
    }

    /// The query exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lower-cased query text, used for keyword containment checks.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Lower-cased search tokens of two or more characters.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_queries_are_rejected(#[case] raw: &str) {
        assert_eq!(InterestQuery::new(raw).unwrap_err(), QueryError::Empty);
    }

    #[test]
    fn tokens_are_lowercased_and_split() {
        let query = InterestQuery::new("Football  ร้องเพลง").unwrap();
        assert_eq!(query.tokens(), ["football", "ร้องเพลง"]);
        assert_eq!(query.raw(), "Football  ร้องเพลง");
    }

    #[test]
    fn single_character_tokens_are_dropped() {
        let query = InterestQuery::new("a กีฬา ข").unwrap();
        assert_eq!(query.tokens(), ["กีฬา"]);
    }

    #[test]
    fn query_of_only_short_tokens_keeps_lowered_text() {
        // Category keyword containment still sees the full text even when no
        // token survives the length filter.
        let query = InterestQuery::new("ก ข").unwrap();
        assert!(query.tokens().is_empty());
        assert_eq!(query.lowered(), "ก ข");
    }
}
