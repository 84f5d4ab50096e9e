//! Property coverage for the token-coverage matcher.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point scores"
)]

use clubmatch_core::InterestQuery;
use clubmatch_scorer::match_text;
use proptest::prelude::*;

fn query_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{2,8}", 1..5).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(raw in query_strategy(), haystack in "\\PC{0,60}") {
        let query = InterestQuery::new(raw).expect("generated query is non-empty");
        let found = match_text(&haystack, &query);
        prop_assert!((0.0..=1.0).contains(&found.score));
        prop_assert!(found.matched_count <= found.total_tokens);
        prop_assert_eq!(found.matched_tokens.len(), found.matched_count);
    }

    #[test]
    fn matching_is_case_symmetric(raw in query_strategy(), haystack in "[a-zA-Z ]{0,40}") {
        let lower = InterestQuery::new(raw.clone()).expect("generated query is non-empty");
        let upper = InterestQuery::new(raw.to_uppercase()).expect("generated query is non-empty");
        prop_assert_eq!(
            match_text(&haystack, &lower),
            match_text(&haystack.to_uppercase(), &upper)
        );
    }

    #[test]
    fn full_coverage_scores_one(tokens in proptest::collection::vec("[a-z]{2,8}", 1..5)) {
        let haystack = tokens.join(" - ");
        let query = InterestQuery::new(tokens.join(" ")).expect("generated query is non-empty");
        let found = match_text(&haystack, &query);
        prop_assert!((found.score - 1.0).abs() < f32::EPSILON);
        prop_assert_eq!(found.matched_count, found.total_tokens);
    }

    #[test]
    fn disjoint_alphabets_score_zero(raw in query_strategy(), haystack in "[0-9]{0,30}") {
        let query = InterestQuery::new(raw).expect("generated query is non-empty");
        let found = match_text(&haystack, &query);
        prop_assert_eq!(found.matched_count, 0);
        prop_assert!(found.score.abs() < f32::EPSILON);
    }
}
