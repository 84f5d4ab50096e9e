//! Facade crate for the clubmatch recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the keyword
//! scorer and catalogue provider behind feature flags.

#![forbid(unsafe_code)]

pub use clubmatch_core::{
    Activity, ActivityEntryMatch, ActivityError, ActivitySignal, ActivityStatus, Category,
    CategoryMatch, Club, ClubError, ClubScore, InterestQuery, MAX_SCORE, MatchTier, QueryError,
    ScoreBreakdown, Scorer, TextMatch,
};

#[cfg(feature = "scorer")]
pub use clubmatch_scorer::{
    CategoryLexicon, KeywordScorer, KeywordScorerError, KeywordTiers, Recommendation,
    RecommendationReport, SignalWeights, TOP_RESULTS, describe, match_text, recommend,
};

#[cfg(feature = "data")]
pub use clubmatch_data::{Catalog, CatalogError, load_activities, load_catalog, load_clubs};
