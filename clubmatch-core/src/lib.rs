//! Core domain types for the clubmatch recommendation engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early. The
//! [`Scorer`] trait is the seam between the catalogue types defined here and
//! the keyword scoring engine that consumes them.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod category;
pub mod club;
pub mod query;
pub mod score;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use activity::{Activity, ActivityError, ActivityStatus};
pub use category::Category;
pub use club::{Club, ClubError};
pub use query::{InterestQuery, QueryError};
pub use score::{
    ActivityEntryMatch, ActivitySignal, CategoryMatch, ClubScore, MAX_SCORE, MatchTier,
    ScoreBreakdown, TextMatch,
};
pub use scorer::Scorer;
