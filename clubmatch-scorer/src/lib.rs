//! Keyword scoring for the clubmatch recommendation engine.
//!
//! The crate provides the pieces of one cohesive algorithm:
//! - **Text matching** computes the fraction of query tokens contained in a
//!   text field ([`match_text`]).
//! - **Category matching** walks a tiered keyword lexicon and awards a fixed
//!   bonus for the first tier that mentions the club's category
//!   ([`CategoryLexicon`]).
//! - **Club scoring** blends six weighted signals into a total saturating at
//!   100 ([`KeywordScorer`], implementing the
//!   [`Scorer`](clubmatch_core::Scorer) trait).
//! - **Ranking** retains every club with a firing signal, stable-sorts, and
//!   returns the top five with a templated summary ([`recommend`]).
//!
//! # Examples
//!
//! ```
//! use clubmatch_core::{Category, Club, InterestQuery};
//! use clubmatch_scorer::{KeywordScorer, recommend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let clubs = vec![
//!     Club::new(1, "ชมรมดนตรีสากล", Category::Music, "รวมคนรักดนตรีและการแสดงสด")?,
//!     Club::new(2, "ชมรมอาสาพัฒนา", Category::Volunteer, "ออกค่ายช่วยเหลือชุมชน")?,
//! ];
//! let query = InterestQuery::new("ดนตรี")?;
//! let report = recommend(&KeywordScorer::new(), &clubs, &[], &query);
//! assert_eq!(report.total_matches, 1);
//! assert_eq!(report.recommendations[0].club.id, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod keyword;
mod lexicon;
mod reasons;
mod recommend;
mod text;
mod weights;

pub use keyword::KeywordScorer;
pub use lexicon::{CategoryLexicon, KeywordTiers};
pub use reasons::describe;
pub use recommend::{Recommendation, RecommendationReport, TOP_RESULTS, recommend};
pub use text::match_text;
pub use weights::{KeywordScorerError, SignalWeights};
