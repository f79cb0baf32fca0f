//! Throw rules: category table, classification, rank keys.
//!
//! Everything here is a pure function of a single throw:
//! - `category`: the six categories, their predicates and penalty rules
//! - `classify`: triple -> [`ClassifiedThrow`]
//! - `rank`: [`ClassifiedThrow`] -> [`RankKey`], lower is better

pub mod category;
pub mod classify;
pub mod rank;

pub use category::{Category, PenaltyRule, CATEGORY_TABLE};
pub use classify::{classify, classify_throw, ClassifiedThrow};
pub use rank::{rank_key, tiebreak_value, RankKey, PRIORITY_SPACING};
