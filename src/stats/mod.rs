//! Tallies over many simulated rounds.
//!
//! Useful for sanity-checking the category distribution of winning throws
//! and the average stakes of a round.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::round::RoundOutcome;
use crate::rules::{Category, CATEGORY_TABLE};

/// Statistics collected over simulated rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Rounds recorded.
    pub rounds: u64,

    /// Throws made across all rounds.
    pub throws: u64,

    /// Sum of all round penalties.
    pub total_penalty: u64,

    /// Winning-throw category counts.
    pub winning_categories: FxHashMap<Category, u64>,
}

impl RoundStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one round.
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds += 1;
        self.throws += outcome.total_attempts() as u64;
        self.total_penalty += u64::from(outcome.penalty);
        *self
            .winning_categories
            .entry(outcome.winning_throw().category)
            .or_insert(0) += 1;
    }

    /// Rounds won with a throw of `category`.
    #[must_use]
    pub fn wins_with(&self, category: Category) -> u64 {
        self.winning_categories.get(&category).copied().unwrap_or(0)
    }

    /// Share of rounds won with `category`.
    #[must_use]
    pub fn frequency(&self, category: Category) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins_with(category) as f64 / self.rounds as f64
        }
    }

    /// Mean penalty per round.
    #[must_use]
    pub fn average_penalty(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_penalty as f64 / self.rounds as f64
        }
    }

    /// Mean throws per round.
    #[must_use]
    pub fn average_throws(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.throws as f64 / self.rounds as f64
        }
    }

    /// `(category, wins)` pairs in table order, including zero counts.
    pub fn by_category(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        CATEGORY_TABLE
            .into_iter()
            .map(move |category| (category, self.wins_with(category)))
    }
}
