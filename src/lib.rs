//! # schocken
//!
//! A deterministic rule engine for the Schocken dice game.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Classification and rank keys are pure functions of a
//!    single throw. The category table is immutable data.
//!
//! 2. **Injected randomness**: Rounds take a `DiceSource` and a
//!    `RollBudgetPolicy`. Seeded `GameRng` streams or scripted dice make every
//!    round reproducible.
//!
//! 3. **One linear order**: Every throw maps to a single `RankKey`; lower is
//!    better, across and within categories.
//!
//! ## Modules
//!
//! - `core`: Dice, players, RNG, round configuration
//! - `rules`: Category table, classifier, rank keys
//! - `round`: Roll budgets, round simulation, tie-breaks, outcomes
//! - `quiz`: Guess checking and explanations for the learning quiz
//! - `stats`: Tallies over many rounds
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use schocken::{classify, play_seeded_round, Category, RoundConfig};
//!
//! assert_eq!(classify(&[1, 1, 1]).unwrap().category, Category::SchockOut);
//!
//! let config = RoundConfig::new(["Anna", "Ben", "Cleo"]);
//! let outcome = play_seeded_round(&config, 7).unwrap();
//! assert_ne!(outcome.winner, outcome.loser);
//! assert_eq!(outcome.penalty, outcome.winning_throw().penalty);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod round;
pub mod quiz;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, ScriptedDice, Throw,
    GameRng, MAX_ROLL_BUDGET,
    PlayerId, RoundConfig,
};

pub use crate::error::{ConfigError, SchockError};

pub use crate::rules::{
    classify, classify_throw, rank_key, tiebreak_value,
    Category, ClassifiedThrow, PenaltyRule, RankKey, CATEGORY_TABLE,
};

pub use crate::round::{
    play_seeded_round, simulate_round, select_loser, select_winner,
    FixedBudget, PlayerThrowRecord, RollBudgetPolicy, RoundOutcome, UniformBudget,
};

pub use crate::quiz::{check, display_dice, Explanation, QuizGuess, QuizVerdict};

pub use crate::stats::RoundStats;
