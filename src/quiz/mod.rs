//! Quiz helpers: check a guess against a round and explain the result.
//!
//! The learning quiz shows every player's kept throw and asks for the winner,
//! the loser and the penalty. These helpers do the checking and produce the
//! explanation text; rendering is left to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::round::RoundOutcome;
use crate::rules::{Category, ClassifiedThrow};

/// Every penalty a round can produce, ascending.
pub const PENALTY_CHOICES: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 15];

/// A player's answer for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizGuess {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub penalty: u32,
}

/// Which parts of a guess were right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizVerdict {
    pub winner_correct: bool,
    pub loser_correct: bool,
    pub penalty_correct: bool,
}

impl QuizVerdict {
    /// A guess only counts when all three parts match.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.winner_correct && self.loser_correct && self.penalty_correct
    }
}

/// Compare a guess with the actual outcome.
#[must_use]
pub fn check(outcome: &RoundOutcome, guess: &QuizGuess) -> QuizVerdict {
    QuizVerdict {
        winner_correct: guess.winner == outcome.winner,
        loser_correct: guess.loser == outcome.loser,
        penalty_correct: guess.penalty == outcome.penalty,
    }
}

/// Dice as shown to players, e.g. `"6-5-2"`.
///
/// Eye throws read highest first; every other category reads ascending.
///
/// ```
/// use schocken::quiz::display_dice;
/// use schocken::rules::classify;
///
/// assert_eq!(display_dice(&classify(&[2, 6, 5]).unwrap()), "6-5-2");
/// assert_eq!(display_dice(&classify(&[4, 1, 2]).unwrap()), "1-2-4");
/// ```
#[must_use]
pub fn display_dice(throw: &ClassifiedThrow) -> String {
    let dice = match throw.category {
        Category::EyeThrow => throw.dice.descending(),
        _ => throw.sorted(),
    };
    format!("{}-{}-{}", dice[0], dice[1], dice[2])
}

/// One line of the explanation: who threw what.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThrowSummary {
    pub name: String,
    pub dice: String,
    pub category: &'static str,
}

impl ThrowSummary {
    fn new(name: &str, throw: &ClassifiedThrow) -> Self {
        Self {
            name: name.to_owned(),
            dice: display_dice(throw),
            category: throw.name(),
        }
    }
}

/// Explanation shown after a guess is checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub winner: ThrowSummary,
    pub loser: ThrowSummary,
    pub penalty: u32,
    /// Category the penalty is based on.
    pub penalty_basis: &'static str,
    /// Rule text of the winning category.
    pub rule: &'static str,
}

impl Explanation {
    #[must_use]
    pub fn from_outcome(outcome: &RoundOutcome) -> Self {
        let winner = outcome.winner_record();
        let loser = outcome.loser_record();
        Self {
            winner: ThrowSummary::new(&winner.name, &winner.best),
            loser: ThrowSummary::new(&loser.name, &loser.best),
            penalty: outcome.penalty,
            penalty_basis: winner.best.name(),
            rule: winner.best.description(),
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Winner: {} with {} ({})",
            self.winner.name, self.winner.dice, self.winner.category
        )?;
        writeln!(
            f,
            "Loser: {} with {} ({})",
            self.loser.name, self.loser.dice, self.loser.category
        )?;
        writeln!(f, "Penalty: {} (based on {})", self.penalty, self.penalty_basis)?;
        write!(f, "{}", self.rule)
    }
}
