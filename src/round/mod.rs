//! Round simulation: budgets, per-player throwing, winner and loser.
//!
//! This is the only part of the engine with cross-player state, and that
//! state lives only for the duration of one [`simulate_round`] call.

pub mod budget;
pub mod outcome;
pub mod simulator;
pub mod tiebreak;

pub use budget::{personal_budget, FixedBudget, RollBudgetPolicy, UniformBudget};
pub use outcome::{PlayerThrowRecord, RoundOutcome};
pub use simulator::{keep_better, play_seeded_round, simulate_round};
pub use tiebreak::{select_loser, select_winner};
