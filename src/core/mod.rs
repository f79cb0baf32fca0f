//! Core engine types: dice, players, RNG, configuration.
//!
//! These are the building blocks shared by the rule table and the round
//! simulator. Nothing here knows about throw categories.

pub mod dice;
pub mod player;
pub mod rng;
pub mod config;

pub use dice::{DiceSource, ScriptedDice, Throw, MAX_FACE, MIN_FACE};
pub use player::PlayerId;
pub use rng::GameRng;
pub use config::{RoundConfig, DEFAULT_MAX_ROLLS, DEFAULT_STARTER_MAX_ROLLS, MAX_ROLL_BUDGET};
