//! Round configuration.
//!
//! A [`RoundConfig`] names the players in play order and bounds the roll
//! budgets. It can be built in code or loaded from JSON:
//!
//! ```
//! use schocken::core::RoundConfig;
//!
//! let config = RoundConfig::from_json(r#"{ "players": ["Anna", "Ben"] }"#).unwrap();
//! assert_eq!(config.player_count(), 2);
//! assert_eq!(config.max_rolls, 3);
//! ```

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::ConfigError;

/// Roll budget cap for every player after the first.
pub const DEFAULT_MAX_ROLLS: u32 = 3;

/// Upper bound of the opening player's uniform budget draw.
pub const DEFAULT_STARTER_MAX_ROLLS: u32 = 3;

/// Largest roll budget any player can be given in one round.
pub const MAX_ROLL_BUDGET: u32 = 6;

const MAX_PLAYERS: usize = 255;

/// Configuration for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Player names in play order.
    pub players: Vec<String>,

    /// Cap applied to every player after the first.
    pub max_rolls: u32,

    /// The base budget is drawn uniformly from `1..=starter_max_rolls`.
    pub starter_max_rolls: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            players: (1..=4).map(|n| format!("{n}. Spieler")).collect(),
            max_rolls: DEFAULT_MAX_ROLLS,
            starter_max_rolls: DEFAULT_STARTER_MAX_ROLLS,
        }
    }
}

impl RoundConfig {
    /// Create a configuration for the given players with default budgets.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a JSON config body. Missing fields take their defaults.
    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(body).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the cap for players after the first.
    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    /// Set the upper bound of the base budget draw.
    #[must_use]
    pub fn with_starter_max_rolls(mut self, starter_max_rolls: u32) -> Self {
        self.starter_max_rolls = starter_max_rolls;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Name of a player, if present.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.players.get(player.index()).map(String::as_str)
    }

    /// Check the round can start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.players.len();
        if count < 2 {
            return Err(ConfigError::TooFewPlayers { count });
        }
        if count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { count });
        }
        if self.max_rolls == 0 {
            return Err(ConfigError::NonPositiveRollBudget { field: "max_rolls" });
        }
        if self.starter_max_rolls == 0 {
            return Err(ConfigError::NonPositiveRollBudget {
                field: "starter_max_rolls",
            });
        }
        if self.starter_max_rolls > MAX_ROLL_BUDGET {
            return Err(ConfigError::RollBudgetTooLarge {
                field: "starter_max_rolls",
                value: self.starter_max_rolls,
            });
        }
        Ok(())
    }
}
