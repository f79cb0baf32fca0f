//! Error types for classification and round setup.
//!
//! There are exactly two failure families:
//! - [`SchockError::InvalidInput`]: a die value outside 1..=6 reached the engine.
//! - [`SchockError::Configuration`]: a round cannot start (see [`ConfigError`]).
//!
//! The EYE_THROW catch-all is a valid classification, never an error.

use thiserror::Error;

/// Errors raised by the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchockError {
    #[error("die {position} has value {value}, expected 1..=6")]
    InvalidInput { position: usize, value: u8 },
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

/// Errors raised when a round configuration is unusable.
///
/// Always reported before any dice are drawn.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a round needs at least 2 players (got {count})")]
    TooFewPlayers { count: usize },
    #[error("at most 255 players supported (got {count})")]
    TooManyPlayers { count: usize },
    #[error("{field} must be a positive roll budget")]
    NonPositiveRollBudget { field: &'static str },
    #[error("{field} of {value} exceeds the largest roll budget of {}", crate::core::MAX_ROLL_BUDGET)]
    RollBudgetTooLarge { field: &'static str, value: u32 },
    #[error("invalid round config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = SchockError::InvalidInput { position: 2, value: 7 };
        assert_eq!(err.to_string(), "die 2 has value 7, expected 1..=6");
    }

    #[test]
    fn test_config_error_converts() {
        let err: SchockError = ConfigError::TooFewPlayers { count: 1 }.into();
        assert_eq!(
            err,
            SchockError::Configuration(ConfigError::TooFewPlayers { count: 1 })
        );
        assert_eq!(err.to_string(), "a round needs at least 2 players (got 1)");
    }

    #[test]
    fn test_budget_too_large_message() {
        let err = ConfigError::RollBudgetTooLarge {
            field: "base_budget",
            value: 50_000,
        };
        assert_eq!(
            err.to_string(),
            "base_budget of 50000 exceeds the largest roll budget of 6"
        );
    }
}
