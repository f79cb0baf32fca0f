//! Round simulation.
//!
//! A round draws one base budget, lets every player throw up to their personal
//! budget, keeps each player's best throw and resolves winner, loser and
//! penalty. Randomness enters only through the [`RollBudgetPolicy`] and the
//! [`DiceSource`], so scripted sources make rounds fully reproducible.

use log::{debug, trace, warn};
use smallvec::SmallVec;

use super::budget::{personal_budget, RollBudgetPolicy, UniformBudget};
use super::outcome::{PlayerThrowRecord, RoundOutcome};
use super::tiebreak::{select_loser, select_winner};
use crate::core::{DiceSource, GameRng, PlayerId, RoundConfig, MAX_ROLL_BUDGET};
use crate::error::{ConfigError, SchockError};
use crate::rules::{classify, ClassifiedThrow};

/// Reducer for a player's kept throw.
///
/// The candidate replaces the current best only with a strictly lower rank
/// key, so the earliest of equal throws is kept.
#[must_use]
pub fn keep_better(current: ClassifiedThrow, candidate: ClassifiedThrow) -> ClassifiedThrow {
    if candidate.rank_key().beats(current.rank_key()) {
        candidate
    } else {
        current
    }
}

/// Let one player throw `budget` times.
fn play_turn<D>(
    player: PlayerId,
    name: &str,
    budget: u32,
    dice: &mut D,
) -> Result<PlayerThrowRecord, SchockError>
where
    D: DiceSource + ?Sized,
{
    let mut attempts: SmallVec<[ClassifiedThrow; 3]> = SmallVec::new();
    for attempt in 1..=budget {
        let throw = classify(&dice.throw_dice())?;
        trace!(
            "{name} throw {attempt}/{budget}: {} -> {} (key {})",
            throw.dice,
            throw.key(),
            throw.rank_key()
        );
        attempts.push(throw);
    }

    let best = attempts
        .iter()
        .copied()
        .reduce(keep_better)
        .ok_or(ConfigError::NonPositiveRollBudget { field: "budget" })?;

    Ok(PlayerThrowRecord {
        player,
        name: name.to_owned(),
        budget,
        attempts,
        best,
    })
}

/// Simulate one round.
///
/// Fails before any dice are drawn if the configuration is invalid or the
/// policy yields a base budget outside `1..=MAX_ROLL_BUDGET`. Fails with
/// [`SchockError::InvalidInput`] if the dice source produces a die outside
/// 1..=6.
///
/// # Panics
///
/// Panics raised by the dice source propagate, e.g. an exhausted
/// [`ScriptedDice`](crate::core::ScriptedDice).
///
/// ```
/// use schocken::core::{PlayerId, RoundConfig, ScriptedDice};
/// use schocken::round::{simulate_round, FixedBudget};
///
/// let config = RoundConfig::new(["Anna", "Ben"]);
/// let mut dice = ScriptedDice::new([[6, 5, 2], [1, 1, 5]]);
///
/// let outcome = simulate_round(&config, &mut FixedBudget(1), &mut dice).unwrap();
/// assert_eq!(outcome.winner, PlayerId::new(1));
/// assert_eq!(outcome.loser, PlayerId::new(0));
/// assert_eq!(outcome.penalty, 5);
/// ```
pub fn simulate_round<P, D>(
    config: &RoundConfig,
    budget: &mut P,
    dice: &mut D,
) -> Result<RoundOutcome, SchockError>
where
    P: RollBudgetPolicy + ?Sized,
    D: DiceSource + ?Sized,
{
    if let Err(err) = config.validate() {
        warn!("rejecting round: {err}");
        return Err(err.into());
    }

    let base_budget = budget.base_budget();
    if base_budget == 0 {
        warn!("rejecting round: base budget is zero");
        return Err(ConfigError::NonPositiveRollBudget { field: "base_budget" }.into());
    }
    if base_budget > MAX_ROLL_BUDGET {
        warn!("rejecting round: base budget {base_budget} above {MAX_ROLL_BUDGET}");
        return Err(ConfigError::RollBudgetTooLarge {
            field: "base_budget",
            value: base_budget,
        }
        .into());
    }
    debug!(
        "round start: {} players, base budget {base_budget}, cap {}",
        config.player_count(),
        config.max_rolls
    );

    let players = config
        .players
        .iter()
        .zip(PlayerId::all(config.player_count()))
        .map(|(name, player)| {
            let allowed = personal_budget(player, base_budget, config.max_rolls);
            play_turn(player, name, allowed, &mut *dice)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let keys = || players.iter().map(|record| (record.player, record.best_key()));
    let (Some(winner), Some(loser)) = (select_winner(keys()), select_loser(keys())) else {
        return Err(ConfigError::TooFewPlayers { count: players.len() }.into());
    };
    let penalty = players[winner.index()].best.penalty;

    debug!(
        "round over: {} wins with {}, {} loses and pays {penalty}",
        players[winner.index()].name,
        players[winner.index()].best.name(),
        players[loser.index()].name
    );

    Ok(RoundOutcome {
        players,
        winner,
        loser,
        penalty,
        base_budget,
    })
}

/// Simulate a round driven entirely by `seed`.
///
/// Budget and dice draws use separate context streams of the same seed, so
/// the same seed and config always replay the same round.
pub fn play_seeded_round(config: &RoundConfig, seed: u64) -> Result<RoundOutcome, SchockError> {
    let rng = GameRng::new(seed);
    let mut budget = UniformBudget::new(rng.for_context("budget"), config.starter_max_rolls);
    let mut dice = rng.for_context("dice");
    simulate_round(config, &mut budget, &mut dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::round::FixedBudget;
    use crate::rules::Category;

    fn throw(dice: [u8; 3]) -> ClassifiedThrow {
        classify(&dice).unwrap()
    }

    #[test]
    fn test_keep_better_prefers_strictly_lower() {
        let eye = throw([6, 5, 2]);
        let schock = throw([1, 1, 3]);

        assert_eq!(keep_better(eye, schock), schock);
        assert_eq!(keep_better(schock, eye), schock);
    }

    #[test]
    fn test_keep_better_keeps_earliest_on_tie() {
        let first = throw([2, 4, 1]);
        let second = throw([1, 4, 2]);

        let kept = keep_better(first, second);
        assert_eq!(kept.dice.dice(), [2, 4, 1]);
    }

    #[test]
    fn test_play_turn_records_every_attempt() {
        let mut dice = ScriptedDice::new([[6, 5, 2], [1, 1, 4], [2, 2, 2]]);
        let record = play_turn(PlayerId::new(0), "Anna", 3, &mut dice).unwrap();

        assert_eq!(record.attempt_count(), 3);
        assert_eq!(record.best.category, Category::Schock);
        assert_eq!(record.best.dice.dice(), [1, 1, 4]);
    }

    #[test]
    fn test_zero_base_budget_is_rejected_before_dice() {
        let config = RoundConfig::new(["A", "B"]);
        let mut dice = ScriptedDice::new([[1, 1, 1]]);

        let err = simulate_round(&config, &mut FixedBudget(0), &mut dice).unwrap_err();
        assert_eq!(
            err,
            SchockError::Configuration(ConfigError::NonPositiveRollBudget {
                field: "base_budget"
            })
        );
        assert_eq!(dice.thrown(), 0);
    }

    #[test]
    fn test_oversized_base_budget_is_rejected_before_dice() {
        let config = RoundConfig::new(["A", "B"]);
        let mut dice = ScriptedDice::new(std::iter::repeat([6, 5, 2]).take(10));

        let err = simulate_round(&config, &mut FixedBudget(50_000), &mut dice).unwrap_err();
        assert_eq!(
            err,
            SchockError::Configuration(ConfigError::RollBudgetTooLarge {
                field: "base_budget",
                value: 50_000
            })
        );
        assert_eq!(dice.thrown(), 0);

        let mut dice = ScriptedDice::new(std::iter::repeat([6, 5, 2]).take(12));
        let outcome =
            simulate_round(&config, &mut FixedBudget(MAX_ROLL_BUDGET), &mut dice).unwrap();
        assert_eq!(outcome.players[0].attempt_count(), 6);
    }

    #[test]
    fn test_seeded_round_is_reproducible() {
        let config = RoundConfig::default();
        let a = play_seeded_round(&config, 99).unwrap();
        let b = play_seeded_round(&config, 99).unwrap();
        assert_eq!(a, b);
    }
}
