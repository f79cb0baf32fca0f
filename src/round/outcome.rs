//! Per-player records and round outcomes.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::rules::{ClassifiedThrow, RankKey};

/// Everything one player threw in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerThrowRecord {
    /// Play-order position.
    pub player: PlayerId,

    /// Display name.
    pub name: String,

    /// Throws this player was allowed.
    pub budget: u32,

    /// Every attempt in the order thrown.
    /// SmallVec holds the usual 1-3 attempts without heap allocation.
    pub attempts: SmallVec<[ClassifiedThrow; 3]>,

    /// The kept throw: lowest rank key, earliest on ties.
    pub best: ClassifiedThrow,
}

impl PlayerThrowRecord {
    /// Rank key of the kept throw.
    #[must_use]
    pub fn best_key(&self) -> RankKey {
        self.best.rank_key()
    }

    /// Number of throws actually made.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }
}

/// Result of one round.
///
/// `players` stays in play order; winner and loser are resolved already.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    /// Player records in play order.
    pub players: Vec<PlayerThrowRecord>,

    /// Player with the best kept throw.
    pub winner: PlayerId,

    /// Player with the worst kept throw.
    pub loser: PlayerId,

    /// Tokens the loser pays, set by the winner's kept throw.
    pub penalty: u32,

    /// Base budget drawn for this round.
    pub base_budget: u32,
}

impl RoundOutcome {
    /// Record of a player, if present.
    #[must_use]
    pub fn record(&self, player: PlayerId) -> Option<&PlayerThrowRecord> {
        self.players.get(player.index())
    }

    #[must_use]
    pub fn winner_record(&self) -> &PlayerThrowRecord {
        &self.players[self.winner.index()]
    }

    #[must_use]
    pub fn loser_record(&self) -> &PlayerThrowRecord {
        &self.players[self.loser.index()]
    }

    #[must_use]
    pub fn winner_name(&self) -> &str {
        &self.winner_record().name
    }

    #[must_use]
    pub fn loser_name(&self) -> &str {
        &self.loser_record().name
    }

    /// The best throw of the round.
    #[must_use]
    pub fn winning_throw(&self) -> &ClassifiedThrow {
        &self.winner_record().best
    }

    /// Total throws made by all players.
    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.players.iter().map(PlayerThrowRecord::attempt_count).sum()
    }
}
