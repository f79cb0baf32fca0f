//! Winner and loser selection with play-order tie-breaks.
//!
//! - Shared best key: the earliest player wins.
//! - Shared worst key: the latest player loses.
//!
//! The two selections are independent. With at least two players they never
//! pick the same player: either the keys differ, or every key is equal and the
//! first player wins while the last one loses.

use crate::core::PlayerId;
use crate::rules::RankKey;

/// Player with the lowest key, earliest in play order on ties.
///
/// ```
/// use schocken::core::PlayerId;
/// use schocken::round::select_winner;
/// use schocken::rules::RankKey;
///
/// let keys = [
///     (PlayerId::new(0), RankKey(5400)),
///     (PlayerId::new(1), RankKey(2994)),
///     (PlayerId::new(2), RankKey(2994)),
/// ];
/// assert_eq!(select_winner(keys), Some(PlayerId::new(1)));
/// ```
pub fn select_winner(keys: impl IntoIterator<Item = (PlayerId, RankKey)>) -> Option<PlayerId> {
    keys.into_iter()
        .min_by_key(|&(player, key)| (key, player))
        .map(|(player, _)| player)
}

/// Player with the highest key, latest in play order on ties.
pub fn select_loser(keys: impl IntoIterator<Item = (PlayerId, RankKey)>) -> Option<PlayerId> {
    keys.into_iter()
        .max_by_key(|&(player, key)| (key, player))
        .map(|(player, _)| player)
}
