//! Rank keys: one integer per throw, lower is better.
//!
//! `key = priority * 1000 - tiebreak`. The tiebreak never exceeds 665 (the
//! eye-throw composite for 6-6-5), so category priority always dominates and
//! throws from different categories never interleave.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::classify::ClassifiedThrow;

/// Spacing between category priorities in the key.
pub const PRIORITY_SPACING: i32 = 1000;

/// Total-order comparison key for throws. Lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RankKey(pub i32);

impl RankKey {
    /// Raw key value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this key ranks strictly better than `other`.
    #[must_use]
    pub fn beats(self, other: RankKey) -> bool {
        self < other
    }
}

impl std::fmt::Display for RankKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Within-category tiebreak value. Higher is better.
///
/// - Schock: the penalty, i.e. the non-one die.
/// - General: the repeated die.
/// - Straight: the highest die.
/// - Eye throw: `100 * high + 10 * mid + low`, which orders like a
///   lexicographic comparison of the descending triples.
/// - Schock-Out and Jule: 0.
#[must_use]
pub fn tiebreak_value(throw: &ClassifiedThrow) -> i32 {
    match throw.category {
        Category::SchockOut | Category::Jule => 0,
        Category::Schock => throw.penalty as i32,
        Category::General => i32::from(throw.sorted()[0]),
        Category::Straight => i32::from(throw.sorted()[2]),
        Category::EyeThrow => {
            let [high, mid, low] = throw.dice.descending();
            100 * i32::from(high) + 10 * i32::from(mid) + i32::from(low)
        }
    }
}

/// Rank key of a classified throw.
///
/// ```
/// use schocken::rules::{classify, rank_key};
///
/// let schock_six = rank_key(&classify(&[1, 1, 6]).unwrap());
/// let schock_five = rank_key(&classify(&[1, 5, 1]).unwrap());
/// assert!(schock_six < schock_five);
/// ```
#[must_use]
pub fn rank_key(throw: &ClassifiedThrow) -> RankKey {
    RankKey(throw.priority() as i32 * PRIORITY_SPACING - tiebreak_value(throw))
}

impl ClassifiedThrow {
    /// Rank key of this throw. See [`rank_key`].
    #[must_use]
    pub fn rank_key(&self) -> RankKey {
        rank_key(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classify;

    fn key(dice: [u8; 3]) -> RankKey {
        rank_key(&classify(&dice).unwrap())
    }

    #[test]
    fn test_fixed_categories_have_flat_keys() {
        assert_eq!(key([1, 1, 1]), RankKey(1000));
        assert_eq!(key([4, 2, 1]), RankKey(2000));
        assert_eq!(key([1, 2, 4]), key([2, 4, 1]));
    }

    #[test]
    fn test_higher_schock_is_better() {
        assert_eq!(key([1, 1, 6]), RankKey(2994));
        assert!(key([1, 1, 6]).beats(key([1, 1, 5])));
        assert!(key([1, 1, 3]).beats(key([1, 1, 2])));
    }

    #[test]
    fn test_general_and_straight_tiebreaks() {
        assert!(key([6, 6, 6]).beats(key([2, 2, 2])));
        assert_eq!(key([4, 4, 4]), RankKey(3996));

        assert!(key([4, 5, 6]).beats(key([1, 2, 3])));
        assert_eq!(key([3, 4, 5]), RankKey(4995));
    }

    #[test]
    fn test_eye_throw_descending_lexicographic() {
        assert!(key([6, 6, 1]).beats(key([6, 5, 3])));
        assert!(key([6, 5, 3]).beats(key([6, 5, 2])));
        // 6-5-4 is a straight, not an eye throw, and outranks both.
        assert!(key([6, 5, 4]).beats(key([6, 6, 1])));
        assert!(key([5, 6, 2]).beats(key([6, 2, 2])));
        assert_eq!(key([2, 5, 6]), RankKey(6000 - 652));
    }

    #[test]
    fn test_categories_never_interleave() {
        // Worst Schock still beats best General; worst Straight beats best eye throw.
        assert!(key([1, 1, 2]).beats(key([6, 6, 6])));
        assert!(key([1, 2, 3]).beats(key([6, 6, 5])));
        assert!(key([2, 2, 2]).beats(key([4, 5, 6])));
    }
}
