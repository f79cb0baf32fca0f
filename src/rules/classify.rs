//! Throw classification.
//!
//! Maps a triple to exactly one [`Category`] with a resolved penalty.

use serde::Serialize;

use super::category::Category;
use crate::core::Throw;
use crate::error::SchockError;

/// A throw bound to its category and resolved penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedThrow {
    /// Category the throw falls into.
    pub category: Category,
    /// Tokens owed when this throw sets the stakes (always >= 1).
    pub penalty: u32,
    /// Dice in original roll order.
    pub dice: Throw,
}

impl ClassifiedThrow {
    /// Ascending-sorted dice used for classification.
    #[must_use]
    pub fn sorted(&self) -> [u8; 3] {
        self.dice.sorted()
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.category.key()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.category.description()
    }

    #[must_use]
    pub fn priority(&self) -> u32 {
        self.category.priority()
    }
}

/// Classify a raw triple.
///
/// ```
/// use schocken::rules::{classify, Category};
///
/// let jule = classify(&[4, 1, 2]).unwrap();
/// assert_eq!(jule.category, Category::Jule);
/// assert_eq!(jule.penalty, 7);
/// assert_eq!(jule.dice.dice(), [4, 1, 2]);
///
/// assert!(classify(&[1, 1, 9]).is_err());
/// ```
pub fn classify(dice: &[u8; 3]) -> Result<ClassifiedThrow, SchockError> {
    Throw::new(*dice).map(classify_throw)
}

/// Classify an already validated throw. Total over all valid throws.
#[must_use]
pub fn classify_throw(dice: Throw) -> ClassifiedThrow {
    let sorted = dice.sorted();
    let category = Category::of_sorted(&sorted);

    ClassifiedThrow {
        category,
        penalty: category.penalty_rule().resolve(&sorted),
        dice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(dice: [u8; 3]) -> Category {
        classify(&dice).unwrap().category
    }

    #[test]
    fn test_schock_out_any_order() {
        let throw = classify(&[1, 1, 1]).unwrap();
        assert_eq!(throw.category, Category::SchockOut);
        assert_eq!(throw.penalty, 15);
    }

    #[test]
    fn test_jule_all_permutations() {
        for dice in [[1, 2, 4], [1, 4, 2], [2, 1, 4], [2, 4, 1], [4, 1, 2], [4, 2, 1]] {
            let throw = classify(&dice).unwrap();
            assert_eq!(throw.category, Category::Jule, "{dice:?}");
            assert_eq!(throw.penalty, 7);
        }
    }

    #[test]
    fn test_schock_penalty_is_third_die() {
        for third in 2..=6u8 {
            let throw = classify(&[third, 1, 1]).unwrap();
            assert_eq!(throw.category, Category::Schock);
            assert_eq!(throw.penalty, u32::from(third));
        }
    }

    #[test]
    fn test_general_straight_eye_throw() {
        assert_eq!(category_of([4, 4, 4]), Category::General);
        assert_eq!(classify(&[4, 4, 4]).unwrap().penalty, 3);

        assert_eq!(category_of([5, 3, 4]), Category::Straight);
        assert_eq!(classify(&[3, 4, 5]).unwrap().penalty, 2);

        assert_eq!(category_of([2, 5, 6]), Category::EyeThrow);
        assert_eq!(classify(&[2, 5, 6]).unwrap().penalty, 1);
    }

    #[test]
    fn test_keeps_roll_order() {
        let throw = classify(&[6, 2, 5]).unwrap();
        assert_eq!(throw.dice.dice(), [6, 2, 5]);
        assert_eq!(throw.sorted(), [2, 5, 6]);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            classify(&[1, 2, 0]),
            Err(SchockError::InvalidInput { position: 2, value: 0 })
        );
    }

    #[test]
    fn test_accessors_pass_through_category() {
        let throw = classify(&[1, 1, 3]).unwrap();
        assert_eq!(throw.key(), "SCHOCK");
        assert_eq!(throw.name(), "Schock");
        assert_eq!(throw.priority(), 3);
        assert_eq!(throw.description(), Category::Schock.description());
    }
}
