//! Dice triples and the sources that produce them.
//!
//! A [`Throw`] keeps the dice in the order they were rolled. Classification
//! works on a sorted copy, but display code may still want the original order.
//!
//! [`DiceSource`] is the only seam to dice randomness. [`GameRng`] rolls real
//! dice; [`ScriptedDice`] replays fixed triples so rounds can be tested
//! without randomness.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::SchockError;

/// Lowest face of a die.
pub const MIN_FACE: u8 = 1;
/// Highest face of a die.
pub const MAX_FACE: u8 = 6;

/// Three validated die values in original roll order.
///
/// ```
/// use schocken::core::Throw;
///
/// let throw = Throw::new([4, 1, 2]).unwrap();
/// assert_eq!(throw.dice(), [4, 1, 2]);
/// assert_eq!(throw.sorted(), [1, 2, 4]);
/// assert_eq!(throw.descending(), [4, 2, 1]);
///
/// assert!(Throw::new([0, 3, 3]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]", into = "[u8; 3]")]
pub struct Throw([u8; 3]);

impl Throw {
    /// Validate a raw triple.
    ///
    /// Fails on the first die outside 1..=6.
    pub fn new(dice: [u8; 3]) -> Result<Self, SchockError> {
        if let Some((position, &value)) = dice
            .iter()
            .enumerate()
            .find(|(_, value)| !(MIN_FACE..=MAX_FACE).contains(*value))
        {
            return Err(SchockError::InvalidInput { position, value });
        }
        Ok(Self(dice))
    }

    /// Dice in the order they were rolled.
    #[must_use]
    pub const fn dice(self) -> [u8; 3] {
        self.0
    }

    /// Ascending working copy used for classification.
    #[must_use]
    pub fn sorted(self) -> [u8; 3] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    /// Descending copy, highest die first.
    #[must_use]
    pub fn descending(self) -> [u8; 3] {
        let mut sorted = self.sorted();
        sorted.reverse();
        sorted
    }
}

impl TryFrom<[u8; 3]> for Throw {
    type Error = SchockError;

    fn try_from(dice: [u8; 3]) -> Result<Self, Self::Error> {
        Self::new(dice)
    }
}

impl From<Throw> for [u8; 3] {
    fn from(throw: Throw) -> Self {
        throw.0
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Source of dice triples.
///
/// Implementations should return three independent values in 1..=6.
/// The engine validates every triple anyway, so a faulty source surfaces as
/// [`SchockError::InvalidInput`] instead of a silent misclassification.
pub trait DiceSource {
    /// Roll three dice.
    fn throw_dice(&mut self) -> [u8; 3];
}

impl DiceSource for GameRng {
    fn throw_dice(&mut self) -> [u8; 3] {
        [self.roll_die(), self.roll_die(), self.roll_die()]
    }
}

impl<S: DiceSource + ?Sized> DiceSource for &mut S {
    fn throw_dice(&mut self) -> [u8; 3] {
        (**self).throw_dice()
    }
}

/// Replays a fixed sequence of triples.
///
/// ```
/// use schocken::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([[1, 1, 1], [6, 5, 4]]);
/// assert_eq!(dice.throw_dice(), [1, 1, 1]);
/// assert_eq!(dice.remaining(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<[u8; 3]>,
    thrown: usize,
}

impl ScriptedDice {
    /// Create a source replaying `script` in order.
    pub fn new(script: impl IntoIterator<Item = [u8; 3]>) -> Self {
        Self {
            script: script.into_iter().collect(),
            thrown: 0,
        }
    }

    /// Triples not yet thrown.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Triples thrown so far.
    #[must_use]
    pub fn thrown(&self) -> usize {
        self.thrown
    }
}

impl DiceSource for ScriptedDice {
    /// # Panics
    ///
    /// Panics when the script is exhausted.
    fn throw_dice(&mut self) -> [u8; 3] {
        let dice = self
            .script
            .pop_front()
            .unwrap_or_else(|| panic!("Scripted dice exhausted after {} throws", self.thrown));
        self.thrown += 1;
        dice
    }
}
