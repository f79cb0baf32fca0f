//! Roll budgets.
//!
//! Each round draws one base budget. The opening player may use all of it;
//! everyone after is capped at `max_rolls`. With the default bounds (both 3)
//! the cap never bites, but a wider starter range makes the asymmetry visible.

use crate::core::{GameRng, PlayerId};

/// Source of the per-round base budget.
pub trait RollBudgetPolicy {
    /// Draw the base budget for a new round.
    fn base_budget(&mut self) -> u32;
}

impl<P: RollBudgetPolicy + ?Sized> RollBudgetPolicy for &mut P {
    fn base_budget(&mut self) -> u32 {
        (**self).base_budget()
    }
}

/// Base budget drawn uniformly from `1..=max`.
#[derive(Clone, Debug)]
pub struct UniformBudget {
    rng: GameRng,
    max: u32,
}

impl UniformBudget {
    /// Create a policy drawing from `1..=max` with the given generator.
    #[must_use]
    pub fn new(rng: GameRng, max: u32) -> Self {
        Self { rng, max }
    }
}

impl RollBudgetPolicy for UniformBudget {
    fn base_budget(&mut self) -> u32 {
        // An empty range yields 0, which the simulator rejects.
        if self.max == 0 {
            return 0;
        }
        self.rng.gen_range_u32(1..=self.max)
    }
}

/// Same base budget every round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBudget(pub u32);

impl RollBudgetPolicy for FixedBudget {
    fn base_budget(&mut self) -> u32 {
        self.0
    }
}

/// Budget of one player given the round's base budget.
///
/// ```
/// use schocken::core::PlayerId;
/// use schocken::round::personal_budget;
///
/// assert_eq!(personal_budget(PlayerId::new(0), 5, 3), 5);
/// assert_eq!(personal_budget(PlayerId::new(1), 5, 3), 3);
/// assert_eq!(personal_budget(PlayerId::new(2), 1, 3), 1);
/// ```
#[must_use]
pub fn personal_budget(player: PlayerId, base: u32, max_rolls: u32) -> u32 {
    if player.is_first() {
        base
    } else {
        base.min(max_rolls)
    }
}
