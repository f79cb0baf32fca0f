//! The six throw categories and their fixed priority table.
//!
//! Categories are tried in ascending priority on the ascending-sorted triple
//! `[a, b, c]`; the first match wins:
//!
//! | Priority | Key          | Matches                  | Penalty      |
//! |----------|--------------|--------------------------|--------------|
//! | 1        | `SCHOCK_OUT` | 1-1-1                    | 15           |
//! | 2        | `JULE`       | 1-2-4                    | 7            |
//! | 3        | `SCHOCK`     | 1-1-x, x != 1            | x            |
//! | 4        | `GENERAL`    | x-x-x, x != 1            | 3            |
//! | 5        | `STRAIGHT`   | x, x+1, x+2              | 2            |
//! | 6        | `EYE_THROW`  | everything else          | 1            |
//!
//! Because evaluation stops at the first match, a single category applies to
//! every one of the 216 possible triples.

use serde::{Deserialize, Serialize};

/// How a category turns a sorted triple into a penalty.
#[derive(Clone, Copy, Debug)]
pub enum PenaltyRule {
    /// Same penalty for every throw in the category.
    Fixed(u32),
    /// Penalty derived from the ascending-sorted triple.
    Computed(fn(&[u8; 3]) -> u32),
}

impl PenaltyRule {
    /// Resolve the penalty for an ascending-sorted triple.
    #[must_use]
    pub fn resolve(self, sorted: &[u8; 3]) -> u32 {
        match self {
            PenaltyRule::Fixed(penalty) => penalty,
            PenaltyRule::Computed(rule) => rule(sorted),
        }
    }
}

/// A throw category.
///
/// Variants are declared best-first, so the derived `Ord` agrees with
/// [`Category::priority`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    SchockOut,
    Jule,
    Schock,
    General,
    Straight,
    EyeThrow,
}

/// All categories in evaluation order (priority 1 first).
pub const CATEGORY_TABLE: [Category; 6] = [
    Category::SchockOut,
    Category::Jule,
    Category::Schock,
    Category::General,
    Category::Straight,
    Category::EyeThrow,
];

fn schock_penalty(sorted: &[u8; 3]) -> u32 {
    u32::from(sorted[2])
}

impl Category {
    /// Stable identity key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Category::SchockOut => "SCHOCK_OUT",
            Category::Jule => "JULE",
            Category::Schock => "SCHOCK",
            Category::General => "GENERAL",
            Category::Straight => "STRAIGHT",
            Category::EyeThrow => "EYE_THROW",
        }
    }

    /// Look a category up by its key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORY_TABLE.into_iter().find(|category| category.key() == key)
    }

    /// Display name as used at the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::SchockOut => "Schock-Out",
            Category::Jule => "Jule",
            Category::Schock => "Schock",
            Category::General => "General",
            Category::Straight => "Straße",
            Category::EyeThrow => "Augenwurf",
        }
    }

    /// Rule text shown alongside the name.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Category::SchockOut => "1-1-1, höchster Wurf im Spiel",
            Category::Jule => "1-2-4, zweithöchster Wurf",
            Category::Schock => "Zwei Einsen + ein anderer Würfel (1-1-2 bis 1-1-6)",
            Category::General => "Drei gleiche Würfel (außer 1-1-1)",
            Category::Straight => "Drei aufeinanderfolgende Zahlen",
            Category::EyeThrow => "Alle übrigen Würfe",
        }
    }

    /// Priority rank, 1 = best category, 6 = worst.
    #[must_use]
    pub const fn priority(self) -> u32 {
        match self {
            Category::SchockOut => 1,
            Category::Jule => 2,
            Category::Schock => 3,
            Category::General => 4,
            Category::Straight => 5,
            Category::EyeThrow => 6,
        }
    }

    /// Penalty rule of this category.
    #[must_use]
    pub const fn penalty_rule(self) -> PenaltyRule {
        match self {
            Category::SchockOut => PenaltyRule::Fixed(15),
            Category::Jule => PenaltyRule::Fixed(7),
            Category::Schock => PenaltyRule::Computed(schock_penalty),
            Category::General => PenaltyRule::Fixed(3),
            Category::Straight => PenaltyRule::Fixed(2),
            Category::EyeThrow => PenaltyRule::Fixed(1),
        }
    }

    /// Membership predicate on an ascending-sorted triple of faces 1..=6.
    ///
    /// Other input gives a meaningless answer but never panics.
    ///
    /// Predicates of different categories can overlap (1-1-1 also satisfies
    /// "three of a kind"); only evaluation in table order makes them exclusive.
    #[must_use]
    pub const fn matches(self, sorted: &[u8; 3]) -> bool {
        let [a, b, c] = *sorted;
        match self {
            Category::SchockOut => a == 1 && b == 1 && c == 1,
            Category::Jule => a == 1 && b == 2 && c == 4,
            Category::Schock => a == 1 && b == 1 && c != 1,
            Category::General => a == b && b == c && a != 1,
            Category::Straight => b.wrapping_sub(a) == 1 && c.wrapping_sub(b) == 1,
            Category::EyeThrow => true,
        }
    }

    /// First category in table order whose predicate matches.
    #[must_use]
    pub fn of_sorted(sorted: &[u8; 3]) -> Self {
        CATEGORY_TABLE
            .into_iter()
            .find(|category| category.matches(sorted))
            .unwrap_or(Category::EyeThrow)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_priority_order() {
        let priorities: Vec<_> = CATEGORY_TABLE.iter().map(|c| c.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6]);

        let mut sorted = CATEGORY_TABLE;
        sorted.sort();
        assert_eq!(sorted, CATEGORY_TABLE);
    }

    #[test]
    fn test_keys_roundtrip() {
        for category in CATEGORY_TABLE {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("YAHTZEE"), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Category::SchockOut).unwrap();
        assert_eq!(json, "\"SCHOCK_OUT\"");

        let back: Category = serde_json::from_str("\"EYE_THROW\"").unwrap();
        assert_eq!(back, Category::EyeThrow);
    }

    #[test]
    fn test_matches_tolerates_any_bytes() {
        assert!(Category::Straight.matches(&[4, 5, 6]));
        assert!(!Category::Straight.matches(&[254, 255, 255]));
        assert_eq!(Category::of_sorted(&[255, 255, 255]), Category::General);
    }

    #[test]
    fn test_penalty_rules() {
        assert_eq!(Category::SchockOut.penalty_rule().resolve(&[1, 1, 1]), 15);
        assert_eq!(Category::Jule.penalty_rule().resolve(&[1, 2, 4]), 7);
        assert_eq!(Category::Schock.penalty_rule().resolve(&[1, 1, 2]), 2);
        assert_eq!(Category::Schock.penalty_rule().resolve(&[1, 1, 6]), 6);
        assert_eq!(Category::General.penalty_rule().resolve(&[5, 5, 5]), 3);
        assert_eq!(Category::Straight.penalty_rule().resolve(&[2, 3, 4]), 2);
        assert_eq!(Category::EyeThrow.penalty_rule().resolve(&[2, 5, 6]), 1);
    }

    #[test]
    fn test_overlapping_predicates_resolved_by_order() {
        // 1-1-1 is three of a kind and two ones, but only Schock-Out counts.
        assert!(Category::SchockOut.matches(&[1, 1, 1]));
        assert!(!Category::General.matches(&[1, 1, 1]));
        assert_eq!(Category::of_sorted(&[1, 1, 1]), Category::SchockOut);

        // 1-2-3 is a straight; 1-2-4 is not.
        assert_eq!(Category::of_sorted(&[1, 2, 3]), Category::Straight);
        assert_eq!(Category::of_sorted(&[1, 2, 4]), Category::Jule);

        // Two ones plus a four is a Schock, never a Jule.
        assert_eq!(Category::of_sorted(&[1, 1, 4]), Category::Schock);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Category::Straight.to_string(), "Straße");
        assert_eq!(Category::EyeThrow.to_string(), "Augenwurf");
    }
}
