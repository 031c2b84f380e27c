//! Dice simulation for exploding eight-sided dice.
//!
//! Every die in the system is a d8. A face at or above the combatant's dice
//! stat is a success; a natural 8 explodes into an extra roll that is scored
//! on its own. Pools may reroll a limited number of failed dice once.

pub mod pool;
pub mod roll;

pub use pool::simulated_num_successes;
pub use roll::roll_exploding;

use serde::{Deserialize, Serialize};

/// Lowest face on a die.
pub const PIP_LO: u32 = 1;

/// Highest face on a die. Rolling it explodes the die.
pub const PIP_HI: u32 = 8;

/// Upper bound on draws for a single die's explosion chain.
pub const MAX_EXPLOSIONS: u32 = 64;

/// Successes and failures scored by one or more dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Dice outcomes that met the dice stat.
    pub successes: u32,
    /// Dice outcomes that fell short of the dice stat.
    pub failures: u32,
}

impl Tally {
    /// A tally with the given counts.
    pub const fn new(successes: u32, failures: u32) -> Self {
        Self {
            successes,
            failures,
        }
    }

    /// A single success.
    pub const fn success() -> Self {
        Self::new(1, 0)
    }

    /// A single failure.
    pub const fn failure() -> Self {
        Self::new(0, 1)
    }

    /// Total outcomes scored.
    pub const fn outcomes(self) -> u32 {
        self.successes + self.failures
    }
}

impl std::ops::Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.successes + other.successes,
            self.failures + other.failures,
        )
    }
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| acc + t)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s/{}f", self.successes, self.failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_addition() {
        let total = Tally::success() + Tally::failure() + Tally::new(2, 3);
        assert_eq!(total, Tally::new(3, 4));
        assert_eq!(total.outcomes(), 7);
    }

    #[test]
    fn tally_add_assign() {
        let mut t = Tally::default();
        t += Tally::success();
        t += Tally::success();
        assert_eq!(t, Tally::new(2, 0));
    }

    #[test]
    fn tally_sum() {
        let total: Tally = vec![Tally::success(), Tally::failure(), Tally::failure()]
            .into_iter()
            .sum();
        assert_eq!(total, Tally::new(1, 2));
        let empty: Tally = std::iter::empty().sum();
        assert_eq!(empty, Tally::default());
    }

    #[test]
    fn tally_display() {
        assert_eq!(Tally::new(2, 1).to_string(), "2s/1f");
    }
}
