//! Options controlling a damage calculation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Probability that a single shield die absorbs one point of damage.
pub const SINGLE_SHIELD_PROB: f64 = 0.375;

/// Default number of Monte Carlo trials per combatant.
pub const DEFAULT_SIMULATIONS: u32 = 10_000;

/// Configuration for a damage calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatOptions {
    /// Monte Carlo trials used to estimate each combatant's success counts.
    pub num_simulations: u32,
    /// Number of identical rounds whose damage is summed.
    pub num_rounds: u32,
    /// When false, the defender can never deal damage back.
    pub attacker_can_be_damaged: bool,
    /// Chance for one shield die to absorb a point of damage.
    pub shield_success_prob: f64,
    /// RNG seed for a reproducible run. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for CombatOptions {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_SIMULATIONS,
            num_rounds: 1,
            attacker_can_be_damaged: true,
            shield_success_prob: SINGLE_SHIELD_PROB,
            seed: None,
        }
    }
}

impl CombatOptions {
    /// Set the number of Monte Carlo trials.
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.num_simulations = simulations;
        self
    }

    /// Set the number of rounds.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.num_rounds = rounds;
        self
    }

    /// Allow or forbid the defender dealing damage back.
    pub fn with_fight_back(mut self, attacker_can_be_damaged: bool) -> Self {
        self.attacker_can_be_damaged = attacker_can_be_damaged;
        self
    }

    /// Override the per-die shield success chance.
    pub fn with_shield_prob(mut self, prob: f64) -> Self {
        self.shield_success_prob = prob;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// An RNG seeded from [`CombatOptions::seed`], or from OS entropy when
    /// no seed is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Check that every option is in range.
    pub fn validate(&self) -> MechResult<()> {
        if self.num_simulations == 0 {
            return Err(MechError::InvalidOptions(
                "simulation count must be positive".to_string(),
            ));
        }
        if self.num_rounds == 0 {
            return Err(MechError::InvalidOptions(
                "rounds must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.shield_success_prob) {
            return Err(MechError::InvalidOptions(format!(
                "shield probability {} outside [0, 1]",
                self.shield_success_prob
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let opts = CombatOptions::default();
        assert_eq!(opts.num_simulations, DEFAULT_SIMULATIONS);
        assert_eq!(opts.num_rounds, 1);
        assert!(opts.attacker_can_be_damaged);
        assert!((opts.shield_success_prob - 0.375).abs() < f64::EPSILON);
        assert_eq!(opts.seed, None);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let opts = CombatOptions::default()
            .with_simulations(500)
            .with_rounds(3)
            .with_fight_back(false)
            .with_shield_prob(0.5)
            .with_seed(9);
        assert_eq!(opts.num_simulations, 500);
        assert_eq!(opts.num_rounds, 3);
        assert!(!opts.attacker_can_be_damaged);
        assert!((opts.shield_success_prob - 0.5).abs() < f64::EPSILON);
        assert_eq!(opts.seed, Some(9));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;

        let opts = CombatOptions::default().with_seed(5);
        let mut a = opts.rng();
        let mut b = opts.rng();
        for _ in 0..20 {
            assert_eq!(a.random_range(1..=8u32), b.random_range(1..=8u32));
        }
    }

    #[test]
    fn zero_simulations_rejected() {
        let err = CombatOptions::default().with_simulations(0).validate();
        assert!(matches!(err, Err(MechError::InvalidOptions(_))));
    }

    #[test]
    fn zero_rounds_rejected() {
        assert!(CombatOptions::default().with_rounds(0).validate().is_err());
    }

    #[test]
    fn shield_prob_range_checked() {
        assert!(CombatOptions::default().with_shield_prob(-0.1).validate().is_err());
        assert!(CombatOptions::default().with_shield_prob(1.5).validate().is_err());
        assert!(CombatOptions::default().with_shield_prob(f64::NAN).validate().is_err());
        assert!(CombatOptions::default().with_shield_prob(1.0).validate().is_ok());
    }
}
