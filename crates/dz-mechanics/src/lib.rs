//! Damage probability engine for Deadzone-style skirmish combat.
//!
//! Estimates each combatant's success distribution by simulating exploding
//! d8 pools with rerolls, then combines attacker and defender exactly:
//! net successes become damage, shield dice are folded in with a binomial,
//! armor and toxic damage are applied, and multiple rounds are obtained by
//! self-convolution.

pub mod binomial;
pub mod combatant;
pub mod dice;
pub mod distribution;
pub mod error;
pub mod options;
pub mod prob_map;

pub use binomial::binomial_pmf;
pub use combatant::Combatant;
pub use dice::{Tally, roll_exploding, simulated_num_successes};
pub use distribution::{
    calc_dmg_probs, calc_dmg_probs_with_rng, calc_multi_round_damage, combine_success_probs,
    convolve, make_success_probs,
};
pub use error::{MechError, MechResult};
pub use options::{CombatOptions, DEFAULT_SIMULATIONS, SINGLE_SHIELD_PROB};
pub use prob_map::ProbMap;
