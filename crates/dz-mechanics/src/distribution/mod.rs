//! Probability distributions for a combat exchange.
//!
//! The pipeline runs leaf-first:
//! - **Successes**: Monte Carlo estimate of each combatant's success count
//! - **Damage**: pairwise combination of both success distributions with
//!   shields, armor, and toxic damage applied exactly
//! - **Rounds**: self-convolution of the single-round damage distribution

pub mod damage;
pub mod rounds;
pub mod success;

pub use damage::{calc_dmg_probs, calc_dmg_probs_with_rng, combine_success_probs};
pub use rounds::{calc_multi_round_damage, convolve};
pub use success::make_success_probs;
