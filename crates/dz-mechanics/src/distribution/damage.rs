//! Single-round damage distribution and the top-level calculation.
//!
//! Positive damage is dealt by the attacker to the defender, negative damage
//! by the defender back to the attacker. For each pair of success counts the
//! net difference decides who deals damage; the receiver's shield dice are
//! then convolved in exactly with a binomial, followed by armor and the
//! giver's toxic damage.

use rand::Rng;

use crate::binomial::binomial_pmf;
use crate::combatant::Combatant;
use crate::error::MechResult;
use crate::options::CombatOptions;
use crate::prob_map::ProbMap;

use super::rounds::calc_multi_round_damage;
use super::success::make_success_probs;

/// Compute the damage distribution for `attacker` against `defender`.
///
/// Draws from the RNG built by [`CombatOptions::rng`] and delegates to
/// [`calc_dmg_probs_with_rng`].
pub fn calc_dmg_probs(
    attacker: &Combatant,
    defender: &Combatant,
    options: &CombatOptions,
) -> MechResult<ProbMap> {
    let mut rng = options.rng();
    calc_dmg_probs_with_rng(attacker, defender, options, &mut rng)
}

/// Compute the damage distribution using the given RNG.
///
/// The attacker's success distribution is simulated first, then the
/// defender's. When more than one round is requested the single-round
/// distribution is extended with [`calc_multi_round_damage`].
pub fn calc_dmg_probs_with_rng<R: Rng + ?Sized>(
    attacker: &Combatant,
    defender: &Combatant,
    options: &CombatOptions,
    rng: &mut R,
) -> MechResult<ProbMap> {
    attacker.validate()?;
    defender.validate()?;
    options.validate()?;

    let atk_success_probs = make_success_probs(attacker, options.num_simulations, rng)?;
    let def_success_probs = make_success_probs(defender, options.num_simulations, rng)?;

    let dmg_probs = combine_success_probs(
        attacker,
        defender,
        &atk_success_probs,
        &def_success_probs,
        options,
    );

    tracing::debug!(
        outcomes = dmg_probs.len(),
        mass = dmg_probs.total_mass(),
        mean = dmg_probs.mean(),
        "single-round damage distribution built"
    );

    if options.num_rounds > 1 {
        calc_multi_round_damage(&dmg_probs, options.num_rounds)
    } else {
        Ok(dmg_probs)
    }
}

/// Combine two success distributions into a single-round damage distribution.
///
/// Uses `options.attacker_can_be_damaged` and `options.shield_success_prob`;
/// the simulation and round settings are ignored here.
pub fn combine_success_probs(
    attacker: &Combatant,
    defender: &Combatant,
    atk_success_probs: &ProbMap,
    def_success_probs: &ProbMap,
    options: &CombatOptions,
) -> ProbMap {
    let mut dmg_probs = ProbMap::new();

    for (atk_successes, atk_prob) in atk_success_probs.iter() {
        for (def_successes, def_prob) in def_success_probs.iter() {
            let mut raw_dmg = atk_successes - def_successes;
            if !options.attacker_can_be_damaged {
                raw_dmg = raw_dmg.max(0);
            }

            let (giver, receiver) = if raw_dmg >= 0 {
                (attacker, defender)
            } else {
                (defender, attacker)
            };
            let net_armor = i64::from(receiver.net_armor_against(giver.ap));
            // Shields only roll against actual damage
            let num_shield_dice = if raw_dmg == 0 {
                0
            } else {
                receiver.num_shield_dice
            };
            let atk_and_def_prob = atk_prob * def_prob;

            for shield_successes in 0..=num_shield_dice {
                let shield_prob = if num_shield_dice == 0 {
                    1.0
                } else {
                    binomial_pmf(num_shield_dice, shield_successes, options.shield_success_prob)
                };
                let post_shield = (raw_dmg.abs() - i64::from(shield_successes)).max(0);
                let post_armor = (post_shield - net_armor).max(0);
                let post_toxic = post_armor + i64::from(giver.toxic_dmg);
                dmg_probs.add(raw_dmg.signum() * post_toxic, atk_and_def_prob * shield_prob);
            }
        }
    }

    dmg_probs
}
