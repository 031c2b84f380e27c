//! Success-count distributions estimated by simulation.

use rand::Rng;

use crate::combatant::Combatant;
use crate::dice::simulated_num_successes;
use crate::error::{MechError, MechResult};
use crate::prob_map::ProbMap;

/// Estimate the distribution of successes for one attack by `combatant`.
///
/// Rolls the combatant's pool `num_simulations` times and normalizes the
/// histogram. Accuracy improves with the number of simulations.
pub fn make_success_probs<R: Rng + ?Sized>(
    combatant: &Combatant,
    num_simulations: u32,
    rng: &mut R,
) -> MechResult<ProbMap> {
    if num_simulations == 0 {
        return Err(MechError::InvalidOptions(
            "simulation count must be positive".to_string(),
        ));
    }

    let mut counts = ProbMap::new();
    for _ in 0..num_simulations {
        let successes = simulated_num_successes(
            combatant.num_dice,
            combatant.dice_stat,
            combatant.num_rerolls,
            rng,
        );
        counts.add(i64::from(successes), 1.0);
    }
    counts.normalize(f64::from(num_simulations))?;

    tracing::debug!(
        dice = combatant.num_dice,
        stat = combatant.dice_stat,
        rerolls = combatant.num_rerolls,
        simulations = num_simulations,
        outcomes = counts.len(),
        mean = counts.mean(),
        "success distribution built"
    );
    Ok(counts)
}
