//! Multi-round extension by self-convolution.

use crate::error::{MechError, MechResult};
use crate::prob_map::ProbMap;

/// Distribution of the sum of two independent outcomes.
pub fn convolve(a: &ProbMap, b: &ProbMap) -> ProbMap {
    let mut out = ProbMap::new();
    for (ka, pa) in a.iter() {
        for (kb, pb) in b.iter() {
            out.add(ka + kb, pa * pb);
        }
    }
    out
}

/// Distribution of total damage over `rounds` independent rounds that each
/// follow `single_round`.
///
/// Uses binary exponentiation, so only O(log rounds) convolutions are
/// performed. One round returns the input unchanged.
pub fn calc_multi_round_damage(single_round: &ProbMap, rounds: u32) -> MechResult<ProbMap> {
    if rounds == 0 {
        return Err(MechError::InvalidOptions(
            "rounds must be at least 1".to_string(),
        ));
    }
    if rounds == 1 {
        return Ok(single_round.clone());
    }

    let mut total = ProbMap::certain(0);
    let mut power = single_round.clone();
    let mut remaining = rounds;
    loop {
        if remaining & 1 == 1 {
            total = convolve(&total, &power);
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        power = convolve(&power, &power);
    }

    tracing::debug!(
        rounds,
        outcomes = total.len(),
        mass = total.total_mass(),
        "multi-round damage distribution built"
    );
    Ok(total)
}
