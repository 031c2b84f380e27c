//! Dice pool rolling with a single reroll generation.

use rand::Rng;

use super::roll::score_chain;
use super::{PIP_HI, PIP_LO, Tally};

/// Roll a pool of `num_dice` exploding dice and return the number of
/// successes.
///
/// Up to `num_rerolls` failures are then rerolled once. Rerolled dice still
/// explode, but their own failures are never rerolled again. With
/// `num_rerolls == 0` no extra faces are drawn.
pub fn simulated_num_successes<R: Rng + ?Sized>(
    num_dice: u32,
    dice_stat: u32,
    num_rerolls: u32,
    rng: &mut R,
) -> u32 {
    successes_from_faces(num_dice, dice_stat, num_rerolls, || {
        rng.random_range(PIP_LO..=PIP_HI)
    })
}

pub(crate) fn successes_from_faces(
    num_dice: u32,
    dice_stat: u32,
    num_rerolls: u32,
    mut draw: impl FnMut() -> u32,
) -> u32 {
    let first: Tally = (0..num_dice).map(|_| score_chain(dice_stat, &mut draw)).sum();
    if num_rerolls == 0 {
        return first.successes;
    }

    let rerolled: Tally = (0..num_rerolls.min(first.failures))
        .map(|_| score_chain(dice_stat, &mut draw))
        .sum();
    first.successes + rerolled.successes
}
