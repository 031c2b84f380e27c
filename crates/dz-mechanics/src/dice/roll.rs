//! Single exploding die.

use rand::Rng;

use super::{MAX_EXPLOSIONS, PIP_HI, PIP_LO, Tally};

/// Roll one exploding d8 against `dice_stat`.
///
/// Each face is scored as a success or failure. A natural 8 draws another
/// face which is scored as an extra outcome, so one die can contribute
/// several successes (or a success followed by a failure).
pub fn roll_exploding<R: Rng + ?Sized>(dice_stat: u32, rng: &mut R) -> Tally {
    score_chain(dice_stat, || rng.random_range(PIP_LO..=PIP_HI))
}

/// Score an explosion chain using faces pulled from `draw`.
///
/// Stops at the first non-maximal face or after [`MAX_EXPLOSIONS`] draws.
pub(crate) fn score_chain(dice_stat: u32, mut draw: impl FnMut() -> u32) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..MAX_EXPLOSIONS {
        let face = draw();
        tally += if face >= dice_stat {
            Tally::success()
        } else {
            Tally::failure()
        };
        if face != PIP_HI {
            return tally;
        }
    }
    tracing::trace!(dice_stat, draws = MAX_EXPLOSIONS, "explosion chain capped");
    tally
}

#[cfg(test)]
pub(crate) fn scripted(faces: &[u32]) -> impl FnMut() -> u32 + '_ {
    let mut iter = faces.iter().copied();
    move || iter.next().expect("scripted faces exhausted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn plain_success() {
        assert_eq!(score_chain(5, scripted(&[6])), Tally::new(1, 0));
    }

    #[test]
    fn plain_failure() {
        assert_eq!(score_chain(5, scripted(&[4])), Tally::new(0, 1));
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(score_chain(5, scripted(&[5])), Tally::new(1, 0));
    }

    #[test]
    fn max_face_explodes() {
        // 8 succeeds and explodes, 8 again, then a 3 fails
        assert_eq!(score_chain(5, scripted(&[8, 8, 3])), Tally::new(2, 1));
    }

    #[test]
    fn explosion_can_add_failure_only() {
        // Stat 8: the exploding 8 succeeds, the follow-up 7 fails
        assert_eq!(score_chain(8, scripted(&[8, 7])), Tally::new(1, 1));
    }

    #[test]
    fn chain_is_capped() {
        let mut draws = 0;
        let tally = score_chain(1, || {
            draws += 1;
            PIP_HI
        });
        assert_eq!(draws, MAX_EXPLOSIONS);
        assert_eq!(tally, Tally::new(MAX_EXPLOSIONS, 0));
    }

    #[test]
    fn stat_one_always_succeeds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let tally = roll_exploding(1, &mut rng);
            assert_eq!(tally.failures, 0);
            assert!(tally.successes >= 1);
        }
    }

    #[test]
    fn every_roll_scores_at_least_once() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(roll_exploding(5, &mut rng).outcomes() >= 1);
        }
    }

    #[test]
    fn explosion_rate_near_one_eighth() {
        let mut rng = StdRng::seed_from_u64(3);
        let trials = 40_000;
        let extra: u32 = (0..trials)
            .map(|_| roll_exploding(5, &mut rng).outcomes() - 1)
            .sum();
        // Expected extra outcomes per die: 1/8 + 1/64 + ... = 1/7
        let rate = f64::from(extra) / f64::from(trials);
        assert!((rate - 1.0 / 7.0).abs() < 0.01, "rate {rate}");
    }

    #[test]
    fn deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(roll_exploding(4, &mut a), roll_exploding(4, &mut b));
        }
    }
}
