//! Binomial probability mass function.

/// Probability of exactly `k` successes in `n` independent trials that each
/// succeed with probability `p`.
///
/// Works in log space: the coefficient is summed as logarithms over
/// `min(k, n - k)` steps, so large `n` neither goes through a factorial nor
/// overflows `f64`. Returns 0.0 when `k > n`.
pub fn binomial_pmf(n: u32, k: u32, p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p), "probability {p} outside [0, 1]");
    if k > n {
        return 0.0;
    }
    // ln(0) is -inf, so the certain cases are answered exactly
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln_coefficient: f64 = (0..k.min(n - k))
        .map(|i| (f64::from(n - i) / f64::from(i + 1)).ln())
        .sum();
    (ln_coefficient + f64::from(k) * p.ln() + f64::from(n - k) * (1.0 - p).ln()).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_trial() {
        assert!((binomial_pmf(1, 1, 0.375) - 0.375).abs() < 1e-12);
        assert!((binomial_pmf(1, 0, 0.375) - 0.625).abs() < 1e-12);
    }

    #[test]
    fn zero_successes_is_all_failures() {
        for n in 0..20 {
            let expected = 0.625_f64.powi(n as i32);
            assert!((binomial_pmf(n, 0, 0.375) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn known_values() {
        // C(4, 2) * 0.5^4 = 6 / 16
        assert!((binomial_pmf(4, 2, 0.5) - 0.375).abs() < 1e-12);
        // C(10, 3) = 120
        let expected = 120.0 * 0.2_f64.powi(3) * 0.8_f64.powi(7);
        assert!((binomial_pmf(10, 3, 0.2) - expected).abs() < 1e-12);
    }

    #[test]
    fn degenerate_probabilities() {
        assert_eq!(binomial_pmf(5, 0, 0.0), 1.0);
        assert_eq!(binomial_pmf(5, 1, 0.0), 0.0);
        assert_eq!(binomial_pmf(5, 5, 1.0), 1.0);
        assert_eq!(binomial_pmf(5, 4, 1.0), 0.0);
        assert_eq!(binomial_pmf(0, 0, 0.375), 1.0);
    }

    #[test]
    fn k_above_n_is_impossible() {
        assert_eq!(binomial_pmf(3, 4, 0.5), 0.0);
    }

    #[test]
    fn large_n_stays_finite() {
        let p = binomial_pmf(400, 150, 0.375);
        assert!(p.is_finite());
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn thousands_of_trials_still_sum_to_one() {
        // C(2000, 1000) is far beyond f64::MAX
        let total: f64 = (0..=2000).map(|k| binomial_pmf(2000, k, 0.375)).sum();
        assert!((total - 1.0).abs() < 1e-9, "total {total}");
        assert!((0..=2000).all(|k| binomial_pmf(2000, k, 0.375).is_finite()));
    }

    proptest! {
        #[test]
        fn masses_sum_to_one(n in 0u32..80, p in 0.0f64..=1.0) {
            let total: f64 = (0..=n).map(|k| binomial_pmf(n, k, p)).sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "n={} p={} total={}", n, p, total);
        }

        #[test]
        fn symmetric_in_success_and_failure(n in 0u32..60, k_seed in 0u32..60, p in 0.0f64..=1.0) {
            let k = k_seed.min(n);
            let lhs = binomial_pmf(n, k, p);
            let rhs = binomial_pmf(n, n - k, 1.0 - p);
            prop_assert!((lhs - rhs).abs() < 1e-12);
        }
    }
}
