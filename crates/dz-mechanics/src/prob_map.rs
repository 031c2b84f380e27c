//! Sparse probability maps keyed by integer outcomes.
//!
//! A [`ProbMap`] accumulates mass for outcomes such as success counts or
//! signed damage values. Raw counts are added first and the map is then
//! normalized into probabilities with [`ProbMap::normalize`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A mapping from integer outcome to accumulated probability mass.
///
/// Keys iterate in ascending order. Outcomes that were never touched have
/// an implicit mass of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbMap {
    masses: BTreeMap<i64, f64>,
}

impl ProbMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            masses: BTreeMap::new(),
        }
    }

    /// Create a map holding all of its mass on a single outcome.
    pub fn certain(key: i64) -> Self {
        let mut map = Self::new();
        map.add(key, 1.0);
        map
    }

    /// Add `amount` to the mass stored at `key`, starting from zero if absent.
    pub fn add(&mut self, key: i64, amount: f64) {
        *self.masses.entry(key).or_insert(0.0) += amount;
    }

    /// Divide every mass by `divisor` in place.
    pub fn normalize(&mut self, divisor: f64) -> MechResult<()> {
        if divisor == 0.0 || !divisor.is_finite() {
            return Err(MechError::InvalidDivisor(divisor));
        }
        for mass in self.masses.values_mut() {
            *mass /= divisor;
        }
        Ok(())
    }

    /// The mass at `key`, or 0.0 if the outcome never occurred.
    pub fn get(&self, key: i64) -> f64 {
        self.masses.get(&key).copied().unwrap_or(0.0)
    }

    /// Returns true if `key` has an entry (even one with zero mass).
    pub fn contains(&self, key: i64) -> bool {
        self.masses.contains_key(&key)
    }

    /// Sum of all masses. 1.0 for a normalized map, up to rounding.
    pub fn total_mass(&self) -> f64 {
        self.masses.values().sum()
    }

    /// Expected outcome, assuming the map is normalized.
    pub fn mean(&self) -> f64 {
        self.masses.iter().map(|(&k, &p)| k as f64 * p).sum()
    }

    /// Probability of an outcome greater than or equal to `threshold`.
    pub fn prob_at_least(&self, threshold: i64) -> f64 {
        self.masses.range(threshold..).map(|(_, &p)| p).sum()
    }

    /// For each outcome in ascending order, the probability of an outcome at
    /// or above it.
    pub fn cumulative_at_least(&self) -> Vec<(i64, f64)> {
        let mut running = 0.0;
        let mut tail: Vec<(i64, f64)> = self
            .masses
            .iter()
            .rev()
            .map(|(&k, &p)| {
                running += p;
                (k, running)
            })
            .collect();
        tail.reverse();
        tail
    }

    /// Smallest outcome with an entry.
    pub fn min_key(&self) -> Option<i64> {
        self.masses.keys().next().copied()
    }

    /// Largest outcome with an entry.
    pub fn max_key(&self) -> Option<i64> {
        self.masses.keys().next_back().copied()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Returns true if no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Iterate `(outcome, mass)` pairs in ascending outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.masses.iter().map(|(&k, &p)| (k, p))
    }
}

impl FromIterator<(i64, f64)> for ProbMap {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, amount) in iter {
            map.add(key, amount);
        }
        map
    }
}

impl std::fmt::Display for ProbMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self.iter().map(|(k, p)| format!("{k}: {p:.4}")).collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
