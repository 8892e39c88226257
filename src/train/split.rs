//! Stratified holdout splitter

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Train/validation row indices, each sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub validation: Vec<usize>,
}

/// Single stratified shuffle split
#[derive(Clone, Debug)]
pub struct StratifiedSplit {
    test_fraction: f64,
    seed: u64,
}

impl Default for StratifiedSplit {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl StratifiedSplit {
    /// Create a splitter holding out `test_fraction` of the rows
    pub fn new(test_fraction: f64) -> Self {
        Self {
            test_fraction,
            seed: 42,
        }
    }

    /// Set random seed for shuffling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn test_fraction(&self) -> f64 {
        self.test_fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Partition row indices so each class keeps its share in both subsets.
    ///
    /// The holdout takes `ceil(test_fraction * n)` rows, apportioned to classes
    /// by largest remainder. A class always keeps at least one training row.
    pub fn split(&self, labels: &[i64]) -> SplitIndices {
        let n = labels.len();
        let mut by_class: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (i, &label) in labels.iter().enumerate() {
            by_class.entry(label).or_default().push(i);
        }

        let n_test = ((self.test_fraction * n as f64).ceil() as usize).min(n);
        let quotas = apportion(&by_class, n, n_test);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut train = Vec::with_capacity(n - n_test);
        let mut validation = Vec::with_capacity(n_test);
        for (mut rows, quota) in by_class.into_values().zip(quotas) {
            rows.shuffle(&mut rng);
            validation.extend_from_slice(&rows[..quota]);
            train.extend_from_slice(&rows[quota..]);
        }

        train.sort_unstable();
        validation.sort_unstable();
        SplitIndices { train, validation }
    }
}

/// Per-class holdout counts summing to at most `n_test`
fn apportion(by_class: &BTreeMap<i64, Vec<usize>>, n: usize, n_test: usize) -> Vec<usize> {
    if n == 0 {
        return vec![0; by_class.len()];
    }

    let caps: Vec<usize> = by_class.values().map(|r| r.len() - 1).collect();
    let shares: Vec<f64> = by_class
        .values()
        .map(|r| n_test as f64 * r.len() as f64 / n as f64)
        .collect();
    let mut quotas: Vec<usize> = shares
        .iter()
        .zip(&caps)
        .map(|(s, &cap)| (s.floor() as usize).min(cap))
        .collect();

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = shares[a] - shares[a].floor();
        let fb = shares[b] - shares[b].floor();
        fb.total_cmp(&fa)
    });

    let mut remaining = n_test - quotas.iter().sum::<usize>();
    while remaining > 0 {
        let mut progressed = false;
        for &c in &order {
            if remaining == 0 {
                break;
            }
            if quotas[c] < caps[c] {
                quotas[c] += 1;
                remaining -= 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
    quotas
}
