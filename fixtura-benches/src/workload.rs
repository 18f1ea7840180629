//! Deterministic union operations fed to the union-find benchmarks.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Returns `count` index pairs drawn uniformly from `[0, elements)`.
///
/// Returns an empty list when `elements` is zero.
#[must_use]
pub fn random_pairs(elements: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    if elements == 0 {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..elements), rng.gen_range(0..elements)))
        .collect()
}

/// Returns the pairs `(i, i + 1)` that link every element into one chain.
///
/// Unioned in order, these build the deepest trees union-by-rank allows
/// before path compression.
#[must_use]
pub fn chain_pairs(elements: usize) -> Vec<(usize, usize)> {
    (1..elements).map(|index| (index - 1, index)).collect()
}
