//! Random source wrappers used by every sampler.
//!
//! [`RandomSource`] owns a uniform bit generator and hands out bounded draws.
//! [`SharedRandomSource`] serialises draws behind a mutex for callers that
//! share one generator across threads.

use std::{
    num::NonZeroU64,
    sync::{Mutex, MutexGuard, PoisonError},
};

use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};

/// Uniform random source supplying bounded integer draws.
///
/// The default generator is [`SmallRng`]; any [`RngCore`] can be injected so
/// tests can assert exact output sequences.
///
/// # Examples
/// ```
/// use std::num::NonZeroU64;
/// use fixtura_core::RandomSource;
///
/// let mut source = RandomSource::seeded(7);
/// let bound = NonZeroU64::new(10).expect("non-zero");
/// assert!(source.below(bound) < 10);
/// ```
#[derive(Clone, Debug)]
pub struct RandomSource<R = SmallRng> {
    rng: R,
}

impl RandomSource<SmallRng> {
    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Creates a deterministic source from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a value uniformly from `[0, bound)`.
    pub fn below(&mut self, bound: NonZeroU64) -> u64 {
        self.rng.gen_range(0..bound.get())
    }

    /// Draws an index uniformly from `[0, len)`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }

    /// Shuffles `items` in place with a Fisher-Yates pass.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }

    /// Consumes the wrapper and returns the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Default for RandomSource<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// A [`RandomSource`] guarded by a mutex so concurrent callers draw one at a
/// time.
///
/// A poisoned lock is recovered rather than reported: a panic in another
/// caller cannot leave the generator in an invalid state.
///
/// # Examples
/// ```
/// use fixtura_core::{SharedRandomSource, scalar::sample_in_range};
///
/// let shared = SharedRandomSource::seeded(11);
/// let mut source = shared.lock();
/// let value = sample_in_range(&mut *source, 0, 5).expect("valid range");
/// assert!((0..5).contains(&value));
/// ```
#[derive(Debug)]
pub struct SharedRandomSource<R = SmallRng> {
    inner: Mutex<RandomSource<R>>,
}

impl SharedRandomSource<SmallRng> {
    /// Creates a shared source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RandomSource::from_entropy())
    }

    /// Creates a deterministic shared source from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSource::seeded(seed))
    }
}

impl<R: RngCore> SharedRandomSource<R> {
    /// Wraps `source` in a mutex.
    #[must_use]
    pub const fn new(source: RandomSource<R>) -> Self {
        Self {
            inner: Mutex::new(source),
        }
    }

    /// Locks the source for a sequence of draws.
    ///
    /// Hold the guard for the duration of one sampling call so its draws are
    /// not interleaved with another caller's.
    pub fn lock(&self) -> MutexGuard<'_, RandomSource<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Draws a single value uniformly from `[0, bound)`.
    pub fn below(&self, bound: NonZeroU64) -> u64 {
        self.lock().below(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{sync::Arc, thread};

    use rstest::rstest;

    fn bound(value: u64) -> NonZeroU64 {
        NonZeroU64::new(value).expect("test bounds are non-zero")
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(97)]
    #[case(u64::MAX)]
    fn below_stays_under_bound(#[case] limit: u64) {
        let mut source = RandomSource::seeded(3);
        for _ in 0..256 {
            assert!(source.below(bound(limit)) < limit);
        }
    }

    #[test]
    fn seeded_sources_repeat_their_sequence() {
        let mut left = RandomSource::seeded(42);
        let mut right = RandomSource::seeded(42);
        let left_draws: Vec<u64> = (0..32).map(|_| left.below(bound(1_000))).collect();
        let right_draws: Vec<u64> = (0..32).map(|_| right.below(bound(1_000))).collect();
        assert_eq!(left_draws, right_draws);
    }

    #[test]
    fn into_inner_returns_the_advanced_generator() {
        let mut source = RandomSource::seeded(8);
        source.below(bound(100));
        let mut resumed = RandomSource::new(source.clone().into_inner());
        assert_eq!(resumed.below(bound(1_000)), source.below(bound(1_000)));
    }

    #[test]
    fn index_rejects_empty_length() {
        let mut source = RandomSource::seeded(1);
        assert_eq!(source.index(0), None);
        assert_eq!(source.index(1), Some(0));
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut source = RandomSource::seeded(5);
        let mut items: Vec<usize> = (0..50).collect();
        source.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shared_source_serves_concurrent_callers() {
        let shared = Arc::new(SharedRandomSource::seeded(9));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&shared);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| source.below(bound(8)))
                        .all(|value| value < 8)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().expect("worker must not panic"));
        }
    }
}
