//! Fixed-size integer collections and element selection.

use rand::RngCore;

use crate::{
    alloc::{set_for, vec_for},
    error::{FixtureError, Result},
    retry::RetryBudget,
    rng::RandomSource,
    scalar::{checked_unsigned_span, sample_in_range},
};

/// Returns `size` distinct integers drawn from `[min, max)`.
///
/// Values are collected by rejection sampling: each draw is kept only when it
/// has not been seen before. The order of the result is the order of
/// acceptance.
///
/// # Errors
/// Returns [`FixtureError::InvalidRange`] for an invalid range,
/// [`FixtureError::RangeExhausted`] when `size > max - min`,
/// [`FixtureError::AllocationFailed`] when `size` values cannot be held in
/// memory, and [`FixtureError::RetryBudgetExhausted`] when `budget` runs out
/// first.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, RetryBudget, collection::unique_ints};
///
/// let mut source = RandomSource::seeded(5);
/// let mut values = unique_ints(&mut source, RetryBudget::default(), 0, 10, 10)
///     .expect("ten values fit in [0, 10)");
/// values.sort_unstable();
/// assert_eq!(values, (0..10).collect::<Vec<_>>());
/// ```
pub fn unique_ints<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    min: i64,
    max: i64,
    size: usize,
) -> Result<Vec<i64>> {
    let available = checked_unsigned_span(min, max)?.get();
    if u64::try_from(size).map_or(true, |requested| requested > available) {
        return Err(FixtureError::RangeExhausted {
            requested: size,
            available,
        });
    }

    let mut tracker = budget.tracker("unique_ints", size);
    let mut seen = set_for(size)?;
    let mut values = vec_for(size)?;
    while values.len() < size {
        tracker.record()?;
        let candidate = sample_in_range(source, min, max)?;
        if seen.insert(candidate) {
            values.push(candidate);
        }
    }
    Ok(values)
}

/// Returns `size` integers drawn independently from `[min, max)`; duplicates
/// are allowed.
///
/// # Errors
/// Returns [`FixtureError::InvalidRange`] for an invalid range.
pub fn repeated_ints<R: RngCore>(
    source: &mut RandomSource<R>,
    min: i64,
    max: i64,
    size: usize,
) -> Result<Vec<i64>> {
    checked_unsigned_span(min, max)?;
    (0..size)
        .map(|_| sample_in_range(source, min, max))
        .collect()
}

/// Returns one element of `items` chosen uniformly.
///
/// # Errors
/// Returns [`FixtureError::EmptyCollection`] when `items` is empty.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, collection::pick_one};
///
/// let mut source = RandomSource::seeded(0);
/// assert_eq!(pick_one(&mut source, &[42]), Ok(42));
/// ```
pub fn pick_one<R: RngCore, T: Clone>(source: &mut RandomSource<R>, items: &[T]) -> Result<T> {
    source
        .index(items.len())
        .and_then(|index| items.get(index))
        .cloned()
        .ok_or(FixtureError::EmptyCollection)
}

/// Returns `size` elements of `items` drawn with replacement.
///
/// # Errors
/// Returns [`FixtureError::EmptyCollection`] when `items` is empty, even when
/// `size` is zero.
pub fn pick_many<R: RngCore, T: Clone>(
    source: &mut RandomSource<R>,
    size: usize,
    items: &[T],
) -> Result<Vec<T>> {
    if items.is_empty() {
        return Err(FixtureError::EmptyCollection);
    }
    (0..size).map(|_| pick_one(source, items)).collect()
}
