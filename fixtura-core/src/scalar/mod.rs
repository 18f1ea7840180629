//! Bounded integer sampling.
//!
//! [`sample_in_range`] covers non-negative half-open ranges.
//! [`sample_signed_range`] accepts negative bounds by splitting the domain
//! into three sign partitions.

use std::num::NonZeroU64;

use rand::RngCore;

use crate::{
    error::{FixtureError, Result},
    rng::RandomSource,
};

/// Sign partition of a valid signed range `[min, max)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SignPartition {
    /// `max <= 0`: every value is negative.
    NegativeOnly,
    /// `min < 0 < max`: the range spans zero.
    Straddling,
    /// `min >= 0`: every value is non-negative.
    NonNegative,
}

impl SignPartition {
    /// Classifies `[min, max)`, returning `None` for empty ranges.
    pub(crate) const fn classify(min: i64, max: i64) -> Option<Self> {
        if min >= max {
            return None;
        }
        if min >= 0 {
            Some(Self::NonNegative)
        } else if max <= 0 {
            Some(Self::NegativeOnly)
        } else {
            Some(Self::Straddling)
        }
    }
}

/// Width of `[min, max)` as a non-zero draw bound.
fn span(min: i64, max: i64) -> Option<NonZeroU64> {
    NonZeroU64::new(max.abs_diff(min))
}

/// Validates a non-negative half-open range and returns its width.
pub(crate) fn checked_unsigned_span(min: i64, max: i64) -> Result<NonZeroU64> {
    if min < 0 || max < 0 || min >= max {
        return Err(FixtureError::InvalidRange { min, max });
    }
    span(min, max).ok_or(FixtureError::InvalidRange { min, max })
}

/// Maps a draw in `[0, width)` onto `[min, min + width)`.
fn offset_from(min: i64, max: i64, offset: u64) -> Result<i64> {
    let value = i128::from(min) + i128::from(offset);
    i64::try_from(value).map_err(|_| FixtureError::UnreachableCase { min, max })
}

/// Returns a value drawn uniformly from `[min, max)`.
///
/// # Errors
/// Returns [`FixtureError::InvalidRange`] when `min < 0`, `max < 0` or
/// `min >= max`.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, scalar::sample_in_range};
///
/// let mut source = RandomSource::seeded(1);
/// let value = sample_in_range(&mut source, 3, 9).expect("valid range");
/// assert!((3..9).contains(&value));
/// ```
pub fn sample_in_range<R: RngCore>(
    source: &mut RandomSource<R>,
    min: i64,
    max: i64,
) -> Result<i64> {
    let width = checked_unsigned_span(min, max)?;
    offset_from(min, max, source.below(width))
}

/// Returns a value drawn uniformly from `[min, max)` where `min` may be
/// negative.
///
/// # Errors
/// Returns [`FixtureError::InvalidRange`] when `min >= max`.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, scalar::sample_signed_range};
///
/// let mut source = RandomSource::seeded(2);
/// let value = sample_signed_range(&mut source, -4, 4).expect("valid range");
/// assert!((-4..4).contains(&value));
/// ```
pub fn sample_signed_range<R: RngCore>(
    source: &mut RandomSource<R>,
    min: i64,
    max: i64,
) -> Result<i64> {
    if min >= max {
        return Err(FixtureError::InvalidRange { min, max });
    }
    let partition =
        SignPartition::classify(min, max).ok_or(FixtureError::UnreachableCase { min, max })?;
    match partition {
        SignPartition::NegativeOnly => {
            // Magnitudes run over (-max, -min], so negation lands in [min, max).
            let width = span(min, max).ok_or(FixtureError::UnreachableCase { min, max })?;
            let magnitude = i128::from(max).abs() + 1 + i128::from(source.below(width));
            i64::try_from(-magnitude).map_err(|_| FixtureError::UnreachableCase { min, max })
        }
        SignPartition::Straddling => {
            let width = span(min, max).ok_or(FixtureError::UnreachableCase { min, max })?;
            offset_from(min, max, source.below(width))
        }
        SignPartition::NonNegative => sample_in_range(source, min, max),
    }
}
