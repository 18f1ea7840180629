//! Random lowercase strings over a truncated alphabet.

use std::num::NonZeroU64;

use rand::RngCore;

use crate::{
    alloc::{set_for, string_for, vec_for},
    error::{FixtureError, Result},
    retry::RetryBudget,
    rng::RandomSource,
};

/// Number of letters in the lowercase ASCII alphabet.
pub const MAX_ALPHABET_SIZE: usize = 26;

/// Validated `(length, alphabet_size)` pair.
#[derive(Clone, Copy, Debug)]
struct StringShape {
    length: usize,
    alphabet: NonZeroU64,
}

impl StringShape {
    fn new(length: usize, alphabet_size: usize) -> Result<Self> {
        if length == 0 {
            return Err(FixtureError::InvalidArgument {
                parameter: "length",
                reason: "must be greater than zero",
            });
        }
        if alphabet_size > MAX_ALPHABET_SIZE {
            return Err(FixtureError::InvalidArgument {
                parameter: "alphabet_size",
                reason: "must not exceed 26",
            });
        }
        let alphabet = u64::try_from(alphabet_size)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(FixtureError::InvalidArgument {
                parameter: "alphabet_size",
                reason: "must be greater than zero",
            })?;
        Ok(Self { length, alphabet })
    }

    /// Number of distinct strings of this shape, saturating at `u64::MAX`.
    fn domain_size(self) -> u64 {
        let exponent = u32::try_from(self.length).unwrap_or(u32::MAX);
        self.alphabet.get().saturating_pow(exponent)
    }

    fn draw<R: RngCore>(self, source: &mut RandomSource<R>) -> Result<String> {
        let mut word = string_for(self.length)?;
        for _ in 0..self.length {
            word.push(letter(source.below(self.alphabet))?);
        }
        Ok(word)
    }
}

/// Maps a draw in `[0, 26)` to a lowercase letter.
fn letter(offset: u64) -> Result<char> {
    u8::try_from(offset)
        .ok()
        .filter(|&index| usize::from(index) < MAX_ALPHABET_SIZE)
        .map(|index| char::from(b'a' + index))
        .ok_or(FixtureError::UnreachableCase { min: 0, max: 26 })
}

/// Returns a string of `length` letters drawn from the first
/// `alphabet_size` lowercase letters.
///
/// # Errors
/// Returns [`FixtureError::InvalidArgument`] when `length` or
/// `alphabet_size` is zero, or when `alphabet_size` exceeds 26, and
/// [`FixtureError::AllocationFailed`] when `length` bytes cannot be reserved.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, strings::random_string};
///
/// let mut source = RandomSource::seeded(3);
/// let word = random_string(&mut source, 6, 3).expect("valid shape");
/// assert_eq!(word.len(), 6);
/// assert!(word.chars().all(|c| ('a'..='c').contains(&c)));
/// ```
pub fn random_string<R: RngCore>(
    source: &mut RandomSource<R>,
    length: usize,
    alphabet_size: usize,
) -> Result<String> {
    StringShape::new(length, alphabet_size)?.draw(source)
}

/// Returns `count` distinct strings of the given shape.
///
/// # Errors
/// Returns [`FixtureError::InvalidArgument`] for an invalid shape,
/// [`FixtureError::RangeExhausted`] when fewer than `count` distinct strings
/// exist, [`FixtureError::AllocationFailed`] when the strings cannot be held
/// in memory, and [`FixtureError::RetryBudgetExhausted`] when `budget` runs
/// out.
pub fn unique_strings<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    length: usize,
    alphabet_size: usize,
    count: usize,
) -> Result<Vec<String>> {
    let shape = StringShape::new(length, alphabet_size)?;
    let available = shape.domain_size();
    if u64::try_from(count).map_or(true, |requested| requested > available) {
        return Err(FixtureError::RangeExhausted {
            requested: count,
            available,
        });
    }

    let mut tracker = budget.tracker("unique_strings", count);
    let mut seen = set_for(count)?;
    let mut words = vec_for(count)?;
    while words.len() < count {
        tracker.record()?;
        let candidate = shape.draw(source)?;
        if seen.insert(candidate.clone()) {
            words.push(candidate);
        }
    }
    Ok(words)
}
