//! Attempt caps for rejection-sampling loops.
//!
//! Every loop that keeps drawing until enough distinct values are accepted
//! consults a [`RetryBudget`]. Pathological requests (a target count barely
//! below the domain size) surface as
//! [`FixtureError::RetryBudgetExhausted`] instead of spinning forever.

use tracing::warn;

use crate::error::{FixtureError, Result};

/// Default number of draws allowed per requested value.
pub const DEFAULT_RETRY_MULTIPLIER: usize = 64;
/// Default floor on the number of draws for any request.
pub const DEFAULT_MIN_ATTEMPTS: usize = 1_024;

/// Cap on the number of draws a rejection-sampling loop may perform.
///
/// A request for `n` accepted values may draw
/// `max(min_attempts, n * multiplier)` times.
///
/// # Examples
/// ```
/// use fixtura_core::RetryBudget;
///
/// let budget = RetryBudget::default();
/// assert_eq!(budget.limit_for(10), 1_024);
/// assert_eq!(budget.limit_for(100), 6_400);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryBudget {
    multiplier: usize,
    min_attempts: usize,
}

impl RetryBudget {
    /// Creates a budget from explicit parameters.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidArgument`] when either parameter is zero.
    pub const fn new(multiplier: usize, min_attempts: usize) -> Result<Self> {
        if multiplier == 0 {
            return Err(FixtureError::InvalidArgument {
                parameter: "retry_multiplier",
                reason: "must be greater than zero",
            });
        }
        if min_attempts == 0 {
            return Err(FixtureError::InvalidArgument {
                parameter: "min_attempts",
                reason: "must be greater than zero",
            });
        }
        Ok(Self {
            multiplier,
            min_attempts,
        })
    }

    /// Returns the number of draws allowed per requested value.
    #[must_use]
    pub const fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Returns the floor on the number of draws.
    #[must_use]
    pub const fn min_attempts(&self) -> usize {
        self.min_attempts
    }

    /// Returns the maximum number of draws for a request of `requested`
    /// accepted values.
    #[must_use]
    pub const fn limit_for(&self, requested: usize) -> usize {
        let scaled = requested.saturating_mul(self.multiplier);
        if scaled > self.min_attempts {
            scaled
        } else {
            self.min_attempts
        }
    }

    pub(crate) fn tracker(&self, operation: &'static str, requested: usize) -> AttemptTracker {
        AttemptTracker {
            operation,
            limit: self.limit_for(requested),
            attempts: 0,
        }
    }
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_RETRY_MULTIPLIER,
            min_attempts: DEFAULT_MIN_ATTEMPTS,
        }
    }
}

/// Counts draws for one rejection-sampling loop.
#[derive(Debug)]
pub(crate) struct AttemptTracker {
    operation: &'static str,
    limit: usize,
    attempts: usize,
}

impl AttemptTracker {
    /// Records one draw, failing once the limit has been reached.
    pub(crate) fn record(&mut self) -> Result<()> {
        if self.attempts >= self.limit {
            warn!(
                operation = self.operation,
                attempts = self.attempts,
                "retry budget exhausted"
            );
            return Err(FixtureError::RetryBudgetExhausted {
                operation: self.operation,
                attempts: self.attempts,
            });
        }
        self.attempts += 1;
        Ok(())
    }

    /// Number of draws recorded so far.
    pub(crate) const fn attempts(&self) -> usize {
        self.attempts
    }
}
