//! Builder utilities for configuring [`Generator`] instances.
//!
//! Exposes the seed and retry-budget surface validated before a generator is
//! constructed.

use rand::rngs::SmallRng;

use crate::{
    error::Result,
    generator::Generator,
    retry::{DEFAULT_MIN_ATTEMPTS, DEFAULT_RETRY_MULTIPLIER, RetryBudget},
    rng::RandomSource,
};

/// Validated configuration carried by a [`Generator`].
///
/// # Examples
/// ```
/// use fixtura_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.seed(), None);
/// assert_eq!(config.retry_budget().multiplier(), 64);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GeneratorConfig {
    seed: Option<u64>,
    retry_budget: RetryBudget,
}

impl GeneratorConfig {
    /// Returns the seed, or `None` when the source is seeded from entropy.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the cap applied to rejection-sampling loops.
    #[must_use]
    pub const fn retry_budget(&self) -> RetryBudget {
        self.retry_budget
    }
}

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use fixtura_core::{DataGenerator, GeneratorBuilder};
///
/// let mut generator = GeneratorBuilder::new()
///     .with_seed(42)
///     .with_retry_multiplier(16)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.config().seed(), Some(42));
/// let value = generator.int_in_range(0, 10).expect("valid range");
/// assert!((0..10).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    seed: Option<u64>,
    retry_multiplier: usize,
    min_attempts: usize,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            seed: None,
            retry_multiplier: DEFAULT_RETRY_MULTIPLIER,
            min_attempts: DEFAULT_MIN_ATTEMPTS,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator so its output is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the number of draws allowed per requested value.
    #[must_use]
    pub const fn with_retry_multiplier(mut self, multiplier: usize) -> Self {
        self.retry_multiplier = multiplier;
        self
    }

    /// Overrides the floor on draws for any rejection-sampling request.
    #[must_use]
    pub const fn with_min_attempts(mut self, attempts: usize) -> Self {
        self.min_attempts = attempts;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration without building a generator.
    ///
    /// # Errors
    /// Returns [`crate::FixtureError::InvalidArgument`] when the retry
    /// multiplier or minimum attempts is zero.
    pub fn config(&self) -> Result<GeneratorConfig> {
        let retry_budget = RetryBudget::new(self.retry_multiplier, self.min_attempts)?;
        Ok(GeneratorConfig {
            seed: self.seed,
            retry_budget,
        })
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`crate::FixtureError::InvalidArgument`] when the retry
    /// multiplier or minimum attempts is zero.
    pub fn build(self) -> Result<Generator<SmallRng>> {
        let config = self.config()?;
        let source = config
            .seed
            .map_or_else(RandomSource::from_entropy, RandomSource::seeded);
        Ok(Generator::from_source(source, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::FixtureError;

    #[test]
    fn defaults_are_valid() {
        let builder = GeneratorBuilder::new();
        assert_eq!(builder.seed(), None);
        let config = builder.config().expect("defaults are valid");
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn builder_reports_its_seed() {
        assert_eq!(GeneratorBuilder::new().with_seed(12).seed(), Some(12));
    }

    #[test]
    fn rejects_zero_multiplier() {
        let err = GeneratorBuilder::new()
            .with_retry_multiplier(0)
            .build()
            .expect_err("zero multiplier");
        assert!(matches!(
            err,
            FixtureError::InvalidArgument {
                parameter: "retry_multiplier",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_min_attempts() {
        let err = GeneratorBuilder::new()
            .with_min_attempts(0)
            .config()
            .expect_err("zero attempts");
        assert!(matches!(
            err,
            FixtureError::InvalidArgument {
                parameter: "min_attempts",
                ..
            }
        ));
    }

    #[test]
    fn carries_seed_and_budget() {
        let config = GeneratorBuilder::new()
            .with_seed(7)
            .with_retry_multiplier(3)
            .with_min_attempts(9)
            .config()
            .expect("valid configuration");
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.retry_budget().multiplier(), 3);
        assert_eq!(config.retry_budget().min_attempts(), 9);
    }
}
