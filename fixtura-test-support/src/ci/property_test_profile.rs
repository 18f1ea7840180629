//! Property-test run profile shared by every fixtura suite.
//!
//! Case counts and forking are read from the environment so CI can widen or
//! narrow property runs without touching the suites themselves.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of proptest cases.
pub const CASES_ENV_KEY: &str = "FIXTURA_PBT_CASES";
/// Environment variable toggling forked proptest execution.
pub const FORK_ENV_KEY: &str = "FIXTURA_PBT_FORK";

/// Reasons an override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("expected an unsigned integer, got `{0}`")]
    NotANumber(String),
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected true/false, yes/no, on/off or 1/0, got `{0}`")]
    NotABool(String),
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment, falling back to the
    /// supplied defaults for missing or malformed overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixtura_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile using `lookup` in place of the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixtura_test_support::ci::property_test_profile::{
    ///     CASES_ENV_KEY, ProptestRunProfile,
    /// };
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == CASES_ENV_KEY).then(|| "500".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 500);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: resolve(CASES_ENV_KEY, &lookup, default_cases, parse_cases),
            fork: resolve(FORK_ENV_KEY, &lookup, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T, F, P>(key: &'static str, lookup: &F, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, OverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %error,
            "ignoring property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber(trimmed.to_owned())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(OverrideError::NotABool(other.to_owned())),
    }
}
