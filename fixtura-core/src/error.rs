//! Error types for the Fixtura core library.
//!
//! Defines the error enum shared by the samplers and graph builders, its
//! stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::union_find::{UnionFindError, UnionFindErrorCode};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced while generating a fixture.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FixtureError {
    /// A required argument was zero or outside its documented domain.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of the violated constraint.
        reason: &'static str,
    },
    /// The half-open range `[min, max)` was empty or had a negative bound on
    /// the non-negative sampling path.
    #[error("invalid range [{min}, {max})")]
    InvalidRange {
        /// Inclusive lower bound supplied by the caller.
        min: i64,
        /// Exclusive upper bound supplied by the caller.
        max: i64,
    },
    /// More distinct values were requested than the domain can supply.
    #[error("requested {requested} distinct values but only {available} exist")]
    RangeExhausted {
        /// Number of distinct values requested.
        requested: usize,
        /// Number of distinct values the domain holds.
        available: u64,
    },
    /// More edges were requested than a graph on `vertices` vertices can hold.
    #[error("{requested} edges requested but a graph on {vertices} vertices holds at most {maximum}")]
    EdgeBound {
        /// Number of vertices in the requested graph.
        vertices: usize,
        /// Number of edges requested.
        requested: usize,
        /// Maximum number of edges for this graph shape.
        maximum: usize,
    },
    /// A selection was requested from an empty collection.
    #[error("cannot select from an empty collection")]
    EmptyCollection,
    /// A draw from `[min, max)` could not be mapped back into the range.
    #[error("draw from [{min}, {max}) fell outside the range")]
    UnreachableCase {
        /// Inclusive lower bound supplied by the caller.
        min: i64,
        /// Exclusive upper bound supplied by the caller.
        max: i64,
    },
    /// A rejection-sampling loop ran out of attempts before collecting enough
    /// accepted values.
    #[error("{operation} gave up after {attempts} draws")]
    RetryBudgetExhausted {
        /// Name of the sampling operation that gave up.
        operation: &'static str,
        /// Number of draws performed before giving up.
        attempts: usize,
    },
    /// Space for the requested number of elements could not be reserved.
    #[error("cannot reserve space for {requested} elements")]
    AllocationFailed {
        /// Number of elements the fixture needed room for.
        requested: usize,
    },
    /// A union-find operation failed while building a fixture.
    #[error("union-find failed: {error}")]
    UnionFind {
        #[from]
        /// Underlying union-find error.
        error: UnionFindError,
    },
}

define_error_codes! {
    /// Stable codes describing [`FixtureError`] variants.
    enum FixtureErrorCode for FixtureError {
        /// A required argument was zero or outside its documented domain.
        InvalidArgument => InvalidArgument { .. } => "FIXTURE_INVALID_ARGUMENT",
        /// The requested range was empty or had a negative bound.
        InvalidRange => InvalidRange { .. } => "FIXTURE_INVALID_RANGE",
        /// More distinct values were requested than the domain holds.
        RangeExhausted => RangeExhausted { .. } => "FIXTURE_RANGE_EXHAUSTED",
        /// More edges were requested than the graph shape allows.
        EdgeBound => EdgeBound { .. } => "FIXTURE_EDGE_BOUND",
        /// A selection was requested from an empty collection.
        EmptyCollection => EmptyCollection => "FIXTURE_EMPTY_COLLECTION",
        /// A draw could not be mapped back into its range.
        UnreachableCase => UnreachableCase { .. } => "FIXTURE_UNREACHABLE_CASE",
        /// A rejection-sampling loop exhausted its retry budget.
        RetryBudgetExhausted => RetryBudgetExhausted { .. } => "FIXTURE_RETRY_BUDGET_EXHAUSTED",
        /// A caller-sized buffer could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "FIXTURE_ALLOCATION_FAILED",
        /// A union-find operation failed while building a fixture.
        UnionFindFailure => UnionFind { .. } => "FIXTURE_UNION_FIND_FAILURE",
    }
}

impl FixtureError {
    /// Retrieve the inner [`UnionFindErrorCode`] when the error originated in
    /// a [`crate::UnionFind`].
    #[must_use]
    pub const fn union_find_code(&self) -> Option<UnionFindErrorCode> {
        match self {
            Self::UnionFind { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, FixtureError>;
