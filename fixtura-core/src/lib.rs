//! Fixtura core library.
//!
//! Constrained random fixtures for data-structure and algorithm test suites:
//! bounded integers, collections with or without repetition, lowercase
//! strings, and graphs built under edge-count limits. A union-find with path
//! compression and union by rank is exported both as a test subject and as
//! the helper behind acyclic graph generation.
//!
//! Every sampler takes an explicit [`RandomSource`], so a seeded source gives
//! reproducible fixtures. [`Generator`] bundles a source with a
//! [`GeneratorConfig`] and implements the [`DataGenerator`] and
//! [`GraphGenerator`] capability traits.
//!
//! Rejection-sampling loops (unique values, unique strings, graph edges) are
//! capped by a [`RetryBudget`]; an exhausted budget is reported as
//! [`FixtureError::RetryBudgetExhausted`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alloc;
pub mod collection;
mod config;
mod error;
mod generator;
pub mod graph;
mod retry;
mod rng;
pub mod scalar;
pub mod strings;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    config::{GeneratorBuilder, GeneratorConfig},
    error::{FixtureError, FixtureErrorCode, Result},
    generator::{DataGenerator, Generator, GraphGenerator},
    graph::{Edge, Graph, GraphKind, WeightRange},
    retry::{DEFAULT_MIN_ATTEMPTS, DEFAULT_RETRY_MULTIPLIER, RetryBudget},
    rng::{RandomSource, SharedRandomSource},
    union_find::{UnionFind, UnionFindError, UnionFindErrorCode},
};
