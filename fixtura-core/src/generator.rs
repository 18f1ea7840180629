//! The two capability traits and their concrete implementation.
//!
//! [`DataGenerator`] covers scalars, collections and strings;
//! [`GraphGenerator`] covers the graph builders. [`Generator`] implements
//! both over an owned [`RandomSource`] and the retry budget from its
//! [`GeneratorConfig`].

use rand::{RngCore, rngs::SmallRng};

use crate::{
    collection, config::GeneratorConfig, error::Result, graph, graph::Graph,
    graph::WeightRange, rng::RandomSource, scalar, strings,
};

/// Scalar, collection and string fixtures.
pub trait DataGenerator {
    /// Draws a value from the non-negative range `[min, max)`.
    ///
    /// # Errors
    /// See [`scalar::sample_in_range`].
    fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64>;

    /// Draws a value from `[min, max)` where `min` may be negative.
    ///
    /// # Errors
    /// See [`scalar::sample_signed_range`].
    fn signed_int_in_range(&mut self, min: i64, max: i64) -> Result<i64>;

    /// Draws `size` distinct values from `[min, max)`.
    ///
    /// # Errors
    /// See [`collection::unique_ints`].
    fn unique_ints(&mut self, min: i64, max: i64, size: usize) -> Result<Vec<i64>>;

    /// Draws `size` values from `[min, max)` with repetition.
    ///
    /// # Errors
    /// See [`collection::repeated_ints`].
    fn repeated_ints(&mut self, min: i64, max: i64, size: usize) -> Result<Vec<i64>>;

    /// Picks one element of `items`.
    ///
    /// # Errors
    /// See [`collection::pick_one`].
    fn pick_one<T: Clone>(&mut self, items: &[T]) -> Result<T>;

    /// Picks `size` elements of `items` with replacement.
    ///
    /// # Errors
    /// See [`collection::pick_many`].
    fn pick_many<T: Clone>(&mut self, size: usize, items: &[T]) -> Result<Vec<T>>;

    /// Builds a random lowercase string.
    ///
    /// # Errors
    /// See [`strings::random_string`].
    fn random_string(&mut self, length: usize, alphabet_size: usize) -> Result<String>;

    /// Builds `count` distinct random lowercase strings.
    ///
    /// # Errors
    /// See [`strings::unique_strings`].
    fn unique_strings(
        &mut self,
        length: usize,
        alphabet_size: usize,
        count: usize,
    ) -> Result<Vec<String>>;
}

/// Graph fixtures.
pub trait GraphGenerator {
    /// Builds a loop-free directed graph.
    ///
    /// # Errors
    /// See [`graph::directed_graph`].
    fn directed_graph(&mut self, vertices: usize, edges: usize) -> Result<Graph>;

    /// Builds a loop-free directed graph with weighted arcs.
    ///
    /// # Errors
    /// See [`graph::weighted_directed_graph`].
    fn weighted_directed_graph(
        &mut self,
        vertices: usize,
        edges: usize,
        weights: WeightRange,
    ) -> Result<Graph>;

    /// Builds a loop-free undirected graph.
    ///
    /// # Errors
    /// See [`graph::undirected_graph`].
    fn undirected_graph(&mut self, vertices: usize, edges: usize) -> Result<Graph>;

    /// Builds a loop-free undirected graph with symmetric weights.
    ///
    /// # Errors
    /// See [`graph::weighted_undirected_graph`].
    fn weighted_undirected_graph(
        &mut self,
        vertices: usize,
        edges: usize,
        weights: WeightRange,
    ) -> Result<Graph>;

    /// Builds a directed acyclic graph.
    ///
    /// # Errors
    /// See [`graph::directed_acyclic_graph`].
    fn directed_acyclic_graph(&mut self, vertices: usize, edges: usize) -> Result<Graph>;

    /// Builds an undirected forest; `edges == vertices - 1` gives a spanning
    /// tree.
    ///
    /// # Errors
    /// See [`graph::random_forest`].
    fn random_forest(&mut self, vertices: usize, edges: usize) -> Result<Graph>;
}

/// Fixture generator owning a random source and its configuration.
///
/// # Examples
/// ```
/// use fixtura_core::{Generator, GraphGenerator};
///
/// let mut generator = Generator::seeded(3);
/// let graph = generator.directed_graph(5, 8).expect("fits");
/// assert_eq!(graph.edge_count(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct Generator<R = SmallRng> {
    source: RandomSource<R>,
    config: GeneratorConfig,
}

impl Generator<SmallRng> {
    /// Creates a generator with default configuration and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_source(RandomSource::from_entropy(), GeneratorConfig::default())
    }

    /// Creates a deterministic generator with default retry budget.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_source(RandomSource::seeded(seed), GeneratorConfig::default())
    }
}

impl Default for Generator<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Generator<R> {
    /// Creates a generator over an injected source.
    #[must_use]
    pub const fn from_source(source: RandomSource<R>, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Gives direct access to the random source.
    pub fn source_mut(&mut self) -> &mut RandomSource<R> {
        &mut self.source
    }
}

impl<R: RngCore> DataGenerator for Generator<R> {
    fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        scalar::sample_in_range(&mut self.source, min, max)
    }

    fn signed_int_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        scalar::sample_signed_range(&mut self.source, min, max)
    }

    fn unique_ints(&mut self, min: i64, max: i64, size: usize) -> Result<Vec<i64>> {
        let budget = self.config.retry_budget();
        collection::unique_ints(&mut self.source, budget, min, max, size)
    }

    fn repeated_ints(&mut self, min: i64, max: i64, size: usize) -> Result<Vec<i64>> {
        collection::repeated_ints(&mut self.source, min, max, size)
    }

    fn pick_one<T: Clone>(&mut self, items: &[T]) -> Result<T> {
        collection::pick_one(&mut self.source, items)
    }

    fn pick_many<T: Clone>(&mut self, size: usize, items: &[T]) -> Result<Vec<T>> {
        collection::pick_many(&mut self.source, size, items)
    }

    fn random_string(&mut self, length: usize, alphabet_size: usize) -> Result<String> {
        strings::random_string(&mut self.source, length, alphabet_size)
    }

    fn unique_strings(
        &mut self,
        length: usize,
        alphabet_size: usize,
        count: usize,
    ) -> Result<Vec<String>> {
        let budget = self.config.retry_budget();
        strings::unique_strings(&mut self.source, budget, length, alphabet_size, count)
    }
}

impl<R: RngCore> GraphGenerator for Generator<R> {
    fn directed_graph(&mut self, vertices: usize, edges: usize) -> Result<Graph> {
        let budget = self.config.retry_budget();
        graph::directed_graph(&mut self.source, budget, vertices, edges)
    }

    fn weighted_directed_graph(
        &mut self,
        vertices: usize,
        edges: usize,
        weights: WeightRange,
    ) -> Result<Graph> {
        let budget = self.config.retry_budget();
        graph::weighted_directed_graph(&mut self.source, budget, vertices, edges, weights)
    }

    fn undirected_graph(&mut self, vertices: usize, edges: usize) -> Result<Graph> {
        let budget = self.config.retry_budget();
        graph::undirected_graph(&mut self.source, budget, vertices, edges)
    }

    fn weighted_undirected_graph(
        &mut self,
        vertices: usize,
        edges: usize,
        weights: WeightRange,
    ) -> Result<Graph> {
        let budget = self.config.retry_budget();
        graph::weighted_undirected_graph(&mut self.source, budget, vertices, edges, weights)
    }

    fn directed_acyclic_graph(&mut self, vertices: usize, edges: usize) -> Result<Graph> {
        let budget = self.config.retry_budget();
        graph::directed_acyclic_graph(&mut self.source, budget, vertices, edges)
    }

    fn random_forest(&mut self, vertices: usize, edges: usize) -> Result<Graph> {
        let budget = self.config.retry_budget();
        graph::random_forest(&mut self.source, budget, vertices, edges)
    }
}
