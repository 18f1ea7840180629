//! Directed graph builders.

use rand::RngCore;
use tracing::{debug, instrument};

use crate::{
    alloc::{set_for, vec_for},
    error::Result,
    retry::RetryBudget,
    rng::RandomSource,
};

use super::{
    Graph, GraphKind, WeightRange, check_shape, draw_pair, max_directed_edges,
    max_undirected_edges,
};

/// Builds a directed graph with `vertices` vertices and `edges` distinct
/// arcs, none of them self-loops.
///
/// # Errors
/// Returns [`crate::FixtureError::InvalidArgument`] when `vertices == 0`,
/// [`crate::FixtureError::EdgeBound`] when `edges > vertices * (vertices - 1)`,
/// [`crate::FixtureError::AllocationFailed`] when the adjacency lists cannot
/// be reserved, and [`crate::FixtureError::RetryBudgetExhausted`] when
/// sampling gives up.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, RetryBudget, graph::directed_graph};
///
/// let mut source = RandomSource::seeded(8);
/// let graph = directed_graph(&mut source, RetryBudget::default(), 4, 12)
///     .expect("12 is the maximum for four vertices");
/// assert!((0..4).all(|v| graph.edges(v).map(<[_]>::len) == Some(3)));
/// ```
#[instrument(name = "graph.directed", level = "debug", skip(source, budget), err)]
pub fn directed_graph<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    vertices: usize,
    edges: usize,
) -> Result<Graph> {
    check_shape(vertices, edges, max_directed_edges(vertices))?;

    let mut graph = Graph::empty(GraphKind::Directed, vertices)?;
    let mut seen = set_for(edges)?;
    let mut tracker = budget.tracker("directed_graph", edges);
    while graph.edge_count() < edges {
        tracker.record()?;
        let (from, to) = draw_pair(source, vertices)?;
        if from != to && seen.insert((from, to)) {
            graph.push_arc(from, to);
        }
    }
    debug!(draws = tracker.attempts(), "directed graph generated");
    Ok(graph)
}

/// Builds a directed graph as [`directed_graph`] does, then assigns every arc
/// a weight drawn from `weights`.
///
/// # Errors
/// Returns the same errors as [`directed_graph`].
pub fn weighted_directed_graph<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    vertices: usize,
    edges: usize,
    weights: WeightRange,
) -> Result<Graph> {
    let mut graph = directed_graph(source, budget, vertices, edges)?;
    weights.assign_each(source, &mut graph)?;
    Ok(graph)
}

/// Builds a directed acyclic graph with `edges` distinct arcs.
///
/// A random topological order is drawn first; every accepted pair is then
/// oriented from the earlier to the later vertex in that order, so no cycle
/// can form.
///
/// # Errors
/// Returns [`crate::FixtureError::InvalidArgument`] when `vertices == 0`,
/// [`crate::FixtureError::EdgeBound`] when
/// `edges > vertices * (vertices - 1) / 2`,
/// [`crate::FixtureError::AllocationFailed`] when the graph or its vertex
/// order cannot be reserved, and
/// [`crate::FixtureError::RetryBudgetExhausted`] when sampling gives up.
#[instrument(name = "graph.acyclic", level = "debug", skip(source, budget), err)]
pub fn directed_acyclic_graph<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    vertices: usize,
    edges: usize,
) -> Result<Graph> {
    check_shape(vertices, edges, max_undirected_edges(vertices))?;

    let mut graph = Graph::empty(GraphKind::Directed, vertices)?;
    let mut order = vec_for(vertices)?;
    order.extend(0..vertices);
    source.shuffle(&mut order);
    let mut position = vec_for(vertices)?;
    position.resize(vertices, 0_usize);
    for (rank, &vertex) in order.iter().enumerate() {
        position[vertex] = rank;
    }

    let mut seen = set_for(edges)?;
    let mut tracker = budget.tracker("directed_acyclic_graph", edges);
    while graph.edge_count() < edges {
        tracker.record()?;
        let (a, b) = draw_pair(source, vertices)?;
        if a == b {
            continue;
        }
        let arc = if position[a] < position[b] { (a, b) } else { (b, a) };
        if seen.insert(arc) {
            graph.push_arc(arc.0, arc.1);
        }
    }
    debug!(draws = tracker.attempts(), "acyclic graph generated");
    Ok(graph)
}
