//! Undirected graph builders, including union-find backed forests.

use rand::RngCore;
use tracing::{debug, instrument};

use crate::{
    alloc::set_for, error::Result, retry::RetryBudget, rng::RandomSource, union_find::UnionFind,
};

use super::{
    Graph, GraphKind, WeightRange, check_shape, draw_pair, max_forest_edges, max_undirected_edges,
};

/// Builds an undirected graph with `edges` distinct edges and no self-loops.
///
/// Each edge is stored in the adjacency lists of both endpoints.
///
/// # Errors
/// Returns [`crate::FixtureError::InvalidArgument`] when `vertices == 0`,
/// [`crate::FixtureError::EdgeBound`] when
/// `edges > vertices * (vertices - 1) / 2`,
/// [`crate::FixtureError::AllocationFailed`] when the adjacency lists cannot
/// be reserved, and [`crate::FixtureError::RetryBudgetExhausted`] when
/// sampling gives up.
#[instrument(name = "graph.undirected", level = "debug", skip(source, budget), err)]
pub fn undirected_graph<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    vertices: usize,
    edges: usize,
) -> Result<Graph> {
    check_shape(vertices, edges, max_undirected_edges(vertices))?;

    let mut graph = Graph::empty(GraphKind::Undirected, vertices)?;
    let mut seen = set_for(edges)?;
    let mut tracker = budget.tracker("undirected_graph", edges);
    while graph.edge_count() < edges {
        tracker.record()?;
        let (a, b) = draw_pair(source, vertices)?;
        if a == b {
            continue;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        if seen.insert((low, high)) {
            graph.push_undirected(low, high);
        }
    }
    debug!(draws = tracker.attempts(), "undirected graph generated");
    Ok(graph)
}

/// Builds an undirected graph as [`undirected_graph`] does, then assigns each
/// edge one weight shared by both of its adjacency entries.
///
/// # Errors
/// Returns the same errors as [`undirected_graph`].
pub fn weighted_undirected_graph<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    vertices: usize,
    edges: usize,
    weights: WeightRange,
) -> Result<Graph> {
    let mut graph = undirected_graph(source, budget, vertices, edges)?;
    weights.assign_symmetric(source, &mut graph)?;
    Ok(graph)
}

/// Builds an undirected acyclic graph (a forest) with `edges` edges.
///
/// Candidate edges whose endpoints already share a component are rejected,
/// so `edges == vertices - 1` yields a spanning tree.
///
/// # Errors
/// Returns [`crate::FixtureError::InvalidArgument`] when `vertices == 0`,
/// [`crate::FixtureError::EdgeBound`] when `edges > vertices - 1`,
/// [`crate::FixtureError::AllocationFailed`] when the adjacency lists cannot
/// be reserved, and [`crate::FixtureError::RetryBudgetExhausted`] when
/// sampling gives up.
///
/// # Examples
/// ```
/// use fixtura_core::{RandomSource, RetryBudget, graph::random_forest};
///
/// let mut source = RandomSource::seeded(12);
/// let tree = random_forest(&mut source, RetryBudget::default(), 6, 5)
///     .expect("five edges span six vertices");
/// assert_eq!(tree.edge_count(), 5);
/// ```
#[instrument(name = "graph.forest", level = "debug", skip(source, budget), err)]
pub fn random_forest<R: RngCore>(
    source: &mut RandomSource<R>,
    budget: RetryBudget,
    vertices: usize,
    edges: usize,
) -> Result<Graph> {
    check_shape(vertices, edges, max_forest_edges(vertices))?;

    let mut graph = Graph::empty(GraphKind::Undirected, vertices)?;
    let mut components = UnionFind::new(vertices);
    // Late merges between two large components are rare draws, so the cap
    // scales with the vertex count rather than the edge count.
    let mut tracker = budget.tracker("random_forest", vertices);
    while graph.edge_count() < edges {
        tracker.record()?;
        let (a, b) = draw_pair(source, vertices)?;
        if components.union(a, b)? {
            graph.push_undirected(a, b);
        }
    }
    debug!(
        draws = tracker.attempts(),
        components = components.component_count(),
        "forest generated"
    );
    Ok(graph)
}
