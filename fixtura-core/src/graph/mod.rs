//! Random graph fixtures stored as adjacency lists.
//!
//! Every builder draws candidate vertex pairs from the scalar sampler and
//! rejects self-loops and duplicates until the requested edge count is met.
//! Weighted variants run a second pass over the finished adjacency lists.
//!
//! | Builder | Edge bound for `v` vertices |
//! |---|---|
//! | [`directed_graph`] | `v * (v - 1)` |
//! | [`undirected_graph`] | `v * (v - 1) / 2` |
//! | [`directed_acyclic_graph`] | `v * (v - 1) / 2` |
//! | [`random_forest`] | `v - 1` |

mod directed;
mod undirected;
mod weights;

use rand::RngCore;

use crate::{
    alloc::vec_for,
    error::{FixtureError, Result},
    rng::RandomSource,
    scalar::sample_in_range,
};

pub use self::{
    directed::{directed_acyclic_graph, directed_graph, weighted_directed_graph},
    undirected::{random_forest, undirected_graph, weighted_undirected_graph},
    weights::WeightRange,
};

/// An outgoing edge stored in the adjacency list of its source vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    to: usize,
    weight: Option<i64>,
}

impl Edge {
    pub(crate) const fn new(to: usize) -> Self {
        Self { to, weight: None }
    }

    /// Returns the destination vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the weight, or `None` for unweighted graphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Option<i64> { self.weight }
}

/// Whether adjacency lists hold arcs or mirrored undirected edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphKind {
    /// Each edge appears once, in the list of its source.
    Directed,
    /// Each edge appears in the lists of both endpoints with equal weights.
    Undirected,
}

/// A graph on the vertices `0..vertex_count` stored as adjacency lists.
///
/// Lists preserve insertion order. No list holds a self-loop or two edges to
/// the same destination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    kind: GraphKind,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Returns `vertices` empty adjacency lists, failing when they cannot be
    /// reserved.
    pub(crate) fn empty(kind: GraphKind, vertices: usize) -> Result<Self> {
        let mut adjacency = vec_for(vertices)?;
        adjacency.resize_with(vertices, Vec::new);
        Ok(Self {
            kind,
            adjacency,
            edge_count: 0,
        })
    }

    /// Returns whether the graph is directed or undirected.
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges; undirected edges count once.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the adjacency list of `vertex`, or `None` when it does not
    /// exist.
    #[must_use]
    pub fn edges(&self, vertex: usize) -> Option<&[Edge]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns every adjacency list indexed by source vertex.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    /// Iterates over `(source, edge)` for every stored adjacency entry.
    ///
    /// Undirected edges are yielded once from each endpoint.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, list)| list.iter().map(move |edge| (from, edge)))
    }

    /// Returns `true` when `from` has an entry pointing at `to`.
    #[must_use]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges(from)
            .is_some_and(|list| list.iter().any(|edge| edge.to == to))
    }

    /// Consumes the graph and returns its adjacency lists.
    #[must_use]
    pub fn into_adjacency(self) -> Vec<Vec<Edge>> {
        self.adjacency
    }

    /// Appends the arc `from -> to`; callers guarantee uniqueness.
    fn push_arc(&mut self, from: usize, to: usize) {
        self.adjacency[from].push(Edge::new(to));
        self.edge_count += 1;
    }

    /// Appends `from - to` to both endpoint lists; callers guarantee
    /// uniqueness.
    fn push_undirected(&mut self, from: usize, to: usize) {
        self.adjacency[from].push(Edge::new(to));
        self.adjacency[to].push(Edge::new(from));
        self.edge_count += 1;
    }

    /// Sets the weight of the entry `from -> to`, returning whether it exists.
    fn set_weight(&mut self, from: usize, to: usize, weight: i64) -> bool {
        self.adjacency
            .get_mut(from)
            .and_then(|list| list.iter_mut().find(|edge| edge.to == to))
            .map(|edge| edge.weight = Some(weight))
            .is_some()
    }
}

/// Maximum number of arcs in a loop-free directed graph on `vertices`.
#[must_use]
pub const fn max_directed_edges(vertices: usize) -> usize {
    vertices.saturating_mul(vertices.saturating_sub(1))
}

/// Maximum number of edges in a loop-free undirected graph on `vertices`.
#[must_use]
pub const fn max_undirected_edges(vertices: usize) -> usize {
    // One of `v` and `v - 1` is even, so halve that factor first.
    let lower = vertices.saturating_sub(1);
    if vertices % 2 == 0 {
        (vertices / 2).saturating_mul(lower)
    } else {
        vertices.saturating_mul(lower / 2)
    }
}

/// Maximum number of edges in a forest on `vertices`.
#[must_use]
pub const fn max_forest_edges(vertices: usize) -> usize {
    vertices.saturating_sub(1)
}

/// Validates `(vertices, edges)` against the bound for one graph shape.
fn check_shape(vertices: usize, edges: usize, maximum: usize) -> Result<()> {
    if vertices == 0 {
        return Err(FixtureError::InvalidArgument {
            parameter: "vertices",
            reason: "must be greater than zero",
        });
    }
    if edges > maximum {
        return Err(FixtureError::EdgeBound {
            vertices,
            requested: edges,
            maximum,
        });
    }
    Ok(())
}

/// Draws an ordered pair of vertices uniformly from `[0, vertices)^2`.
fn draw_pair<R: RngCore>(source: &mut RandomSource<R>, vertices: usize) -> Result<(usize, usize)> {
    let bound = i64::try_from(vertices).map_err(|_| FixtureError::InvalidArgument {
        parameter: "vertices",
        reason: "must fit in a signed 64-bit integer",
    })?;
    let first = sample_in_range(source, 0, bound)?;
    let second = sample_in_range(source, 0, bound)?;
    Ok((to_vertex(first, bound)?, to_vertex(second, bound)?))
}

/// Converts a draw from `[0, bound)` back to a vertex index.
fn to_vertex(draw: i64, bound: i64) -> Result<usize> {
    usize::try_from(draw)
        .ok()
        .filter(|_| draw < bound)
        .ok_or(FixtureError::UnreachableCase { min: 0, max: bound })
}
