//! Benchmark parameter types rendered as Criterion benchmark IDs.

use std::fmt;

/// Shape of a graph-builder benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Number of edges requested.
    pub edges: usize,
}

impl GraphBenchParams {
    /// Builds parameters requesting `density_percent` of `maximum` edges.
    #[must_use]
    pub const fn with_density(vertices: usize, maximum: usize, density_percent: usize) -> Self {
        Self {
            vertices,
            edges: maximum.saturating_mul(density_percent) / 100,
        }
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},e={}", self.vertices, self.edges)
    }
}

/// Size of a union-find benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct UnionFindBenchParams {
    /// Number of elements in the structure.
    pub elements: usize,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_scales_the_maximum() {
        let params = GraphBenchParams::with_density(10, 90, 50);
        assert_eq!(params.edges, 45);
        assert_eq!(params.to_string(), "v=10,e=45");
    }
}
