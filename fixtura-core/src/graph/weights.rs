//! Edge weight ranges and the weight-assignment passes.

use rand::RngCore;

use crate::{
    error::{FixtureError, Result},
    rng::RandomSource,
    scalar::{sample_in_range, sample_signed_range},
};

use super::Graph;

/// Range that edge weights are drawn from.
///
/// Non-negative ranges cover `[0, max)`; signed ranges cover `[-max, max)`.
///
/// # Examples
/// ```
/// use fixtura_core::graph::WeightRange;
///
/// let range = WeightRange::signed(10).expect("positive maximum");
/// assert_eq!(range.bounds(), (-10, 10));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightRange {
    max: i64,
    allow_negative: bool,
}

impl WeightRange {
    /// Creates a weight range.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidRange`] when `max <= 0`.
    pub const fn new(max: i64, allow_negative: bool) -> Result<Self> {
        if max <= 0 {
            return Err(FixtureError::InvalidRange { min: 0, max });
        }
        Ok(Self {
            max,
            allow_negative,
        })
    }

    /// Weights in `[0, max)`.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidRange`] when `max <= 0`.
    pub const fn non_negative(max: i64) -> Result<Self> {
        Self::new(max, false)
    }

    /// Weights in `[-max, max)`.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidRange`] when `max <= 0`.
    pub const fn signed(max: i64) -> Result<Self> {
        Self::new(max, true)
    }

    /// Returns the half-open `(min, max)` bounds of the range.
    #[must_use]
    pub const fn bounds(&self) -> (i64, i64) {
        if self.allow_negative {
            (-self.max, self.max)
        } else {
            (0, self.max)
        }
    }

    /// Returns whether negative weights may be drawn.
    #[must_use]
    pub const fn allows_negative(&self) -> bool {
        self.allow_negative
    }

    fn sample<R: RngCore>(self, source: &mut RandomSource<R>) -> Result<i64> {
        let (min, max) = self.bounds();
        if self.allow_negative {
            sample_signed_range(source, min, max)
        } else {
            sample_in_range(source, min, max)
        }
    }

    /// Gives every adjacency entry of every vertex its own weight.
    pub(super) fn assign_each<R: RngCore>(
        self,
        source: &mut RandomSource<R>,
        graph: &mut Graph,
    ) -> Result<()> {
        for list in &mut graph.adjacency {
            for edge in list.iter_mut() {
                edge.weight = Some(self.sample(source)?);
            }
        }
        Ok(())
    }

    /// Gives each undirected edge one weight, mirrored into both endpoint
    /// lists.
    pub(super) fn assign_symmetric<R: RngCore>(
        self,
        source: &mut RandomSource<R>,
        graph: &mut Graph,
    ) -> Result<()> {
        for from in 0..graph.vertex_count() {
            let forward: Vec<usize> = graph.adjacency[from]
                .iter()
                .map(|edge| edge.to)
                .filter(|&to| to > from)
                .collect();
            for to in forward {
                let weight = self.sample(source)?;
                graph.set_weight(from, to, weight);
                graph.set_weight(to, from, weight);
            }
        }
        Ok(())
    }
}
