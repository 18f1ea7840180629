//! Union-find (disjoint set union) over a fixed universe of elements.
//!
//! Combines union by rank with full path compression, giving near-constant
//! amortised cost per operation. The forest builder in [`crate::graph`] uses
//! it to reject cycle-closing edges; it is also exported for direct use as a
//! test subject.

use std::fmt;

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors returned by [`UnionFind`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// An element index was outside `[0, len)`.
    #[error("element {index} is outside a universe of {len} elements")]
    IndexOutOfRange {
        /// The offending element index.
        index: usize,
        /// Number of elements in the universe.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// An element index was outside the universe.
        IndexOutOfRange => IndexOutOfRange { .. } => "UNION_FIND_INDEX_OUT_OF_RANGE",
    }
}

/// Disjoint-set forest over the elements `0..len`.
///
/// `find` compresses paths and therefore takes `&mut self`; sharing an
/// instance across threads requires an external lock around the whole
/// structure.
///
/// # Examples
/// ```
/// use fixtura_core::UnionFind;
///
/// let mut sets = UnionFind::new(5);
/// sets.union(0, 1)?;
/// sets.union(1, 2)?;
/// assert!(sets.same_component(0, 2)?);
/// assert!(!sets.same_component(0, 3)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), fixtura_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Number of elements in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the universe has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    fn check(&self, index: usize) -> Result<(), UnionFindError> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::IndexOutOfRange {
                index,
                len: self.parent.len(),
            })
        }
    }

    /// Returns the representative of the component containing `node`.
    ///
    /// Every node on the walk is re-pointed directly at the root.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when `node >= len`.
    pub fn find(&mut self, node: usize) -> Result<usize, UnionFindError> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `Ok(false)` when they already share a component (including
    /// `left == right`).
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index is
    /// outside the universe; no state changes in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        self.check(left)?;
        self.check(right)?;
        if left == right {
            return Ok(false);
        }

        let mut left = self.find_root(left);
        let mut right = self.find_root(right);
        if left == right {
            return Ok(false);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns whether `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index is
    /// outside the universe.
    pub fn same_component(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }
}
