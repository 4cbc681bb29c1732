//! Dense adjacency storage for the friendship graph.
//!
//! The matrix is one flat boolean buffer indexed as `row * dim + col`,
//! which avoids the pointer-of-pointers layout this structure is
//! usually drawn with. Growth rebuilds the buffer in place; cells
//! beyond the old dimension start out false.

use serde::{Deserialize, Serialize};

/// Square boolean matrix encoding pairwise friendship.
///
/// Invariants: the matrix is symmetric and the diagonal is never set.
/// Both hold because cells are only ever flipped in mirrored pairs and
/// `i == j` is rejected at the call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AdjacencyMatrix {
    cells: Vec<bool>,
    dim: usize,
}

impl AdjacencyMatrix {
    /// Creates an all-false matrix with the given dimension.
    pub(crate) fn new(dim: usize) -> Self {
        Self {
            cells: vec![false; dim * dim],
            dim,
        }
    }

    /// Current dimension (the capacity of the graph, not its size).
    pub(crate) fn dim(&self) -> usize {
        self.dim
    }

    /// Reads one cell. The diagonal always reads false.
    pub(crate) fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.dim + col]
    }

    /// Sets both `(i, j)` and `(j, i)`.
    ///
    /// Returns true if the pair was not already connected.
    pub(crate) fn connect(&mut self, i: usize, j: usize) -> bool {
        debug_assert_ne!(i, j, "diagonal cells must never be set");
        if self.cells[i * self.dim + j] {
            return false;
        }
        self.cells[i * self.dim + j] = true;
        self.cells[j * self.dim + i] = true;
        true
    }

    /// Clears both `(i, j)` and `(j, i)`.
    ///
    /// Returns true if the pair was connected before the call.
    pub(crate) fn disconnect(&mut self, i: usize, j: usize) -> bool {
        debug_assert_ne!(i, j, "diagonal cells must never be set");
        if !self.cells[i * self.dim + j] {
            return false;
        }
        self.cells[i * self.dim + j] = false;
        self.cells[j * self.dim + i] = false;
        true
    }

    /// Rebuilds the buffer at a larger dimension, keeping every
    /// existing cell and zero-initializing the rest.
    pub(crate) fn grow(&mut self, new_dim: usize) {
        assert!(new_dim >= self.dim, "matrix can only grow");
        let mut cells = vec![false; new_dim * new_dim];
        for row in 0..self.dim {
            let old_start = row * self.dim;
            let new_start = row * new_dim;
            cells[new_start..new_start + self.dim]
                .copy_from_slice(&self.cells[old_start..old_start + self.dim]);
        }
        self.cells = cells;
        self.dim = new_dim;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_is_symmetric() {
        let mut m = AdjacencyMatrix::new(4);
        assert!(m.connect(0, 2));
        assert!(m.get(0, 2));
        assert!(m.get(2, 0));
        assert!(!m.get(0, 1));
    }

    #[test]
    fn test_connect_reports_change() {
        let mut m = AdjacencyMatrix::new(3);
        assert!(m.connect(0, 1));
        assert!(!m.connect(0, 1));
        assert!(!m.connect(1, 0));
    }

    #[test]
    fn test_disconnect_clears_both_directions() {
        let mut m = AdjacencyMatrix::new(3);
        m.connect(1, 2);
        assert!(m.disconnect(2, 1));
        assert!(!m.get(1, 2));
        assert!(!m.get(2, 1));
        // Already clear, nothing to report.
        assert!(!m.disconnect(1, 2));
    }

    #[test]
    fn test_grow_preserves_cells() {
        let mut m = AdjacencyMatrix::new(2);
        m.connect(0, 1);
        m.grow(4);
        assert_eq!(m.dim(), 4);
        assert!(m.get(0, 1));
        assert!(m.get(1, 0));
        // New cells start out false.
        for i in 0..4 {
            for j in 2..4 {
                assert!(!m.get(i, j));
                assert!(!m.get(j, i));
            }
        }
    }

    #[test]
    fn test_grow_from_capacity_one() {
        // The default book starts at dimension 1 and doubles from there.
        let mut m = AdjacencyMatrix::new(1);
        m.grow(2);
        m.connect(0, 1);
        m.grow(4);
        assert!(m.get(0, 1));
    }
}
