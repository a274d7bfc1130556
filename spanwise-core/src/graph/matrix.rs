//! Dense weight matrix backing the matrix representation.

use crate::error::{GraphError, Result};

/// Square, symmetric weight matrix stored as one flat row-major buffer.
///
/// A cell value of `0` means "no edge"; the diagonal is always `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<u32>,
}

impl AdjacencyMatrix {
    /// Allocates an all-zero `order` by `order` matrix.
    pub(super) fn new(order: usize) -> Result<Self> {
        let too_many = || GraphError::TooManyVertices { got: order };
        let len = order.checked_mul(order).ok_or_else(too_many)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_many())?;
        cells.resize(len, 0);
        Ok(Self { order, cells })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> usize { self.order }

    /// Returns the weight stored at `(row, column)`, or `0` when either index
    /// is out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.index(row, column)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Returns row `row` as a slice of `order` weights.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row.saturating_mul(self.order);
        self.cells
            .get(start..start.saturating_add(self.order))
            .unwrap_or(&[])
    }

    /// Iterates over the rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // `chunks_exact(0)` panics, and a zero-order matrix has no rows anyway.
        self.cells.chunks_exact(self.order.max(1))
    }

    pub(super) fn set_symmetric(&mut self, left: usize, right: usize, weight: u32) {
        for (row, column) in [(left, right), (right, left)] {
            if let Some(cell) = self
                .index(row, column)
                .and_then(|index| self.cells.get_mut(index))
            {
                *cell = weight;
            }
        }
    }

    #[cfg(test)]
    pub(super) fn set(&mut self, row: usize, column: usize, weight: u32) {
        if let Some(cell) = self
            .index(row, column)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = weight;
        }
    }

    pub(super) fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.order && column < self.order).then(|| row * self.order + column)
    }
}
