//! Dense cost storage backing [`Graph`](super::Graph).
//!
//! Cells are kept in one row-major `Vec` of `dim * dim` entries; `None` means "no edge".

use super::{Cost, NO_EDGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    dim: usize,
    cells: Vec<Option<Cost>>,
}

impl CostMatrix {
    pub(in crate::graph) fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    /// Number of rows, which is also the number of columns.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the cost stored at `(row, col)`; `None` for an empty or out-of-range cell.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cost> {
        if row < self.dim && col < self.dim {
            self.cells[row * self.dim + col]
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Option<Cost>]> {
        if row < self.dim {
            let start = row * self.dim;
            Some(&self.cells[start..start + self.dim])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Cost>]> {
        // `chunks_exact(0)` panics; an empty grid has no cells to chunk anyway.
        self.cells.chunks_exact(self.dim.max(1))
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<Cost>> + '_ {
        let dim = if col < self.dim { self.dim } else { 0 };
        (0..dim).map(move |row| self.cells[row * self.dim + col])
    }

    /// Number of cells holding a cost.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Exports the grid as nested rows with [`NO_EDGE`] in empty cells.
    pub fn to_dense(&self) -> Vec<Vec<Cost>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.unwrap_or(NO_EDGE)).collect())
            .collect()
    }

    /// Writes `value` at `(row, col)` and returns the previous value. Callers check bounds.
    pub(in crate::graph) fn replace(
        &mut self,
        row: usize,
        col: usize,
        value: Option<Cost>,
    ) -> Option<Cost> {
        debug_assert!(row < self.dim && col < self.dim);
        std::mem::replace(&mut self.cells[row * self.dim + col], value)
    }

    /// Resets row `slot` and column `slot`, returning how many cells held a cost.
    pub(in crate::graph) fn clear_slot(&mut self, slot: usize) -> usize {
        debug_assert!(slot < self.dim);
        let mut cleared = 0usize;
        for i in 0..self.dim {
            if self.replace(slot, i, None).is_some() {
                cleared += 1;
            }
            if i != slot && self.replace(i, slot, None).is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    /// Counts the cells of row `slot` and column `slot` that hold a cost.
    pub(in crate::graph) fn slot_degree(&self, slot: usize) -> usize {
        let row = self.row(slot).map_or(0, |r| r.iter().flatten().count());
        let col = self
            .column(slot)
            .enumerate()
            .filter(|&(i, c)| i != slot && c.is_some())
            .count();
        row + col
    }

    /// Moves row and column `slot` to the last position, shifting every later row and column
    /// down by one. Mirrors removing an entry from the slot listing and appending a blank one.
    pub(in crate::graph) fn rotate_slot_to_back(&mut self, slot: usize) {
        debug_assert!(slot < self.dim);
        let dim = self.dim;
        for row in self.cells.chunks_exact_mut(dim) {
            row[slot..].rotate_left(1);
        }
        self.cells[slot * dim..].rotate_left(dim);
    }
}
