//! Graph configuration options.

use super::{Cost, DEFAULT_COST};

/// What happens to a vertex's matrix cells when its label is unbound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexRemoval {
    /// Leave the cells in the grid. They end up under the last (unbound) slot, are only
    /// visible through [`Graph::raw_matrix`](super::Graph::raw_matrix), and are cleared when a
    /// label is bound to that slot.
    #[default]
    Retain,
    /// Reset the vertex's row and column to "no edge".
    Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Cost written by [`Graph::set_edge`](super::Graph::set_edge) and friends when the caller
    /// does not supply one.
    pub default_cost: Cost,
    pub vertex_removal: VertexRemoval,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            default_cost: DEFAULT_COST,
            vertex_removal: VertexRemoval::Retain,
        }
    }
}
