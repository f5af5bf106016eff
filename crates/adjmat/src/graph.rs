//! The adjacency-matrix graph container.
//!
//! A [`Graph`] has a fixed number of vertex slots. Labels are bound to slots explicitly, and
//! every ordered pair of slots owns one cell of a dense [`CostMatrix`]. Edge writes and lookups
//! are O(1); listing edges is O(capacity²).
//!
//! Slot numbers are not stable: [`Graph::unbind_vertex`] shifts every later vertex down by one
//! slot. Resolve labels again with [`Graph::slot_of`] after a removal instead of caching slots.

mod cells;
mod edge;
mod options;

pub use cells::CostMatrix;
pub use edge::Edge;
pub use options::{GraphOptions, VertexRemoval};

use crate::error::{BindingConflict, Error, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Numeric edge cost.
pub type Cost = i64;

/// Value standing in for "no edge" in [`CostMatrix::to_dense`]. Never accepted as a cost.
pub const NO_EDGE: Cost = -1;

/// Cost used when an edge is created without one.
pub const DEFAULT_COST: Cost = 0;

#[derive(Debug, Clone)]
pub struct Graph {
    options: GraphOptions,
    matrix: CostMatrix,
    slot_index: HashMap<String, usize>,
    labels: Vec<Option<String>>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Graph {
    /// Creates a graph with `capacity` empty slots and default options.
    ///
    /// # Panics
    ///
    /// Panics if the `capacity × capacity` grid does not fit in memory. Use
    /// [`Graph::with_options`] to get [`Error::InvalidCapacity`] instead.
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, GraphOptions::default())
    }

    /// Creates a graph from a signed capacity, rejecting negative values.
    pub fn try_with_capacity(capacity: i64) -> Result<Self> {
        let Ok(capacity) = usize::try_from(capacity) else {
            return Err(Error::InvalidCapacity {
                capacity: i128::from(capacity),
            });
        };
        Self::with_options(capacity, GraphOptions::default())
    }

    pub fn with_options(capacity: usize, options: GraphOptions) -> Result<Self> {
        let grid_bytes = capacity
            .checked_mul(capacity)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Option<Cost>>()));
        if grid_bytes.is_none_or(|bytes| bytes > isize::MAX as usize) {
            return Err(Error::InvalidCapacity {
                capacity: capacity as i128,
            });
        }
        check_cost(options.default_cost)?;
        Ok(Self::build(capacity, options))
    }

    fn build(capacity: usize, options: GraphOptions) -> Self {
        Self {
            options,
            matrix: CostMatrix::new(capacity),
            slot_index: HashMap::default(),
            labels: vec![None; capacity],
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn capacity(&self) -> usize {
        self.labels.len()
    }

    /// Number of bound vertices.
    pub fn vertex_count(&self) -> usize {
        self.slot_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_index.is_empty()
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.slot_index.contains_key(label)
    }

    pub fn slot_of(&self, label: &str) -> Option<usize> {
        self.slot_index.get(label).copied()
    }

    pub fn label_at(&self, slot: usize) -> Option<&str> {
        self.labels.get(slot)?.as_deref()
    }

    fn resolve(&self, label: &str) -> Result<usize> {
        self.slot_of(label).ok_or_else(|| Error::unknown_vertex(label))
    }

    fn resolve_pair(&self, v: &str, w: &str) -> Result<(usize, usize)> {
        Ok((self.resolve(v)?, self.resolve(w)?))
    }

    /// Binds `label` to `slot`.
    ///
    /// Rebinding the same label to the same slot is a no-op. A slot holding another label, or a
    /// label already living in another slot, is rejected with [`Error::DuplicateBinding`].
    pub fn bind_vertex(&mut self, slot: usize, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        let capacity = self.capacity();
        if slot >= capacity {
            return Err(Error::SlotOutOfRange { slot, capacity });
        }
        if let Some(existing) = self.labels[slot].as_deref() {
            if existing == label {
                return Ok(());
            }
            return Err(Error::DuplicateBinding {
                slot,
                conflict: BindingConflict::SlotTaken {
                    label: existing.to_string(),
                },
                label,
            });
        }
        if let Some(&bound) = self.slot_index.get(&label) {
            return Err(Error::DuplicateBinding {
                slot,
                label,
                conflict: BindingConflict::LabelBound { slot: bound },
            });
        }

        // Cells retained from an earlier unbind belong to no vertex.
        let stale = self.matrix.clear_slot(slot);
        if stale > 0 {
            tracing::debug!(slot, cells = stale, "cleared retained cells before binding");
        }

        tracing::debug!(slot, label = %label, "bind vertex");
        self.labels[slot] = Some(label.clone());
        self.slot_index.insert(label, slot);
        Ok(())
    }

    /// Unbinds `label`.
    ///
    /// Every vertex in a later slot moves down by one, carrying its matrix row and column with
    /// it, and the last slot becomes unbound. The removed vertex's own cells end up in that last
    /// slot: [`VertexRemoval::Retain`] leaves them there until the slot is bound again,
    /// [`VertexRemoval::Cascade`] clears them right away.
    pub fn unbind_vertex(&mut self, label: &str) -> Result<()> {
        let Some(slot) = self.slot_index.remove(label) else {
            return Err(Error::unknown_vertex(label));
        };

        self.labels.remove(slot);
        self.labels.push(None);
        for (i, entry) in self.labels.iter().enumerate().skip(slot) {
            let Some(id) = entry.as_deref() else {
                continue;
            };
            if let Some(s) = self.slot_index.get_mut(id) {
                *s = i;
            }
        }

        self.matrix.rotate_slot_to_back(slot);
        let last = self.capacity() - 1;
        match self.options.vertex_removal {
            VertexRemoval::Retain => {
                let dangling = self.matrix.slot_degree(last);
                if dangling > 0 {
                    tracing::warn!(
                        label,
                        slot = last,
                        cells = dangling,
                        "unbound vertex left edge cells behind"
                    );
                }
            }
            VertexRemoval::Cascade => {
                let cleared = self.matrix.clear_slot(last);
                tracing::trace!(label, cells = cleared, "cleared edges of unbound vertex");
            }
        }

        tracing::debug!(label, slot, "unbind vertex");
        Ok(())
    }

    /// Bound labels in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().filter_map(|l| l.as_deref())
    }

    /// The full slot listing, `None` for unbound slots.
    pub fn slots(&self) -> &[Option<String>] {
        &self.labels
    }

    /// Sets an undirected edge with the default cost.
    pub fn set_edge(&mut self, v: &str, w: &str) -> Result<()> {
        self.set_edge_with(v, w, None, false)
    }

    pub fn set_edge_with_cost(&mut self, v: &str, w: &str, cost: Cost) -> Result<()> {
        self.set_edge_with(v, w, Some(cost), false)
    }

    pub fn set_directed_edge(&mut self, v: &str, w: &str, cost: Cost) -> Result<()> {
        self.set_edge_with(v, w, Some(cost), true)
    }

    /// Writes `cost` (or the default cost) at `[v][w]`, and at `[w][v]` too unless `directed`.
    /// Existing costs are overwritten.
    pub fn set_edge_with(
        &mut self,
        v: &str,
        w: &str,
        cost: Option<Cost>,
        directed: bool,
    ) -> Result<()> {
        let cost = cost.unwrap_or(self.options.default_cost);
        check_cost(cost)?;
        let (v_ix, w_ix) = self.resolve_pair(v, w)?;

        tracing::trace!(v, w, cost, directed, "set edge");
        self.matrix.replace(v_ix, w_ix, Some(cost));
        if !directed {
            self.matrix.replace(w_ix, v_ix, Some(cost));
        }
        Ok(())
    }

    /// Clears both `[v][w]` and `[w][v]`, whichever way the edge was set.
    ///
    /// Returns whether either cell held a cost.
    pub fn remove_edge(&mut self, v: &str, w: &str) -> Result<bool> {
        let (v_ix, w_ix) = self.resolve_pair(v, w)?;
        let forward = self.matrix.replace(v_ix, w_ix, None);
        let backward = self.matrix.replace(w_ix, v_ix, None);
        tracing::trace!(v, w, "remove edge");
        Ok(forward.is_some() || backward.is_some())
    }

    /// Clears only `[v][w]`.
    pub fn remove_directed_edge(&mut self, v: &str, w: &str) -> Result<bool> {
        let (v_ix, w_ix) = self.resolve_pair(v, w)?;
        tracing::trace!(v, w, "remove directed edge");
        Ok(self.matrix.replace(v_ix, w_ix, None).is_some())
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge(v, w).is_some()
    }

    /// Cost stored at `[v][w]`, if both labels are bound and the cell is set.
    pub fn edge(&self, v: &str, w: &str) -> Option<Cost> {
        let v_ix = self.slot_of(v)?;
        let w_ix = self.slot_of(w)?;
        self.matrix.get(v_ix, w_ix)
    }

    /// Every set cell between bound slots, row by row.
    ///
    /// An undirected edge shows up twice, once per direction. Cells left behind by
    /// [`Graph::unbind_vertex`] sit under an unbound slot and are skipped.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.matrix.rows().enumerate().flat_map(move |(i, row)| {
            let source = self.label_at(i);
            row.iter().enumerate().filter_map(move |(j, cell)| {
                let cost = (*cell)?;
                Some(Edge::new(source?, self.label_at(j)?, cost))
            })
        })
    }

    pub fn edge_list(&self) -> Vec<(String, String, Cost)> {
        self.edges().map(|e| e.to_owned_triple()).collect()
    }

    /// Number of entries [`Graph::edges`] yields.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Labels `w` with a cost at `[v][w]`, in slot order. Empty for an unknown label.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(v_ix) = self.slot_of(v) else {
            return Vec::new();
        };
        let Some(row) = self.matrix.row(v_ix) else {
            return Vec::new();
        };
        row.iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .filter_map(|(j, _)| self.label_at(j))
            .collect()
    }

    /// Labels `u` with a cost at `[u][v]`, in slot order. Empty for an unknown label.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(v_ix) = self.slot_of(v) else {
            return Vec::new();
        };
        self.matrix
            .column(v_ix)
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .filter_map(|(i, _)| self.label_at(i))
            .collect()
    }

    /// The grid itself. Rows and columns are indexed by slot.
    pub fn raw_matrix(&self) -> &CostMatrix {
        &self.matrix
    }
}

fn check_cost(cost: Cost) -> Result<()> {
    if cost == NO_EDGE {
        return Err(Error::ReservedCost { cost });
    }
    Ok(())
}
