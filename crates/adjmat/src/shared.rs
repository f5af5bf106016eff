//! A [`Graph`] behind one reader/writer lock.
//!
//! Every read and every mutation goes through the same `RwLock`, so a reader can never see the
//! slot listing halfway through [`Graph::unbind_vertex`].

use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph};

#[derive(Debug, Clone)]
pub struct SharedGraph {
    inner: Arc<RwLock<Graph>>,
}

impl From<Graph> for SharedGraph {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}

impl SharedGraph {
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Runs `f` with shared access to the graph.
    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> Result<R> {
        let guard = self.inner.read().map_err(|_| Error::Poisoned)?;
        Ok(f(&guard))
    }

    /// Runs `f` with exclusive access to the graph.
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> Result<R> {
        let mut guard = self.inner.write().map_err(|_| Error::Poisoned)?;
        Ok(f(&mut guard))
    }

    pub fn bind_vertex(&self, slot: usize, label: impl Into<String>) -> Result<()> {
        self.write(|g| g.bind_vertex(slot, label))?
    }

    pub fn unbind_vertex(&self, label: &str) -> Result<()> {
        self.write(|g| g.unbind_vertex(label))?
    }

    pub fn set_edge_with(
        &self,
        v: &str,
        w: &str,
        cost: Option<Cost>,
        directed: bool,
    ) -> Result<()> {
        self.write(|g| g.set_edge_with(v, w, cost, directed))?
    }

    pub fn remove_edge(&self, v: &str, w: &str) -> Result<bool> {
        self.write(|g| g.remove_edge(v, w))?
    }

    pub fn vertices(&self) -> Result<Vec<String>> {
        self.read(|g| g.vertices().map(str::to_string).collect())
    }

    pub fn edge_list(&self) -> Result<Vec<(String, String, Cost)>> {
        self.read(Graph::edge_list)
    }

    pub fn dense_matrix(&self) -> Result<Vec<Vec<Cost>>> {
        self.read(|g| g.raw_matrix().to_dense())
    }

    /// Takes the graph out, cloning it while other handles are still alive.
    pub fn into_inner(self) -> Result<Graph> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner().map_err(|_| Error::Poisoned),
            Err(inner) => {
                let guard = inner.read().map_err(|_| Error::Poisoned)?;
                Ok(Graph::clone(&guard))
            }
        }
    }
}
