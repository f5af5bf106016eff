#![forbid(unsafe_code)]

//! Fixed-capacity graphs stored as a dense adjacency matrix.
//!
//! A [`Graph`] binds external labels to a fixed number of integer slots and records, for every
//! ordered pair of slots, either "no edge" or a [`Cost`]. Undirected edges are mirrored across
//! the diagonal; directed edges occupy a single cell.
//!
//! ```
//! use adjmat::Graph;
//!
//! let mut g = Graph::new(3);
//! g.bind_vertex(0, "a")?;
//! g.bind_vertex(1, "b")?;
//! g.bind_vertex(2, "c")?;
//! g.set_edge_with_cost("a", "b", 7)?;
//! g.set_directed_edge("b", "c", 2)?;
//!
//! assert_eq!(g.edge("b", "a"), Some(7));
//! assert_eq!(g.edge("c", "b"), None);
//! assert_eq!(g.edge_count(), 3);
//! # Ok::<(), adjmat::Error>(())
//! ```
//!
//! Besides the container the crate ships [`Script`], a queue of mutation steps built from
//! compact edge specifications, [`SharedGraph`] for callers on several threads, and
//! [`matrix::multiply`] for dense integer matrices.

pub mod error;
pub mod graph;
pub mod matrix;
pub mod script;
pub mod shared;

pub use error::{BindingConflict, Error, Result};
pub use graph::{
    Cost, CostMatrix, DEFAULT_COST, Edge, Graph, GraphOptions, NO_EDGE, VertexRemoval,
};
pub use script::{Script, Step};
pub use shared::SharedGraph;
