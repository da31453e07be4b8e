//! Generic directed graph with iterative breadth-first and depth-first
//! traversals.
//!
//! The [`Graph`](core::Graph) container stores vertices of any ordered type
//! and enumerates both vertices and successors in their natural order, so that
//! traversals are reproducible regardless of insertion order. The
//! [`Bfs`](visit::Bfs) and [`Dfs`](visit::Dfs) engines borrow the graph and
//! record per-vertex metadata (colors, distances, parents, discovery and
//! finish times) that can be queried after a run.
//!
//! # Examples
//!
//! ```
//! use stopa::{core::Graph, visit::Dfs};
//!
//! let mut graph = Graph::new();
//! graph.extend_with_vertices(["a", "b", "c"]);
//! graph.extend_with_edges([("a", "b"), ("b", "c")]);
//!
//! let mut dfs = Dfs::new(&graph);
//! dfs.run();
//!
//! assert_eq!(dfs.discovered_at(&"a"), 1);
//! assert_eq!(dfs.finished_at(&"a"), 6);
//! ```

pub mod common;
pub mod core;
pub mod infra;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{Color, Graph},
        visit::{Bfs, Dfs, DfsEvent, TimerMode},
    };
}
