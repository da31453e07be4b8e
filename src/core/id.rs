//! The bound on types that identify vertices.

use std::fmt::Debug;

/// A unique identification of a vertex in a [`Graph`](super::Graph).
///
/// Any type with a total order can identify vertices. The order is what makes
/// the enumeration of vertices and successors deterministic, which in turn
/// makes traversal results reproducible. The traversal engines store their own
/// copies of the identifiers, hence `Clone`, and mention them in diagnostics,
/// hence `Debug`.
///
/// The trait is implemented automatically for all eligible types.
pub trait VertexType: Clone + Ord + Debug {}

impl<T> VertexType for T where T: Clone + Ord + Debug {}
