use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::VertexType,
    Successors,
};

/// Directed graph over vertices identified by values of type `T`.
///
/// Vertices and the successors of each vertex are kept in the natural order of
/// `T`, so all enumerations are deterministic.
///
/// An edge can only be added from a vertex that was declared via
/// [`add_vertex`](Graph::add_vertex); edges from unknown vertices are dropped.
/// The target of an edge, on the other hand, does not need to be declared. Such
/// a target is reported among the successors and is reachable by traversals
/// started from a declared vertex, but it is not part of
/// [`vertices`](Graph::vertices) and thus never chosen as a root of a
/// whole-graph traversal. Use [`add_edge_connecting`](Graph::add_edge_connecting)
/// to declare both endpoints at once.
///
/// # Examples
///
/// ```
/// use stopa::core::Graph;
///
/// let mut graph = Graph::new();
///
/// graph.add_vertex("a");
/// graph.add_vertex("b");
///
/// assert!(graph.add_edge("a", "b"));
/// // Unknown source, the edge is ignored.
/// assert!(!graph.add_edge("c", "a"));
///
/// assert!(graph.has_edge(&"a", &"b"));
/// assert!(!graph.has_edge(&"c", &"a"));
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T: VertexType> {
    vertices: BTreeSet<T>,
    edges: BTreeMap<T, BTreeSet<T>>,
}

impl<T: VertexType> Graph<T> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Declares a vertex. Returns `false` if it was already present, in which
    /// case the graph is left untouched.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }

        self.edges.insert(vertex.clone(), BTreeSet::new());
        self.vertices.insert(vertex)
    }

    /// Adds an edge from `src` to `dst`.
    ///
    /// Returns `true` if a new edge was recorded. Adding an already existing
    /// edge or an edge from an unknown source is a no-op and returns `false`.
    /// See [`try_add_edge`](Graph::try_add_edge) for a variant that
    /// distinguishes the two cases.
    pub fn add_edge(&mut self, src: T, dst: T) -> bool {
        match self.try_add_edge(src, dst) {
            Ok(added) => added,
            Err(error) => {
                debug!(src = ?error.src, dst = ?error.dst, "ignoring edge: {}", error.kind);
                false
            }
        }
    }

    /// Adds an edge from `src` to `dst`, failing if `src` is not a vertex of
    /// the graph.
    ///
    /// On success, returns whether the edge was newly added.
    pub fn try_add_edge(&mut self, src: T, dst: T) -> Result<bool, AddEdgeError<T>> {
        match self.edges.get_mut(&src) {
            Some(successors) => Ok(successors.insert(dst)),
            None => Err(AddEdgeError::new(src, dst, AddEdgeErrorKind::SourceAbsent)),
        }
    }

    /// Declares both endpoints as vertices (if not already) and adds the edge
    /// between them.
    pub fn add_edge_connecting(&mut self, src: T, dst: T) -> bool {
        self.add_vertex(src.clone());
        self.add_vertex(dst.clone());
        self.add_edge(src, dst)
    }

    pub fn has_edge(&self, src: &T, dst: &T) -> bool {
        self.edges
            .get(src)
            .map(|successors| successors.contains(dst))
            .unwrap_or(false)
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns a cursor over the successors of `vertex` in their natural
    /// order. The cursor is empty for unknown vertices.
    pub fn successors(&self, vertex: &T) -> Successors<T> {
        match self.edges.get(vertex) {
            Some(successors) => Successors::new(successors.iter().cloned().collect()),
            None => Successors::empty(),
        }
    }

    pub fn successor_count(&self, vertex: &T) -> usize {
        self.edges.get(vertex).map(BTreeSet::len).unwrap_or(0)
    }

    /// Declared vertices in their natural order.
    pub fn vertices(&self) -> &BTreeSet<T> {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn extend_with_vertices<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }

    /// Adds all edges with [`add_edge`](Graph::add_edge) semantics, that is,
    /// edges from unknown sources are ignored.
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, T)>,
    {
        for (src, dst) in iter {
            self.add_edge(src, dst);
        }
    }

    /// Iterates over all edges ordered by source and then by target.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.edges
            .iter()
            .flat_map(|(src, successors)| successors.iter().map(move |dst| (src, dst)))
    }
}

impl<T: VertexType> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a graph from an edge list, declaring all endpoints as vertices.
impl<T: VertexType> FromIterator<(T, T)> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut graph = Self::new();

        for (src, dst) in iter {
            graph.add_edge_connecting(src, dst);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::check_consistency;

    use super::*;

    #[test]
    fn add_vertex_idempotent() {
        let mut graph = Graph::new();

        assert!(graph.add_vertex(3));
        graph.add_edge(3, 4);

        // Duplicate insertion must keep the existing successors.
        assert!(!graph.add_vertex(3));
        assert!(graph.has_edge(&3, &4));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn add_edge_unknown_source() {
        let mut graph = Graph::new();
        graph.extend_with_vertices(["a", "b"]);

        let before = graph.clone();

        assert!(!graph.add_edge("x", "a"));
        assert!(!graph.has_edge(&"x", &"a"));
        assert_eq!(graph, before);
    }

    #[test]
    fn try_add_edge_unknown_source() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        assert_matches!(graph.try_add_edge(1, 2), Ok(true));
        assert_matches!(graph.try_add_edge(1, 2), Ok(false));

        let error = graph.try_add_edge(5, 1).unwrap_err();
        assert_eq!(error.kind, AddEdgeErrorKind::SourceAbsent);
        assert_eq!(error.into_endpoints(), (5, 1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_duplicate() {
        let mut graph = Graph::new();
        graph.add_vertex('a');

        assert!(graph.add_edge('a', 'b'));
        assert!(!graph.add_edge('a', 'b'));
        assert_eq!(graph.successor_count(&'a'), 1);
    }

    #[test]
    fn undeclared_target() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_edge("a", "ghost");

        assert!(graph.has_edge(&"a", &"ghost"));
        assert!(!graph.contains_vertex(&"ghost"));
        assert_eq!(graph.successors(&"a").collect::<Vec<_>>(), vec!["ghost"]);
        assert_eq!(graph.successors(&"ghost").count(), 0);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_connecting_declares_endpoints() {
        let mut graph = Graph::new();

        assert!(graph.add_edge_connecting(2, 1));
        assert!(graph.contains_vertex(&1));
        assert!(graph.contains_vertex(&2));
        assert!(graph.has_edge(&2, &1));
        assert!(!graph.has_edge(&1, &2));
    }

    #[test]
    fn natural_order_enumeration() {
        let mut graph = Graph::new();
        graph.extend_with_vertices([5, 1, 4, 2, 3]);
        graph.extend_with_edges([(1, 5), (1, 3), (1, 4), (1, 2)]);

        assert_eq!(
            graph.vertices().iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(graph.successors(&1).collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn successors_of_unknown_vertex() {
        let graph = Graph::<u32>::new();

        let successors = graph.successors(&42);

        assert!(successors.is_exhausted());
        assert_eq!(graph.successor_count(&42), 0);
        assert!(!graph.has_edge(&42, &42));
    }

    #[test]
    fn from_edge_list() {
        let graph = [("b", "a"), ("a", "c"), ("b", "c")]
            .into_iter()
            .collect::<Graph<_>>();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(&"a", &"c"), (&"b", &"a"), (&"b", &"c")]
        );
        assert_eq!(check_consistency(&graph), Ok(()));
    }
}
