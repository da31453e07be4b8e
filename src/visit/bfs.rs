use tracing::{debug, trace};

use crate::{
    common::{ColorMap, VertexMap, VisitSet},
    core::{id::VertexType, Color, Graph},
};

use super::raw::{Queue, TraversalCollection};

/// Breadth-first search computing hop distances and a BFS forest.
///
/// # Examples
///
/// ```
/// use stopa::{core::Graph, visit::Bfs};
///
/// let graph = [(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]
///     .into_iter()
///     .collect::<Graph<_>>();
///
/// let mut bfs = Bfs::new(&graph);
/// bfs.run_from(1);
///
/// assert_eq!(bfs.distance_to(&5), 3);
/// assert_eq!(bfs.parent_of(&4), Some(&2));
/// assert_eq!(bfs.path_to(&5), Some(vec![1, 2, 4, 5]));
/// ```
pub struct Bfs<'g, T: VertexType> {
    graph: &'g Graph<T>,
    distance: VertexMap<T, usize>,
    parent: VertexMap<T, T>,
    color: ColorMap<T>,
    queue: Queue<T>,
}

impl<'g, T: VertexType> Bfs<'g, T> {
    pub fn new(graph: &'g Graph<T>) -> Self {
        Self {
            graph,
            distance: VertexMap::new(),
            parent: VertexMap::new(),
            color: ColorMap::new(),
            queue: Queue::default(),
        }
    }

    /// Traverses the whole graph, starting a new tree from every vertex that
    /// is still white, in the natural order of vertices.
    pub fn run(&mut self) -> &mut Self {
        let graph = self.graph;
        debug!(vertices = graph.vertex_count(), "breadth-first search of the whole graph");

        for vertex in graph.vertices() {
            if self.color.get(vertex).is_white() {
                self.run_from(vertex.clone());
            }
        }

        self
    }

    /// Traverses everything reachable from `start`.
    ///
    /// The start becomes a root: its distance is set to zero and its parent
    /// is cleared, even if it was reached by a previous run on this engine.
    /// Vertices colored by previous runs are not entered again.
    pub fn run_from(&mut self, start: T) -> &mut Self {
        debug!(start = ?start, "breadth-first search");

        self.color.set(start.clone(), Color::Gray);
        self.distance.set(start.clone(), 0);
        self.parent.remove(&start);

        self.queue.clear();
        self.queue.push(start);

        while let Some(u) = self.queue.pop() {
            let next_distance = self.distance.get_or(&u, 0) + 1;

            for v in self.graph.successors(&u) {
                if self.color.get(&v).is_white() {
                    trace!(vertex = ?v, parent = ?u, distance = next_distance, "discovered");

                    self.color.set(v.clone(), Color::Gray);
                    self.distance.set(v.clone(), next_distance);
                    self.parent.set(v.clone(), u.clone());
                    self.queue.push(v);
                }
            }

            self.color.set(u, Color::Black);
        }

        self
    }

    /// Number of edges from the root of the vertex's tree, zero for vertices
    /// that were not reached.
    pub fn distance_to(&self, vertex: &T) -> usize {
        self.distance.get_or(vertex, 0)
    }

    /// Predecessor in the BFS tree, `None` for roots and vertices that were
    /// not reached.
    pub fn parent_of(&self, vertex: &T) -> Option<&T> {
        self.parent.get(vertex)
    }

    pub fn color_of(&self, vertex: &T) -> Color {
        self.color.get(vertex)
    }

    /// Reconstructs the path from the root of the vertex's BFS tree to the
    /// vertex. Returns `None` if the vertex was not reached.
    pub fn path_to(&self, vertex: &T) -> Option<Vec<T>> {
        if self.color.get(vertex).is_white() {
            return None;
        }

        let mut path = vec![vertex.clone()];
        let mut current = vertex;

        while let Some(parent) = self.parent.get(current) {
            path.push(parent.clone());
            current = parent;
        }

        path.reverse();
        Some(path)
    }

    pub fn distances(&self) -> &VertexMap<T, usize> {
        &self.distance
    }

    pub fn parents(&self) -> &VertexMap<T, T> {
        &self.parent
    }

    pub fn colors(&self) -> &ColorMap<T> {
        &self.color
    }

    /// Vertices reached by any run on this engine.
    pub fn visited(&self) -> &impl VisitSet<T> {
        &self.color
    }

    /// Forgets the results of all previous runs.
    pub fn reset(&mut self) {
        self.distance.clear();
        self.parent.clear();
        self.color.clear();
        self.queue.clear();
    }
}
