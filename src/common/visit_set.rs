use std::collections::BTreeSet;

use crate::core::{id::VertexType, Color};

use super::ColorMap;

pub trait VisitSet<T: VertexType> {
    /// Marks the vertex as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, vertex: T) -> bool;
    fn is_visited(&self, vertex: &T) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<T: VertexType> VisitSet<T> for BTreeSet<T> {
    fn visit(&mut self, vertex: T) -> bool {
        self.insert(vertex)
    }

    fn is_visited(&self, vertex: &T) -> bool {
        self.contains(vertex)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

// Any vertex that is not white has been discovered. Visiting a white vertex
// makes it gray, a vertex that is already gray or black is left as it is.
impl<T: VertexType> VisitSet<T> for ColorMap<T> {
    fn visit(&mut self, vertex: T) -> bool {
        if self.get(&vertex).is_white() {
            self.set(vertex, Color::Gray);
            true
        } else {
            false
        }
    }

    fn is_visited(&self, vertex: &T) -> bool {
        !self.get(vertex).is_white()
    }

    fn visited_count(&self) -> usize {
        self.iter().filter(|(_, color)| !color.is_white()).count()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}
