use std::collections::{btree_map, BTreeMap};

use crate::core::{id::VertexType, Color};

/// Per-vertex traversal data with a fixed read policy for vertices that were
/// never stored.
///
/// The traversal engines record distances, parents and timestamps only for the
/// vertices they touch. Reads of any other vertex fall back to a default given
/// by the caller instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexMap<T, V> {
    inner: BTreeMap<T, V>,
}

impl<T: VertexType, V> VertexMap<T, V> {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn get(&self, vertex: &T) -> Option<&V> {
        self.inner.get(vertex)
    }

    pub fn get_or(&self, vertex: &T, default: V) -> V
    where
        V: Clone,
    {
        self.inner.get(vertex).cloned().unwrap_or(default)
    }

    pub fn set(&mut self, vertex: T, value: V) -> Option<V> {
        self.inner.insert(vertex, value)
    }

    pub fn remove(&mut self, vertex: &T) -> Option<V> {
        self.inner.remove(vertex)
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.inner.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Stored entries in the natural order of vertices.
    pub fn iter(&self) -> btree_map::Iter<'_, T, V> {
        self.inner.iter()
    }
}

impl<T: VertexType, V> Default for VertexMap<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: VertexType, V> IntoIterator for &'a VertexMap<T, V> {
    type Item = (&'a T, &'a V);
    type IntoIter = btree_map::Iter<'a, T, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Vertex colors, [`White`](Color::White) unless stored otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap<T> {
    inner: VertexMap<T, Color>,
}

impl<T: VertexType> ColorMap<T> {
    pub fn new() -> Self {
        Self {
            inner: VertexMap::new(),
        }
    }

    pub fn get(&self, vertex: &T) -> Color {
        self.inner.get_or(vertex, Color::White)
    }

    pub fn set(&mut self, vertex: T, color: Color) {
        self.inner.set(vertex, color);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, Color)> + '_ {
        self.inner.iter().map(|(vertex, color)| (vertex, *color))
    }
}

impl<T: VertexType> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
