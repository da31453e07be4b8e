use std::iter::FusedIterator;

/// A resumable cursor over the out-neighbors of a vertex.
///
/// The cursor owns a snapshot of the successors (in their natural order)
/// together with the position of the next one to be returned. It can be paused
/// at any point and resumed later without rescanning, which is what the
/// depth-first traversal relies on when it returns to a vertex after finishing
/// one of its descendants. Because it owns its data, a stack of cursors can be
/// inspected, cloned and compared freely.
///
/// # Examples
///
/// ```
/// use stopa::core::Graph;
///
/// let mut graph = Graph::new();
/// graph.extend_with_vertices([1, 2, 3]);
/// graph.extend_with_edges([(1, 3), (1, 2)]);
///
/// let mut successors = graph.successors(&1);
/// assert_eq!(successors.next(), Some(2));
/// assert_eq!(successors.position(), 1);
/// assert_eq!(successors.peek(), Some(&3));
///
/// successors.restart();
/// assert_eq!(successors.collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successors<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> Successors<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self { items, position: 0 }
    }

    /// Empty cursor, used for vertices without an adjacency entry.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of successors already returned.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the successor that [`next`](Iterator::next) would return
    /// without advancing.
    pub fn peek(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// The successors that were not returned yet.
    pub fn remaining(&self) -> &[T] {
        &self.items[self.position.min(self.items.len())..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }

    /// Rewinds the cursor to the first successor.
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// All successors regardless of the position.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Iterator for Successors<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining().len();
        (len, Some(len))
    }
}

impl<T: Clone> ExactSizeIterator for Successors<T> {}

impl<T: Clone> FusedIterator for Successors<T> {}
