use std::collections::{BTreeMap, BTreeSet, VecDeque};

use thiserror::Error;

use crate::{
    common::VisitSet,
    core::{id::VertexType, Color, Graph},
    visit::{Bfs, Dfs},
};

/// The directed graph from the depth-first search chapter of Cormen et al.,
/// Introduction to Algorithms.
pub fn create_example_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();

    graph.extend_with_vertices(["s", "q", "t", "y", "r", "v", "w", "x", "z", "u"]);
    graph.extend_with_edges([
        ("s", "v"),
        ("q", "s"),
        ("q", "w"),
        ("q", "t"),
        ("t", "y"),
        ("t", "x"),
        ("y", "q"),
        ("r", "y"),
        ("r", "u"),
        ("v", "w"),
        ("w", "s"),
        ("x", "w"),
        ("x", "z"),
        ("z", "x"),
        ("u", "y"),
    ]);

    graph
}

/// Path `0 -> 1 -> ... -> vertex_count - 1`.
pub fn create_path(vertex_count: usize) -> Graph<usize> {
    let mut graph = Graph::new();

    graph.extend_with_vertices(0..vertex_count);
    graph.extend_with_edges((1..vertex_count).map(|v| (v - 1, v)));

    graph
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex {0} has no adjacency entry")]
    AdjacencyMissing(String),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("successors of {0} yield {1} items but the successor count is {2}")]
    SuccessorCountMismatch(String, usize, usize),
    #[error("successors of {0} are not strictly increasing")]
    SuccessorsUnordered(String),
}

pub fn check_consistency<T: VertexType>(graph: &Graph<T>) -> Result<(), ConsistencyCheckError> {
    for vertex in graph.vertices() {
        let successors = graph.successors(vertex);
        let items = successors.as_slice();

        if items.len() != graph.successor_count(vertex) {
            return Err(ConsistencyCheckError::SuccessorCountMismatch(
                format!("{vertex:?}"),
                items.len(),
                graph.successor_count(vertex),
            ));
        }

        if items.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConsistencyCheckError::SuccessorsUnordered(format!(
                "{vertex:?}"
            )));
        }
    }

    let sources = graph.edges().map(|(src, _)| src).collect::<BTreeSet<_>>();
    if let Some(src) = sources.iter().find(|src| !graph.contains_vertex(src)) {
        return Err(ConsistencyCheckError::AdjacencyMissing(format!("{src:?}")));
    }

    let edges_count = graph.edges().count();
    if edges_count != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            edges_count,
            graph.edge_count(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalCheckError {
    #[error("vertex {0} is {1:?} after the traversal")]
    NotFinished(String, Color),
    #[error("vertex {0} is discovered at {1} but finished at {2}")]
    FinishBeforeDiscovery(String, usize, usize),
    #[error("intervals of {0} and {1} partially overlap")]
    PartialOverlap(String, String),
    #[error("times are not a permutation of 1..={0}")]
    TimesNotContiguous(usize),
    #[error("edge {0} -> {1} was not followed although {1} was undiscovered")]
    EdgeIgnored(String, String),
    #[error("vertex {0} is reachable but was not visited")]
    Unreached(String),
    #[error("vertex {0} is not reachable but was visited")]
    Unreachable(String),
    #[error("vertex {0} has distance {1} while the shortest path has {2} edges")]
    NotShortest(String, usize, usize),
    #[error("parent {1} of vertex {0} is not its predecessor")]
    ParentNotPredecessor(String, String),
    #[error("vertex {0} has distance {1}, but its parent {2} has distance {3}")]
    ParentDistance(String, usize, String, usize),
}

/// Checks the result of one continuous depth-first numbering, that is, a single
/// [`run`](Dfs::run) or a single [`run_from`](Dfs::run_from) on a fresh
/// engine.
pub fn check_dfs<T: VertexType>(
    dfs: &Dfs<'_, T>,
    graph: &Graph<T>,
) -> Result<(), TraversalCheckError> {
    let mut intervals = Vec::new();

    for (vertex, &discovered) in dfs.discovery_times() {
        let color = dfs.color_of(vertex);
        if color != Color::Black {
            return Err(TraversalCheckError::NotFinished(format!("{vertex:?}"), color));
        }

        let finished = dfs.finished_at(vertex);
        if discovered >= finished {
            return Err(TraversalCheckError::FinishBeforeDiscovery(
                format!("{vertex:?}"),
                discovered,
                finished,
            ));
        }

        intervals.push((vertex, discovered, finished));
    }

    for (i, (u, du, fu)) in intervals.iter().enumerate() {
        for (v, dv, fv) in intervals.iter().skip(i + 1) {
            let disjoint = fu < dv || fv < du;
            let nested = (du < dv && fv < fu) || (dv < du && fu < fv);

            if !disjoint && !nested {
                return Err(TraversalCheckError::PartialOverlap(
                    format!("{u:?}"),
                    format!("{v:?}"),
                ));
            }
        }
    }

    let mut times = intervals
        .iter()
        .flat_map(|(_, d, f)| [*d, *f])
        .collect::<Vec<_>>();
    times.sort_unstable();
    if times.iter().copied().ne(1..=times.len()) {
        return Err(TraversalCheckError::TimesNotContiguous(times.len()));
    }

    // An edge can't lead from a vertex finished before its target was even
    // discovered. Such target would have been white when the edge was
    // examined.
    for (u, _, fu) in intervals.iter() {
        for v in graph.successors(u) {
            let dv = dfs.discovered_at(&v);
            if dv > *fu {
                return Err(TraversalCheckError::EdgeIgnored(
                    format!("{u:?}"),
                    format!("{v:?}"),
                ));
            }
        }
    }

    Ok(())
}

/// Checks the result of a single [`run_from`](Bfs::run_from) on a fresh
/// engine against a straightforward reference implementation.
pub fn check_bfs<T: VertexType>(
    bfs: &Bfs<'_, T>,
    graph: &Graph<T>,
    start: &T,
) -> Result<(), TraversalCheckError> {
    let mut visited = BTreeSet::<T>::new();
    let mut distances = BTreeMap::new();
    let mut queue = VecDeque::new();

    visited.visit(start.clone());
    distances.insert(start.clone(), 0);
    queue.push_back(start.clone());

    while let Some(u) = queue.pop_front() {
        let distance = distances[&u];

        for v in graph.successors(&u) {
            if visited.visit(v.clone()) {
                distances.insert(v.clone(), distance + 1);
                queue.push_back(v);
            }
        }
    }

    for (vertex, &expected) in distances.iter() {
        if bfs.color_of(vertex) != Color::Black {
            return Err(TraversalCheckError::Unreached(format!("{vertex:?}")));
        }

        let actual = bfs.distance_to(vertex);
        if actual != expected {
            return Err(TraversalCheckError::NotShortest(
                format!("{vertex:?}"),
                actual,
                expected,
            ));
        }

        if let Some(parent) = bfs.parent_of(vertex) {
            if !graph.has_edge(parent, vertex) {
                return Err(TraversalCheckError::ParentNotPredecessor(
                    format!("{vertex:?}"),
                    format!("{parent:?}"),
                ));
            }

            let parent_distance = bfs.distance_to(parent);
            if actual != parent_distance + 1 {
                return Err(TraversalCheckError::ParentDistance(
                    format!("{vertex:?}"),
                    actual,
                    format!("{parent:?}"),
                    parent_distance,
                ));
            }
        }
    }

    if let Some((vertex, _)) = bfs
        .colors()
        .iter()
        .find(|(vertex, color)| !color.is_white() && !visited.is_visited(vertex))
    {
        return Err(TraversalCheckError::Unreachable(format!("{vertex:?}")));
    }

    Ok(())
}
