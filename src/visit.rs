//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; traversal is not limited by the size of the program stack,
//! * &#128077; the state of an unfinished depth-first traversal is an ordinary
//!   value that can be [inspected](Dfs::stack) between [steps](Dfs::step),
//! * &#128078; there is some extra cost compared to the recursive version,
//!   because each frame on the stack owns a [cursor](crate::core::Successors)
//!   over the successors of its vertex.
//!
//! Successors are always explored in the natural order of the vertex type and
//! whole-graph runs pick the roots in the same order. The results are therefore
//! fully determined by the graph.
//!
//! Both engines borrow the graph for their whole lifetime, so the graph can't
//! be mutated while there is an engine holding results about it. The results
//! accumulate over multiple runs on the same engine, which allows to traverse a
//! forest tree by tree. Call `reset` (or create a new engine) to start over.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, Frame, TimerMode},
};

/// Depth-first search event.
///
/// Returned by [`Dfs::step`] when stepping through a traversal manually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsEvent<T> {
    /// A new vertex was discovered.
    Discover {
        /// Discovered vertex.
        vertex: T,

        /// Discovery time.
        time: usize,
    },

    /// All successors of the vertex have been explored.
    Finish {
        /// Finished vertex.
        vertex: T,

        /// Finishing time.
        time: usize,
    },
}

impl<T> DfsEvent<T> {
    pub fn vertex(&self) -> &T {
        match self {
            DfsEvent::Discover { vertex, .. } | DfsEvent::Finish { vertex, .. } => vertex,
        }
    }

    pub fn time(&self) -> usize {
        match self {
            DfsEvent::Discover { time, .. } | DfsEvent::Finish { time, .. } => *time,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::{Color, Graph},
        infra::{
            proptest::graph,
            testing::{check_bfs, check_dfs, create_example_graph},
        },
    };

    use super::*;

    #[test]
    fn dfs_example_graph() {
        let graph = create_example_graph();

        let mut dfs = Dfs::new(&graph);
        dfs.run();

        assert!(dfs.discovered_at(&"s") < dfs.finished_at(&"s"));
        assert_eq!(check_dfs(&dfs, &graph), Ok(()));

        let times = graph
            .vertices()
            .iter()
            .map(|v| (*v, dfs.discovered_at(v), dfs.finished_at(v)))
            .collect::<Vec<_>>();

        // Roots are taken in alphabetical order: q, r.
        let expected = vec![
            ("q", 1, 16),
            ("r", 17, 20),
            ("s", 2, 7),
            ("t", 8, 15),
            ("u", 18, 19),
            ("v", 3, 6),
            ("w", 4, 5),
            ("x", 9, 12),
            ("y", 13, 14),
            ("z", 10, 11),
        ];

        assert_eq!(times, expected);
    }

    #[test]
    fn bfs_example_graph() {
        let graph = create_example_graph();

        let mut bfs = Bfs::new(&graph);
        bfs.run_from("s");

        assert_eq!(check_bfs(&bfs, &graph, &"s"), Ok(()));
        assert_eq!(bfs.distance_to(&"s"), 0);
        assert_eq!(bfs.distance_to(&"v"), 1);
        assert_eq!(bfs.distance_to(&"w"), 2);

        // Nothing else is reachable from s.
        assert_eq!(bfs.color_of(&"q"), Color::White);
        assert_eq!(bfs.parent_of(&"q"), None);
        assert_eq!(bfs.distance_to(&"q"), 0);
    }

    #[test]
    fn traversal_leaves_graph_untouched() {
        let graph = create_example_graph();
        let before = graph.clone();

        Bfs::new(&graph).run();
        Dfs::new(&graph).run();

        assert_eq!(graph, before);
    }

    #[test]
    fn fresh_engines_deterministic() {
        let graph = create_example_graph();

        let mut first = Dfs::new(&graph);
        first.run();
        let mut second = Dfs::new(&graph);
        second.run();

        assert_eq!(first.discovery_times(), second.discovery_times());
        assert_eq!(first.finish_times(), second.finish_times());
        assert_eq!(first.colors(), second.colors());

        let mut first = Bfs::new(&graph);
        first.run();
        let mut second = Bfs::new(&graph);
        second.run();

        assert_eq!(first.distances(), second.distances());
        assert_eq!(first.parents(), second.parents());
        assert_eq!(first.colors(), second.colors());
    }

    #[test]
    fn insertion_order_irrelevant() {
        let edges = [(3, 1), (1, 2), (2, 3), (3, 4), (4, 0)];

        let mut forward = Graph::new();
        forward.extend_with_vertices(0..5);
        forward.extend_with_edges(edges);

        let mut backward = Graph::new();
        backward.extend_with_vertices((0..5).rev());
        backward.extend_with_edges(edges.into_iter().rev());

        let mut lhs = Dfs::new(&forward);
        lhs.run();
        let mut rhs = Dfs::new(&backward);
        rhs.run();

        assert_eq!(lhs.discovery_times(), rhs.discovery_times());
        assert_eq!(lhs.finish_times(), rhs.finish_times());
    }

    fn petgraph_distances(graph: &Graph<u8>, start: u8) -> Vec<(u8, usize)> {
        use petgraph::graphmap::DiGraphMap;

        let mut other = DiGraphMap::<u8, ()>::new();
        for v in graph.vertices() {
            other.add_node(*v);
        }
        for (u, v) in graph.edges() {
            other.add_edge(*u, *v, ());
        }

        let mut distances = petgraph::algo::dijkstra(&other, start, None, |_| 1usize)
            .into_iter()
            .collect::<Vec<_>>();
        distances.sort();
        distances
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_shortest_distances(graph in graph(any::<u8>()).max_size(64).allow_loops()) {
            for start in graph.vertices() {
                let mut bfs = Bfs::new(&graph);
                bfs.run_from(*start);

                prop_assert_eq!(check_bfs(&bfs, &graph, start), Ok(()));

                let distances = bfs
                    .colors()
                    .iter()
                    .filter(|(_, color)| !color.is_white())
                    .map(|(v, _)| (*v, bfs.distance_to(v)))
                    .collect::<Vec<_>>();

                prop_assert_eq!(distances, petgraph_distances(&graph, *start));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dfs_parenthesis(graph in graph(any::<u8>()).max_size(64).allow_loops()) {
            let mut dfs = Dfs::new(&graph);
            dfs.run();

            prop_assert_eq!(check_dfs(&dfs, &graph), Ok(()));

            for v in graph.vertices() {
                prop_assert_eq!(dfs.color_of(v), Color::Black);
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_covers_graph(graph in graph(any::<u8>()).max_size(64)) {
            let mut bfs = Bfs::new(&graph);
            bfs.run();

            for v in graph.vertices() {
                prop_assert_eq!(bfs.color_of(v), Color::Black);

                if let Some(p) = bfs.parent_of(v) {
                    prop_assert_eq!(bfs.distance_to(v), bfs.distance_to(p) + 1);
                }
            }
        }
    }
}
