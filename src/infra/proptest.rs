use std::fmt;

use proptest::{
    collection::{btree_set, vec},
    strategy::{BoxedStrategy, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::core::{id::VertexType, Graph};

/// Strategy generating graphs with vertices drawn from the given strategy.
///
/// All endpoints of generated edges are declared vertices.
pub fn graph<S>(vertex: S) -> GraphStrategy<S>
where
    S: Strategy,
    S::Value: VertexType,
{
    GraphStrategy::new(vertex)
}

#[derive(Debug, Clone)]
pub struct StrategyParams {
    max_size: usize,
    density: f64,
    allow_loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            density: 0.1,
            allow_loops: false,
        }
    }
}

impl StrategyParams {
    /// Maximum number of vertices.
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Probability of an edge between two distinct vertices.
    pub fn density(self, density: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&density),
            "density must be a probability"
        );
        Self { density, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }
}

pub struct GraphStrategy<S> {
    vertex: S,
    params: StrategyParams,
}

impl<S: fmt::Debug> fmt::Debug for GraphStrategy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("vertex", &self.vertex)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<S> GraphStrategy<S>
where
    S: Strategy,
    S::Value: VertexType,
{
    pub fn new(vertex: S) -> Self {
        Self::with_params(vertex, StrategyParams::default())
    }

    pub fn with_params(vertex: S, params: StrategyParams) -> Self {
        Self { vertex, params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph(any::<u8>()).max_size(100).density(0.5)`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(density, density: f64);
    delegate_builder_fn!(allow_loops);
}

impl<S> GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: VertexType + 'static,
{
    // Vertices first, then one coin flip per ordered pair of vertices.
    fn compose(&self) -> BoxedStrategy<Graph<S::Value>> {
        let StrategyParams {
            max_size,
            density,
            allow_loops,
        } = self.params.clone();

        btree_set(self.vertex.clone(), 0..=max_size)
            .prop_flat_map(move |vertices| {
                let vertices = vertices.into_iter().collect::<Vec<_>>();
                let n = vertices.len();

                vec(proptest::bool::weighted(density), n * n).prop_map(move |mask| {
                    let mut graph = Graph::new();
                    graph.extend_with_vertices(vertices.iter().cloned());

                    for (i, u) in vertices.iter().enumerate() {
                        for (j, v) in vertices.iter().enumerate() {
                            if (i != j || allow_loops) && mask[i * n + j] {
                                graph.add_edge(u.clone(), v.clone());
                            }
                        }
                    }

                    graph
                })
            })
            .boxed()
    }
}

impl<S> Strategy for GraphStrategy<S>
where
    S: Strategy + Clone + 'static,
    S::Value: VertexType + 'static,
{
    type Tree = Box<dyn ValueTree<Value = Graph<S::Value>>>;
    type Value = Graph<S::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.compose().new_tree(runner)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::infra::testing::check_consistency;

    use super::*;

    proptest! {
        #[test]
        fn proptest_generated_graph_consistent(graph in graph(any::<u16>()).max_size(16).density(0.3)) {
            prop_assert!(graph.vertex_count() <= 16);
            prop_assert_eq!(check_consistency(&graph), Ok(()));

            for (u, v) in graph.edges() {
                prop_assert!(graph.contains_vertex(v));
                prop_assert_ne!(u, v);
            }
        }
    }
}
