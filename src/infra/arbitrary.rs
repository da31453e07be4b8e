use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::core::{id::VertexType, Graph};

#[derive(Debug, Arbitrary, Clone, PartialEq, Eq)]
pub enum MutOp<T> {
    AddVertex(T),
    AddEdge(T, T),
    AddEdgeConnecting(T, T),
}

impl<T: VertexType> MutOp<T> {
    /// Applies the operation and returns whether the graph changed.
    pub fn apply(self, graph: &mut Graph<T>) -> bool {
        match self {
            MutOp::AddVertex(vertex) => graph.add_vertex(vertex),
            MutOp::AddEdge(src, dst) => graph.add_edge(src, dst),
            MutOp::AddEdgeConnecting(src, dst) => {
                let vertex_count = graph.vertex_count();
                graph.add_edge_connecting(src, dst) || graph.vertex_count() != vertex_count
            }
        }
    }
}

#[derive(Arbitrary, Clone)]
pub struct MutOpsSeq<T>(pub Vec<MutOp<T>>);

impl<T> IntoIterator for MutOpsSeq<T> {
    type Item = MutOp<T>;
    type IntoIter = std::vec::IntoIter<MutOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: VertexType> MutOpsSeq<T> {
    pub fn replay(self, graph: &mut Graph<T>) {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::AddEdge(src, dst) => println!("graph.add_edge({src:?}, {dst:?});"),
                MutOp::AddEdgeConnecting(src, dst) => {
                    println!("graph.add_edge_connecting({src:?}, {dst:?});")
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<T: fmt::Debug> fmt::Debug for MutOpsSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

impl<'a, T> Arbitrary<'a> for Graph<T>
where
    T: VertexType + Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut graph = Graph::new();

        for op in MutOpsSeq::<T>::arbitrary(u)? {
            op.apply(&mut graph);
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::check_consistency;

    use super::*;

    #[test]
    fn apply_reports_changes() {
        let mut graph = Graph::new();

        assert!(MutOp::AddVertex(1u8).apply(&mut graph));
        assert!(!MutOp::AddVertex(1u8).apply(&mut graph));
        assert!(!MutOp::AddEdge(2u8, 1).apply(&mut graph));
        assert!(MutOp::AddEdgeConnecting(2u8, 1).apply(&mut graph));
        assert!(!MutOp::AddEdgeConnecting(2u8, 1).apply(&mut graph));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn arbitrary_graph_consistent() {
        let data = (0..=255u8).cycle().take(4096).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let graph = Graph::<u8>::arbitrary(&mut u).unwrap();

        assert_eq!(check_consistency(&graph), Ok(()));
    }
}
