#![allow(dead_code)]

use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    // Geometric skipping over the lower triangle of the adjacency matrix.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

/// Random edges oriented randomly, so that the graph is not acyclic.
pub fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize)> {
    let mut edges = RandomEdges::new(vertex_count, density);
    let mut result = Vec::new();

    while let Some((u, v)) = edges.next_edge(rng) {
        if rng.bool() {
            result.push((u, v));
        } else {
            result.push((v, u));
        }
    }

    result
}

pub fn stopa_random(vertex_count: usize, density: f32, rng: &mut Rng) -> stopa::core::Graph<usize> {
    let mut graph = stopa::core::Graph::new();

    graph.extend_with_vertices(0..vertex_count);
    graph.extend_with_edges(random_edges(vertex_count, density, rng));

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v) in random_edges(vertex_count, density, rng) {
        graph.add_edge(
            petgraph::graph::NodeIndex::new(u),
            petgraph::graph::NodeIndex::new(v),
            (),
        );
    }

    graph
}
