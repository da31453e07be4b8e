use stopa::{
    infra::testing::create_example_graph,
    visit::{Bfs, Dfs},
};
use tracing_subscriber::EnvFilter;

fn main() {
    // Use `RUST_LOG=stopa=trace` to see every discovery and finish.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let graph = create_example_graph();

    let mut dfs = Dfs::new(&graph);
    dfs.run();

    for vertex in graph.vertices() {
        println!(
            "{vertex}(d: {}, f: {})",
            dfs.discovered_at(vertex),
            dfs.finished_at(vertex)
        );
    }

    println!();

    let mut bfs = Bfs::new(&graph);
    bfs.run_from("q");

    for vertex in graph.vertices() {
        match bfs.path_to(vertex) {
            Some(path) => println!(
                "{vertex}: {} hops via {}",
                bfs.distance_to(vertex),
                path.join(" -> ")
            ),
            None => println!("{vertex}: unreachable from q"),
        }
    }
}
