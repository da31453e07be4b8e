#![no_main]

use libfuzzer_sys::fuzz_target;

use stopa::{
    core::Graph,
    infra::{
        arbitrary::MutOpsSeq,
        testing::{check_bfs, check_consistency, check_dfs},
    },
    visit::{Bfs, Dfs},
};

fuzz_target!(|ops: MutOpsSeq<u8>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    let mut dfs = Dfs::new(&graph);
    dfs.run();
    check_dfs(&dfs, &graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    if let Some(start) = graph.vertices().first() {
        let mut bfs = Bfs::new(&graph);
        bfs.run_from(*start);
        check_bfs(&bfs, &graph, start)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
