#![no_main]

use libfuzzer_sys::fuzz_target;
use valueflow::{
    graph::{EdgeId, NodeId, PassKind, SubgraphId, ValueKind},
    Graph,
};

// Every input byte pair is one operation; the graph must never panic outside teardown and the
// rendered document must always mirror the store.
fuzz_target!(|data: &[u8]| {
    let mut graph = Graph::new();

    for op in data.chunks(2) {
        let arg = op.get(1).copied().unwrap_or(0);
        match op[0] % 6 {
            0 => {
                let kind = ValueKind::from_repr(arg % 4).unwrap_or(ValueKind::Temporary);
                let _ = graph.create_node(kind, "");
            }
            1 => {
                let count = graph.node_count().max(1);
                let from = NodeId::new(usize::from(arg) % count);
                let to = NodeId::new(usize::from(arg >> 4) % count);
                let kind = PassKind::from_repr(arg % 8).unwrap_or(PassKind::Invalid);
                graph.create_edge(from, to, kind);
            }
            2 => {
                let _ = graph.enter_call(format!("call{arg}"));
            }
            3 => {
                let _ = graph.leave_call();
            }
            4 => {
                let parent = SubgraphId::new(usize::from(arg));
                let _ = graph.create_subgraph_in(parent, "");
            }
            _ => {
                let _ = graph.node(NodeId::new(usize::from(arg)));
                let _ = graph.edge(EdgeId::new(usize::from(arg)));
            }
        }
    }

    let dot = graph.to_dot();
    let clusters = dot.matches("subgraph cluster_").count();
    assert_eq!(clusters, graph.subgraph_count());

    while graph.depth() > 1 {
        let _ = graph.leave_call();
    }
    let _ = graph.finish();
});
