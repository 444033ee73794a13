use serde::Serialize;
use strum::IntoEnumIterator;
use valueflow::graph::{PassKind, ValueKind};

use crate::{
    app::GlobalOptions,
    output::{print_output, print_table},
    scenarios::Scenario,
};

#[derive(Debug, Serialize)]
struct KindCount {
    kind: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct StatsOutput {
    scenario: String,
    subgraph_count: usize,
    node_count: usize,
    edge_count: usize,
    nodes_by_kind: Vec<KindCount>,
    edges_by_kind: Vec<KindCount>,
}

pub fn run(scenario: Scenario, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = scenario.record()?;

    let nodes_by_kind = ValueKind::iter()
        .map(|kind| KindCount {
            kind: kind.to_string(),
            count: graph.nodes().filter(|node| node.kind() == kind).count(),
        })
        .collect();
    let edges_by_kind = PassKind::iter()
        .map(|kind| KindCount {
            kind: kind.to_string(),
            count: graph.edges().filter(|(_, edge)| edge.kind() == kind).count(),
        })
        .collect();

    let stats = StatsOutput {
        scenario: scenario.name().to_string(),
        subgraph_count: graph.subgraph_count(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes_by_kind,
        edges_by_kind,
    };
    graph.finish()?;

    print_output(&stats, opts, |stats| {
        println!("Scenario:   {}", stats.scenario);
        println!("Subgraphs:  {}", stats.subgraph_count);
        println!("Nodes:      {}", stats.node_count);
        println!("Edges:      {}", stats.edge_count);

        println!("\nNodes by kind:");
        print_counts(&stats.nodes_by_kind);
        println!("\nEdges by kind:");
        print_counts(&stats.edges_by_kind);
    })
}

fn print_counts(counts: &[KindCount]) {
    let rows = counts
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| vec![entry.kind.clone(), entry.count.to_string()])
        .collect();
    print_table("  ", &["Kind", "Count"], rows, true);
}
