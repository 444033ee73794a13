//! Benchmarks for recording and rendering.
//!
//! Measures the two phases of a recorded session separately:
//! - Recording: node/edge appends under nested call scopes
//! - Rendering: DOT serialization of an already recorded graph

extern crate valueflow;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use valueflow::{
    graph::{PassKind, ValueKind},
    Graph,
};

/// Records `calls` sibling calls, each nesting `depth` scopes with two nodes and a move per scope.
fn record(calls: usize, depth: usize) -> Graph {
    let mut graph = Graph::new();
    let mut previous = graph.create_node(ValueKind::LValue, "input").unwrap();

    for call in 0..calls {
        for level in 0..depth {
            graph.enter_call(format!("call{call}_{level}")).unwrap();
            let local = graph.create_node(ValueKind::LValue, "").unwrap();
            let temporary = graph.create_node(ValueKind::Temporary, "").unwrap();
            graph.create_edge(previous, local, PassKind::ConstLVRef);
            graph.create_edge(local, temporary, PassKind::Move);
            previous = temporary;
        }
        for _ in 0..depth {
            graph.leave_call().unwrap();
        }
    }

    graph
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");
    for calls in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(calls), &calls, |b, &calls| {
            b.iter(|| {
                let graph = record(black_box(calls), 4);
                black_box(graph.node_count());
                graph.finish().unwrap();
            });
        });
    }
    group.finish();
}

fn bench_to_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_dot");
    for calls in [10, 100, 1000] {
        let graph = record(calls, 4);
        group.bench_with_input(BenchmarkId::from_parameter(calls), &graph, |b, graph| {
            b.iter(|| black_box(graph.to_dot()));
        });
    }
    group.finish();
}

fn bench_dump_sink(c: &mut Criterion) {
    let graph = record(100, 8);
    let mut sink = Vec::with_capacity(1 << 20);

    c.bench_function("dump_vec_sink", |b| {
        b.iter(|| {
            sink.clear();
            graph.dump(&mut sink).unwrap();
            black_box(sink.len())
        });
    });
}

criterion_group!(benches, bench_record, bench_to_dot, bench_dump_sink);
criterion_main!(benches);
