use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use opal_constants::constants::DependencyGraph;

/// A straight chain: node N reads node N-1.
fn chain(length: usize) -> DependencyGraph {
    let mut graph = DependencyGraph::new(length);
    for consumer in 1..length {
        graph.add_edge(consumer, consumer - 1);
    }
    graph
}

/// A wide fan: one consumer reading every other node.
fn fan(width: usize) -> DependencyGraph {
    let mut graph = DependencyGraph::new(width);
    for dependency in 1..width {
        graph.add_edge(0, dependency);
    }
    graph
}

/// Layered graph: each node reads a fixed spread of nodes in the layer below.
fn layered(layers: usize, layer_width: usize) -> DependencyGraph {
    let mut graph = DependencyGraph::new(layers * layer_width);
    for layer in 1..layers {
        for slot in 0..layer_width {
            let consumer = layer * layer_width + slot;
            graph.add_edge(consumer, (layer - 1) * layer_width + slot);
            graph.add_edge(consumer, (layer - 1) * layer_width + (slot + 1) % layer_width);
        }
    }
    graph
}

fn schedule_benchmark(c: &mut Criterion) {
    let chain_graph = chain(10_000);
    c.bench_function("schedule_chain_10k", |b| {
        b.iter(|| black_box(chain_graph.schedule()))
    });

    let fan_graph = fan(10_000);
    c.bench_function("schedule_fan_10k", |b| {
        b.iter(|| black_box(fan_graph.schedule()))
    });

    let layered_graph = layered(100, 100);
    c.bench_function("schedule_layered_100x100", |b| {
        b.iter(|| black_box(layered_graph.schedule()))
    });
}

criterion_group!(benches, schedule_benchmark);
criterion_main!(benches);
