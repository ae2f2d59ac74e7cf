use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tiergraph_layered::graphlib::{Graph, GraphOptions};
use tiergraph_layered::{EdgeLabel, LayoutGraph, NodeLabel, layout, rank};

/// A three-tier forest: `groups` roots, each with `fanout` children that each own `fanout`
/// leaves, plus relationship edges hopping between children of neighbouring groups.
fn tiered_graph(groups: usize, fanout: usize) -> LayoutGraph {
    let mut g: LayoutGraph = Graph::new(GraphOptions { multigraph: true });
    for c in 0..groups {
        let cat = format!("c{c}");
        g.set_node(cat.clone(), NodeLabel::sized(420.0, 140.0).with_tier(0));
        for s in 0..fanout {
            let sub = format!("c{c}_s{s}");
            g.set_node(sub.clone(), NodeLabel::sized(380.0, 120.0).with_tier(1));
            g.set_edge_with_label(cat.clone(), sub.clone(), EdgeLabel::new(2.0, 1));
            for l in 0..fanout {
                let leaf = format!("c{c}_s{s}_l{l}");
                g.set_node(leaf.clone(), NodeLabel::sized(350.0, 100.0).with_tier(2));
                g.set_edge_with_label(sub.clone(), leaf, EdgeLabel::new(2.0, 1));
            }
            if c + 1 < groups {
                let other = format!("c{}_s{}", c + 1, (s + 1) % fanout);
                g.set_edge_with_label(sub, other, EdgeLabel::new(1.0, 2));
            }
        }
    }
    g
}

fn bench_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered");
    group.measurement_time(Duration::from_secs(10));

    for (name, groups, fanout) in [("g4_f3", 4usize, 3usize), ("g10_f4", 10, 4), ("g20_f5", 20, 5)] {
        let g = tiered_graph(groups, fanout);
        group.bench_with_input(BenchmarkId::new("rank::network_simplex", name), &g, |b, g| {
            b.iter_batched(
                || g.clone(),
                |mut g| {
                    rank::network_simplex(black_box(&mut g));
                    black_box(g.node_count());
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("layout", name), &g, |b, g| {
            b.iter_batched(
                || g.clone(),
                |mut g| {
                    layout(black_box(&mut g));
                    black_box(g.node_count());
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layered);
criterion_main!(benches);
