use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use strata::config::{LayoutConfig, MAX_SIMPLEX_ITERATIONS, Ranker};
use strata::graph::{Graph, LayoutEdge, Size};
use strata::{apply_layout, rank};

#[derive(Debug, Clone)]
struct DagShape {
    node_ids: Vec<String>,
    /// `(from, to, minlen, weight)`
    edges: Vec<(usize, usize, u32, f64)>,
}

impl DagShape {
    fn build(&self) -> Graph {
        let mut g = Graph::new();
        for id in &self.node_ids {
            g.add_node(id.clone(), Size::new(60.0, 30.0));
        }
        for (i, &(from, to, minlen, weight)) in self.edges.iter().enumerate() {
            g.add_layout_edge(
                LayoutEdge::new(
                    format!("e{i}"),
                    self.node_ids[from].clone(),
                    self.node_ids[to].clone(),
                )
                .with_minlen(minlen)
                .with_weight(weight),
            );
        }
        g
    }
}

fn dag_shape(name: &str, node_count: usize, fanout: usize) -> DagShape {
    let node_ids: Vec<String> = (0..node_count).map(|i| format!("{name}_n{i}")).collect();
    let mut edges: Vec<(usize, usize, u32, f64)> = Vec::new();

    // Spine.
    for i in 0..node_count.saturating_sub(1) {
        edges.push((i, i + 1, 1, 2.0));
    }

    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i + k;
            if to >= node_count {
                break;
            }
            edges.push((i, to, 1, 1.0));
        }
        let to = i + 10;
        if to < node_count {
            edges.push((i, to, 2, 0.5));
        }
    }

    DagShape { node_ids, edges }
}

const CASES: [(&str, usize, usize); 3] = [
    ("dag_50_f3", 50, 3),
    ("dag_200_f4", 200, 4),
    ("dag_400_f4", 400, 4),
];

fn bench_network_simplex(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_simplex");
    group.measurement_time(Duration::from_secs(10));

    for (name, nodes, fanout) in CASES {
        let shape = dag_shape(name, nodes, fanout);
        group.bench_with_input(BenchmarkId::new("rank", name), &shape, |b, shape| {
            b.iter_batched(
                || shape.build(),
                |mut g| {
                    black_box(rank::rank(
                        black_box(&mut g),
                        Ranker::NetworkSimplex,
                        MAX_SIMPLEX_ITERATIONS,
                    ))
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = LayoutConfig::default();

    for (name, nodes, fanout) in CASES {
        let shape = dag_shape(name, nodes, fanout);
        group.bench_with_input(BenchmarkId::new("apply_layout", name), &shape, |b, shape| {
            b.iter_batched(
                || shape.build(),
                |mut g| black_box(apply_layout(black_box(&mut g), &config)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_network_simplex, bench_layout);
criterion_main!(benches);
