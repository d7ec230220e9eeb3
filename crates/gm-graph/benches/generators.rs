use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gm_graph::{complete, cycle, line_graph, Graph, GraphConfig, Layout};

fn generator_bench(c: &mut Criterion) {
    let layout = Layout::default();
    c.bench_function("cycle_200", |b| {
        b.iter(|| {
            let mut graph = Graph::new("bench", GraphConfig::seeded(42));
            cycle(&mut graph, 200, 0, 1, &layout).unwrap();
            black_box(graph);
        });
    });
    c.bench_function("complete_40", |b| {
        b.iter(|| {
            let mut graph = Graph::new("bench", GraphConfig::seeded(42));
            complete(&mut graph, 40, &layout).unwrap();
            black_box(graph);
        });
    });
}

fn line_graph_bench(c: &mut Criterion) {
    let mut k12 = Graph::new("k12", GraphConfig::seeded(7));
    complete(&mut k12, 12, &Layout::default()).unwrap();
    c.bench_function("line_graph_k12", |b| {
        b.iter(|| black_box(line_graph(&k12).unwrap()));
    });
}

criterion_group!(benches, generator_bench, line_graph_bench);
criterion_main!(benches);
