use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gm_graph::{cycle, generalized_petersen, Graph, GraphConfig, Layout};
use gm_iso::is_isomorphic;

fn search_bench(c: &mut Criterion) {
    let layout = Layout::default();
    let mut left = Graph::new("left", GraphConfig::seeded(1));
    cycle(&mut left, 8, 0, 1, &layout).unwrap();
    let mut right = Graph::new("right", GraphConfig::seeded(2));
    cycle(&mut right, 8, 0, 3, &layout).unwrap();
    c.bench_function("iso_cycle_8", |b| {
        b.iter(|| black_box(is_isomorphic(&left, &right)));
    });

    let mut prism = Graph::new("prism", GraphConfig::seeded(3));
    generalized_petersen(&mut prism, 4, 1, &layout).unwrap();
    c.bench_function("iso_cube_self", |b| {
        b.iter(|| black_box(is_isomorphic(&prism, &prism)));
    });
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
