use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mst_compare::generate::{generate_batch, GeneratorConfig};
use mst_compare::{Graph, Kruskal, MstBuilder, MstComparator, Prim};

fn graphs(vertices: usize) -> Vec<Graph<u32>> {
    let config = GeneratorConfig {
        num_graphs: 4,
        min_vertices: vertices,
        max_vertices: vertices,
        seed: Some(0x5eed),
        ..GeneratorConfig::default()
    };
    generate_batch(&config).expect("valid generator config")
}

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_builders");
    for &size in &[30, 300, 1000] {
        let batch = graphs(size);
        group.bench_with_input(BenchmarkId::new("kruskal", size), &batch, |b, batch| {
            b.iter(|| {
                for graph in batch {
                    black_box(Kruskal.build(graph).unwrap());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &batch, |b, batch| {
            b.iter(|| {
                for graph in batch {
                    black_box(Prim.build(graph).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_comparator(c: &mut Criterion) {
    let batch = graphs(300);
    let comparator = MstComparator::new();
    c.bench_function("compare_300", |b| {
        b.iter(|| black_box(comparator.compare(&batch)))
    });
    c.bench_function("compare_par_300", |b| {
        b.iter(|| black_box(comparator.compare_par(&batch)))
    });
}

criterion_group!(benches, bench_builders, bench_comparator);
criterion_main!(benches);
