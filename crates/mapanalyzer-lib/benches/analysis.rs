use criterion::{criterion_group, criterion_main, Criterion};
use mapanalyzer_lib::{load_roadmap, Road, RoadMap};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_map.tsv")
}

static SAMPLE: Lazy<RoadMap> = Lazy::new(|| load_roadmap(&fixture_path()).expect("fixture loads"));

/// Square grid of `side * side` points with deterministic pseudo-random distances.
static GRID: Lazy<RoadMap> = Lazy::new(|| {
    let side = 60u64;
    let mut roads = Vec::new();
    let mut id = 0;
    let name = |x: u64, y: u64| format!("{x}:{y}");
    for x in 0..side {
        for y in 0..side {
            if x + 1 < side {
                id += 1;
                roads.push(Road::new(name(x, y), name(x + 1, y), (x * 7 + y * 13) % 50 + 1, id));
            }
            if y + 1 < side {
                id += 1;
                roads.push(Road::new(name(x, y), name(x, y + 1), (x * 11 + y * 5) % 50 + 1, id));
            }
        }
    }
    RoadMap::new(name(0, 0), name(side - 1, side - 1), roads)
});

fn benchmark_analysis(c: &mut Criterion) {
    c.bench_function("analyze_sample_map", |b| {
        let map = &*SAMPLE;
        b.iter(|| {
            let analysis = map.analyze().expect("analysis succeeds");
            black_box(analysis.route_ratio)
        });
    });

    c.bench_function("fastest_route_grid", |b| {
        let map = &*GRID;
        b.iter(|| {
            let route = map.fastest_route().expect("route exists");
            black_box(route.total_distance())
        });
    });

    c.bench_function("barely_connected_grid", |b| {
        let map = &*GRID;
        b.iter(|| {
            let forest = map.barely_connected_map().expect("forest builds");
            black_box(forest.component_count())
        });
    });
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
