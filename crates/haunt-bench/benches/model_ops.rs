//! Criterion micro-benchmarks for the individual model operators.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use haunt_core::Cell;
use haunt_model::{Belief, EmissionModel, IsolatedCellPolicy, ObservationModel, TransitionModel};
use haunt_space::{GridTopology, OccupancyGrid};

fn topology(side: u32) -> Arc<GridTopology> {
    Arc::new(GridTopology::from_occupancy(&OccupancyGrid::open(side, side).unwrap()))
}

fn bench_topology_build(c: &mut Criterion) {
    let grid = OccupancyGrid::open(128, 128).unwrap();
    c.bench_function("topology_from_occupancy_128", |b| {
        b.iter(|| black_box(GridTopology::from_occupancy(black_box(&grid))));
    });
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    for side in [32u32, 128] {
        let topo = topology(side);
        let transition = TransitionModel::new(topo.clone(), IsolatedCellPolicy::SelfLoop);
        let mut belief = Belief::uniform(topo);
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| black_box(belief.predict(&transition)));
        });
    }
    group.finish();
}

fn bench_emission_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission_rebuild");
    let topo = topology(64);
    let center = Cell::new(32, 32);
    for range in [2u32, 8, 16] {
        let mut observation = ObservationModel::new(topo.clone(), range);
        observation.recompute(center);
        let mut emission = EmissionModel::new();
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |b, _| {
            b.iter(|| emission.rebuild(&topo, &observation, black_box(Cell::new(33, 32))));
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let topo = topology(64);
    let mut observation = ObservationModel::new(topo.clone(), 8);
    let agent = Cell::new(33, 32);
    observation.recompute(Cell::new(32, 32));
    let mut emission = EmissionModel::new();
    emission.rebuild(&topo, &observation, agent);
    let evidence = observation.detect(agent);
    let prior = Belief::uniform(topo);
    c.bench_function("update_64_range8", |b| {
        b.iter(|| {
            let mut belief = prior.clone();
            black_box(belief.update(&emission, black_box(evidence)))
        });
    });
}

criterion_group!(
    benches,
    bench_topology_build,
    bench_predict,
    bench_emission_rebuild,
    bench_update,
);
criterion_main!(benches);
