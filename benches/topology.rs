use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use subway::{
    repository::Station,
    shared::{Distance, StationId},
    topology::{LineTopology, Segment},
};

const STATIONS: u64 = 500;

fn station(id: u64) -> Station {
    Station::new(StationId(id), format!("Station {id}"))
}

fn long_line() -> LineTopology {
    let segments = (1..STATIONS)
        .filter_map(|id| {
            let distance = Distance::new(10)?;
            Segment::new(station(id), station(id + 1), distance).ok()
        })
        .collect();
    LineTopology::new(segments).unwrap()
}

fn split_middle(topology: &LineTopology) {
    let mut topology = topology.clone();
    let _ = black_box(topology.insert(
        station(STATIONS / 2),
        station(STATIONS + 1),
        Distance::new(4).unwrap(),
    ));
}

fn extend_tail(topology: &LineTopology) {
    let mut topology = topology.clone();
    let _ = black_box(topology.insert(
        station(STATIONS),
        station(STATIONS + 1),
        Distance::new(4).unwrap(),
    ));
}

fn merge_middle(topology: &LineTopology) {
    let mut topology = topology.clone();
    let _ = black_box(topology.remove(&station(STATIONS / 2)));
}

fn stations(topology: &LineTopology) {
    let _ = black_box(topology.stations());
}

fn criterion_benchmark(c: &mut Criterion) {
    let topology = long_line();

    let mut group = c.benchmark_group("Topology");

    group.bench_function("Split middle segment", |b| {
        b.iter(|| split_middle(&topology))
    });

    group.bench_function("Extend past tail", |b| b.iter(|| extend_tail(&topology)));

    group.bench_function("Merge middle station", |b| {
        b.iter(|| merge_middle(&topology))
    });

    group.bench_function("Ordered stations", |b| b.iter(|| stations(&topology)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
