use subway::{
    repository::Station,
    shared::{Distance, StationId},
    topology::{Error, LineTopology, Segment},
};

fn station(id: u64) -> Station {
    Station::new(StationId(id), format!("S{id}"))
}

fn distance(value: u32) -> Distance {
    Distance::new(value).unwrap()
}

fn segment(up: u64, down: u64, length: u32) -> Segment {
    Segment::new(station(up), station(down), distance(length)).unwrap()
}

fn layout(topology: &LineTopology) -> Vec<(u64, u64, u32)> {
    topology
        .segments()
        .iter()
        .map(|segment| {
            (
                segment.up_station().id.0,
                segment.down_station().id.0,
                segment.distance().as_u32(),
            )
        })
        .collect()
}

fn station_ids(topology: &LineTopology) -> Vec<u64> {
    topology.stations().iter().map(|station| station.id.0).collect()
}

fn assert_chained(topology: &LineTopology) {
    assert_eq!(topology.stations().len(), topology.segments().len() + 1);
    for pair in topology.segments().windows(2) {
        assert_eq!(pair[0].down_station(), pair[1].up_station());
    }
    assert_eq!(topology.validate(), Ok(()));
}

const A: u64 = 1;
const B: u64 = 2;
const C: u64 = 3;
const D: u64 = 4;
const E: u64 = 5;

#[test]
fn empty_topology_is_rejected() {
    assert_eq!(LineTopology::new(Vec::new()), Err(Error::EmptyLine));
}

#[test]
fn single_segment_line() {
    let topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    assert_eq!(layout(&topology), vec![(A, B, 5)]);
    assert_eq!(station_ids(&topology), vec![A, B]);
    assert!(!topology.is_removable());
}

#[test]
fn extend_past_tail() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    topology.insert(station(B), station(C), distance(3)).unwrap();

    assert_eq!(layout(&topology), vec![(A, B, 5), (B, C, 3)]);
    assert_eq!(station_ids(&topology), vec![A, B, C]);
    assert_chained(&topology);
}

#[test]
fn extend_before_head() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    topology.insert(station(C), station(A), distance(7)).unwrap();

    assert_eq!(layout(&topology), vec![(C, A, 7), (A, B, 5)]);
    assert_eq!(station_ids(&topology), vec![C, A, B]);
    assert_chained(&topology);
}

#[test]
fn split_downstream_of_anchor() {
    let mut topology = LineTopology::new(vec![segment(A, B, 5), segment(B, C, 3)]).unwrap();
    topology.insert(station(A), station(D), distance(2)).unwrap();

    assert_eq!(layout(&topology), vec![(A, D, 2), (D, B, 3), (B, C, 3)]);
    assert_eq!(station_ids(&topology), vec![A, D, B, C]);
    assert_chained(&topology);
}

#[test]
fn split_upstream_of_anchor() {
    let mut topology = LineTopology::new(vec![segment(A, B, 5), segment(B, C, 3)]).unwrap();
    topology.insert(station(D), station(C), distance(1)).unwrap();

    assert_eq!(layout(&topology), vec![(A, B, 5), (B, D, 2), (D, C, 1)]);
    assert_eq!(station_ids(&topology), vec![A, B, D, C]);
    assert_chained(&topology);
}

#[test]
fn insert_with_both_stations_registered() {
    let mut topology = LineTopology::new(vec![segment(A, B, 5), segment(B, C, 3)]).unwrap();
    let result = topology.insert(station(A), station(C), distance(1));

    assert_eq!(result, Err(Error::BothRegistered));
    assert_eq!(layout(&topology), vec![(A, B, 5), (B, C, 3)]);
}

#[test]
fn insert_with_neither_station_registered() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    let result = topology.insert(station(D), station(E), distance(1));

    assert_eq!(result, Err(Error::NeitherRegistered));
    assert_eq!(layout(&topology), vec![(A, B, 5)]);
}

#[test]
fn split_longer_than_segment() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    let result = topology.insert(station(A), station(C), distance(6));

    assert_eq!(
        result,
        Err(Error::DistanceTooLong {
            requested: distance(6),
            available: distance(5),
        })
    );
    assert_eq!(layout(&topology), vec![(A, B, 5)]);
}

#[test]
fn split_equal_to_segment() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();

    let result = topology.insert(station(A), station(C), distance(5));
    assert!(matches!(result, Err(Error::DistanceTooLong { .. })));

    let result = topology.insert(station(C), station(B), distance(5));
    assert!(matches!(result, Err(Error::DistanceTooLong { .. })));

    assert_eq!(layout(&topology), vec![(A, B, 5)]);
}

#[test]
fn extension_is_not_bounded_by_existing_segments() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    topology.insert(station(B), station(C), distance(50)).unwrap();
    assert_eq!(layout(&topology), vec![(A, B, 5), (B, C, 50)]);
}

#[test]
fn remove_interior_station() {
    let mut topology = LineTopology::new(vec![
        segment(A, D, 2),
        segment(D, B, 3),
        segment(B, C, 3),
    ])
    .unwrap();
    topology.remove(&station(D)).unwrap();

    assert_eq!(layout(&topology), vec![(A, B, 5), (B, C, 3)]);
    assert_chained(&topology);
}

#[test]
fn remove_interior_station_too_long_to_merge() {
    let mut topology = LineTopology::single(station(A), station(B), distance(3_000_000_000)).unwrap();
    topology
        .insert(station(B), station(C), distance(3_000_000_000))
        .unwrap();
    let result = topology.remove(&station(B));

    assert_eq!(
        result,
        Err(Error::DistanceOverflow {
            upper: distance(3_000_000_000),
            lower: distance(3_000_000_000),
        })
    );
    assert_eq!(
        layout(&topology),
        vec![(A, B, 3_000_000_000), (B, C, 3_000_000_000)]
    );
    assert_eq!(topology.total_distance(), 6_000_000_000);
}

#[test]
fn remove_head_station() {
    let mut topology = LineTopology::new(vec![segment(A, B, 5), segment(B, C, 3)]).unwrap();
    topology.remove(&station(A)).unwrap();

    assert_eq!(layout(&topology), vec![(B, C, 3)]);
    assert_eq!(station_ids(&topology), vec![B, C]);
}

#[test]
fn remove_tail_station() {
    let mut topology = LineTopology::new(vec![segment(A, B, 5), segment(B, C, 3)]).unwrap();
    topology.remove(&station(C)).unwrap();

    assert_eq!(layout(&topology), vec![(A, B, 5)]);
    assert_eq!(station_ids(&topology), vec![A, B]);
}

#[test]
fn remove_unknown_station() {
    let mut topology = LineTopology::new(vec![segment(A, B, 5), segment(B, C, 3)]).unwrap();
    let result = topology.remove(&station(E));

    assert_eq!(result, Err(Error::StationNotFound(StationId(E))));
    assert_eq!(layout(&topology), vec![(A, B, 5), (B, C, 3)]);
}

#[test]
fn remove_from_single_segment_line_empties_it() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    assert!(!topology.is_removable());

    topology.remove(&station(A)).unwrap();
    assert!(topology.is_empty());
    assert!(topology.stations().is_empty());
}

#[test]
fn removable_only_with_more_than_one_segment() {
    let mut topology = LineTopology::single(station(A), station(B), distance(5)).unwrap();
    assert!(!topology.is_removable());
    topology.insert(station(B), station(C), distance(2)).unwrap();
    assert!(topology.is_removable());
    topology.remove(&station(B)).unwrap();
    assert!(!topology.is_removable());
    assert_eq!(layout(&topology), vec![(A, C, 7)]);
}

#[test]
fn insert_then_remove_restores_layout() {
    let original = vec![segment(A, B, 5), segment(B, C, 3)];
    let requests = [
        (A, D, 2),
        (D, B, 4),
        (C, D, 9),
        (D, A, 1),
        (B, D, 1),
        (D, C, 2),
    ];
    for (up, down, length) in requests {
        let mut topology = LineTopology::new(original.clone()).unwrap();
        topology.insert(station(up), station(down), distance(length)).unwrap();
        assert_chained(&topology);
        assert_eq!(topology.len(), original.len() + 1);

        topology.remove(&station(D)).unwrap();
        assert_eq!(topology.segments(), original.as_slice());
    }
}

#[test]
fn long_line_stays_chained() {
    let mut topology = LineTopology::single(station(A), station(B), distance(100)).unwrap();
    topology.insert(station(B), station(C), distance(40)).unwrap();
    topology.insert(station(D), station(A), distance(10)).unwrap();
    topology.insert(station(A), station(E), distance(30)).unwrap();
    assert_chained(&topology);
    assert_eq!(station_ids(&topology), vec![D, A, E, B, C]);
    assert_eq!(topology.total_distance(), 150);

    topology.remove(&station(A)).unwrap();
    assert_chained(&topology);
    assert_eq!(layout(&topology), vec![(D, E, 40), (E, B, 70), (B, C, 40)]);
}

#[test]
fn validate_detects_broken_chain() {
    let topology = LineTopology::new(vec![segment(A, B, 5), segment(C, D, 3)]).unwrap();
    assert_eq!(topology.validate(), Err(Error::Broken { index: 1 }));
}

#[test]
fn validate_detects_cycle() {
    let topology = LineTopology::new(vec![
        segment(A, B, 5),
        segment(B, C, 3),
        segment(C, A, 2),
    ])
    .unwrap();
    assert_eq!(topology.validate(), Err(Error::Branching(StationId(A))));
}

#[test]
fn segment_rejects_same_station() {
    let result = Segment::new(station(A), station(A), distance(1));
    assert_eq!(result, Err(Error::SameStation(StationId(A))));
}
