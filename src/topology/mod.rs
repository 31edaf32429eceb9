mod insert;
mod remove;
mod segment;

pub use segment::*;

use crate::{
    repository::Station,
    shared::{Distance, StationId},
};
use std::collections::HashSet;
use thiserror::Error;

/// A line needs at least this many segments to exist at all.
const MIN_SEGMENTS: usize = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("A line must contain at least one segment")]
    EmptyLine,
    #[error("Both stations are already registered on the line")]
    BothRegistered,
    #[error("Neither station is registered on the line")]
    NeitherRegistered,
    #[error("Cannot carve {requested} out of a segment of length {available}")]
    DistanceTooLong {
        requested: Distance,
        available: Distance,
    },
    #[error("Joining segments of length {upper} and {lower} is too long")]
    DistanceOverflow { upper: Distance, lower: Distance },
    #[error("Station {0} is not registered on the line")]
    StationNotFound(StationId),
    #[error("Segment cannot start and end at station {0}")]
    SameStation(StationId),
    #[error("Segment {index} does not continue from the previous segment")]
    Broken { index: usize },
    #[error("Station {0} appears more than once along the line")]
    Branching(StationId),
}

/// The ordered track layout of a single line.
///
/// Segments are kept head to tail, so the down station of every segment is the
/// up station of the next one. Every edit builds the new sequence first and only
/// swaps it in once it succeeded, leaving the topology untouched on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    segments: Vec<Segment>,
}

impl LineTopology {
    /// Wraps segments loaded from storage.
    ///
    /// The segments are expected to already be ordered and chained, only
    /// emptiness is checked here. Use [`LineTopology::validate`] when the
    /// source is not trusted.
    pub fn new(segments: Vec<Segment>) -> Result<Self, self::Error> {
        if segments.is_empty() {
            return Err(self::Error::EmptyLine);
        }
        Ok(Self { segments })
    }

    /// Creates the topology of a brand new line with a single segment.
    pub fn single(
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, self::Error> {
        let segment = Segment::new(up_station, down_station, distance)?;
        Ok(Self {
            segments: vec![segment],
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether a station can be removed without leaving the line with no segments.
    pub fn is_removable(&self) -> bool {
        self.segments.len() > MIN_SEGMENTS
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.has_station(station))
    }

    /// Stations from head to tail. Always one longer than [`LineTopology::segments`]
    /// unless the line has been emptied.
    pub fn stations(&self) -> Vec<Station> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };
        std::iter::once(first.up_station())
            .chain(self.segments.iter().map(Segment::down_station))
            .cloned()
            .collect()
    }

    pub fn total_distance(&self) -> u64 {
        self.segments
            .iter()
            .map(|segment| u64::from(segment.distance().as_u32()))
            .sum()
    }

    pub fn head(&self) -> Option<&Station> {
        self.segments.first().map(Segment::up_station)
    }

    pub fn tail(&self) -> Option<&Station> {
        self.segments.last().map(Segment::down_station)
    }

    /// Checks that the segments form a single simple path.
    pub fn validate(&self) -> Result<(), self::Error> {
        if self.segments.is_empty() {
            return Err(self::Error::EmptyLine);
        }
        if let Some(index) = self
            .segments
            .windows(2)
            .position(|pair| pair[0].down_station() != pair[1].up_station())
        {
            return Err(self::Error::Broken { index: index + 1 });
        }
        let mut seen = HashSet::with_capacity(self.segments.len() + 1);
        for station in self.stations() {
            if !seen.insert(station.id) {
                return Err(self::Error::Branching(station.id));
            }
        }
        Ok(())
    }

    /// Index of the segment leaving `station`.
    fn outgoing(&self, station: &Station) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.is_up_station(station))
    }

    /// Index of the segment arriving at `station`.
    fn incoming(&self, station: &Station) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.is_down_station(station))
    }
}

/// Builds a new sequence where `count` segments starting at `index` are
/// replaced by `with`.
fn replaced<I>(segments: &[Segment], index: usize, count: usize, with: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    segments[..index]
        .iter()
        .cloned()
        .chain(with)
        .chain(segments[index + count..].iter().cloned())
        .collect()
}
