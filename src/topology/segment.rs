use crate::{repository::Station, shared::Distance, topology};

/// A directed piece of track from `up_station` to `down_station`.
///
/// Segments are never edited in place. Splitting or merging track always
/// builds new segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Segment {
    pub fn new(
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, topology::Error> {
        if up_station == down_station {
            return Err(topology::Error::SameStation(up_station.id));
        }
        Ok(Self {
            up_station,
            down_station,
            distance,
        })
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn has_station(&self, station: &Station) -> bool {
        self.is_up_station(station) || self.is_down_station(station)
    }

    pub fn is_up_station(&self, station: &Station) -> bool {
        self.up_station == *station
    }

    pub fn is_down_station(&self, station: &Station) -> bool {
        self.down_station == *station
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::StationId;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    #[test]
    fn segment_endpoints() {
        let gangnam = station(1, "Gangnam");
        let yeoksam = station(2, "Yeoksam");
        let seolleung = station(3, "Seolleung");
        let segment =
            Segment::new(gangnam.clone(), yeoksam.clone(), Distance::new(10).unwrap()).unwrap();

        assert!(segment.has_station(&gangnam));
        assert!(segment.has_station(&yeoksam));
        assert!(!segment.has_station(&seolleung));
        assert!(segment.is_up_station(&gangnam));
        assert!(!segment.is_up_station(&yeoksam));
        assert!(segment.is_down_station(&yeoksam));
        assert!(!segment.is_down_station(&gangnam));
        assert_eq!(segment.distance().as_u32(), 10);
    }

    #[test]
    fn segment_rejects_loop() {
        let gangnam = station(1, "Gangnam");
        let result = Segment::new(gangnam.clone(), gangnam, Distance::new(3).unwrap());
        assert!(matches!(
            result,
            Err(topology::Error::SameStation(StationId(1)))
        ));
    }

    #[test]
    fn segment_station_equality_is_by_id() {
        let segment = Segment::new(
            station(1, "Gangnam"),
            station(2, "Yeoksam"),
            Distance::new(4).unwrap(),
        )
        .unwrap();
        assert!(segment.is_up_station(&station(1, "Renamed")));
    }
}
