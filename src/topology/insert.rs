use crate::{
    repository::Station,
    shared::Distance,
    topology::{self, LineTopology, Segment, replaced},
};

impl LineTopology {
    /// Adds a station to the line through a new segment `up_station -> down_station`.
    ///
    /// Exactly one of the two stations must already be on the line. If that
    /// anchor has track leaving it in the requested direction, the existing
    /// segment is split in two. Otherwise the anchor is a terminal and the line
    /// is extended past it.
    pub fn insert(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<(), topology::Error> {
        let has_up = self.contains(&up_station);
        let has_down = self.contains(&down_station);

        let segments = match (has_up, has_down) {
            (true, true) => return Err(topology::Error::BothRegistered),
            (false, false) => return Err(topology::Error::NeitherRegistered),
            (true, false) => self.insert_after(up_station, down_station, distance)?,
            (false, true) => self.insert_before(up_station, down_station, distance)?,
        };
        self.segments = segments;
        Ok(())
    }

    /// `up_station` is on the line and `down_station` is new.
    fn insert_after(
        &self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Vec<Segment>, topology::Error> {
        match self.outgoing(&up_station) {
            Some(index) => {
                let target = &self.segments[index];
                let remaining = carve(target, distance)?;
                let upper =
                    Segment::new(target.up_station().clone(), down_station.clone(), distance)?;
                let lower =
                    Segment::new(down_station, target.down_station().clone(), remaining)?;
                Ok(replaced(&self.segments, index, 1, [upper, lower]))
            }
            None => {
                if self.tail() != Some(&up_station) {
                    let index = self.segments.len().saturating_sub(1);
                    return Err(topology::Error::Broken { index });
                }
                let mut segments = self.segments.clone();
                segments.push(Segment::new(up_station, down_station, distance)?);
                Ok(segments)
            }
        }
    }

    /// `down_station` is on the line and `up_station` is new.
    fn insert_before(
        &self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Vec<Segment>, topology::Error> {
        match self.incoming(&down_station) {
            Some(index) => {
                let target = &self.segments[index];
                let remaining = carve(target, distance)?;
                let upper =
                    Segment::new(target.up_station().clone(), up_station.clone(), remaining)?;
                let lower = Segment::new(up_station, down_station, distance)?;
                Ok(replaced(&self.segments, index, 1, [upper, lower]))
            }
            None => {
                if self.head() != Some(&down_station) {
                    return Err(topology::Error::Broken { index: 0 });
                }
                let segment = Segment::new(up_station, down_station, distance)?;
                Ok(replaced(&self.segments, 0, 0, [segment]))
            }
        }
    }
}

/// Length left over once `distance` is cut out of `target`.
/// Cutting the whole segment or more is rejected so no zero-length track is created.
fn carve(target: &Segment, distance: Distance) -> Result<Distance, topology::Error> {
    target
        .distance()
        .checked_sub(distance)
        .ok_or(topology::Error::DistanceTooLong {
            requested: distance,
            available: target.distance(),
        })
}
