use crate::{
    repository::Station,
    topology::{self, LineTopology, Segment, replaced},
};

impl LineTopology {
    /// Takes a station off the line.
    ///
    /// An interior station has its two segments merged into one spanning both
    /// distances. A terminal station loses its only segment, shortening the line.
    ///
    /// Removing a terminal from a single segment line leaves the topology empty,
    /// so callers check [`LineTopology::is_removable`] first.
    pub fn remove(&mut self, station: &Station) -> Result<(), topology::Error> {
        let segments = match (self.incoming(station), self.outgoing(station)) {
            (None, None) => return Err(topology::Error::StationNotFound(station.id)),
            (Some(left), Some(right)) => self.merge(left, right)?,
            (None, Some(right)) => {
                if right != 0 {
                    return Err(topology::Error::Broken { index: right });
                }
                self.segments[1..].to_vec()
            }
            (Some(left), None) => {
                if left + 1 != self.segments.len() {
                    return Err(topology::Error::Broken { index: left + 1 });
                }
                self.segments[..left].to_vec()
            }
        };
        self.segments = segments;
        Ok(())
    }

    fn merge(&self, left: usize, right: usize) -> Result<Vec<Segment>, topology::Error> {
        if right != left + 1 {
            return Err(topology::Error::Broken { index: right });
        }
        let (upper, lower) = (&self.segments[left], &self.segments[right]);
        let distance = upper.distance().checked_add(lower.distance()).ok_or(
            topology::Error::DistanceOverflow {
                upper: upper.distance(),
                lower: lower.distance(),
            },
        )?;
        let merged = Segment::new(
            upper.up_station().clone(),
            lower.down_station().clone(),
            distance,
        )?;
        Ok(replaced(&self.segments, left, 2, [merged]))
    }
}
