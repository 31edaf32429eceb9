use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

mod models;
pub mod source;
pub use models::*;
use thiserror::Error;
use tracing::debug;

use crate::{
    shared::{Distance, InvalidDistance, LineId, StationId},
    topology::{self, LineTopology, Segment},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("A station named {0} already exists")]
    DuplicateStation(String),
    #[error("A line named {0} already exists")]
    DuplicateLine(String),
    #[error("Name cannot be blank")]
    BlankName,
    #[error("Station id {0} does not match any entry")]
    StationNotFound(StationId),
    #[error("Line id {0} does not match any entry")]
    LineNotFound(LineId),
    #[error("Station {0} is still part of a line")]
    StationInUse(StationId),
    #[error(transparent)]
    InvalidDistance(#[from] InvalidDistance),
    #[error("Line {0} only has one section left")]
    LastSection(LineId),
    #[error(transparent)]
    Topology(#[from] topology::Error),
}

/// In-memory store for stations, lines and the sections of every line.
///
/// Section edits follow a load, edit, store cycle: the ordered segments of a
/// line are wrapped in a [`LineTopology`], one edit is applied and the whole
/// segment list of the line is replaced with the result.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    sections: HashMap<LineId, Box<[Segment]>>,

    // Lookups
    station_lookup: HashMap<Arc<str>, StationId>,
    line_lookup: HashMap<Arc<str>, LineId>,

    next_station_id: u64,
    next_line_id: u64,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn create_station(&mut self, name: &str) -> Result<&Station, self::Error> {
        let name = normalize(name)?;
        if self.station_lookup.contains_key(name) {
            return Err(self::Error::DuplicateStation(name.to_string()));
        }
        self.next_station_id += 1;
        let station = Station::new(StationId(self.next_station_id), name);
        debug!(id = %station.id, name, "Created station");
        Ok(self.insert_station(station))
    }

    /// All stations ordered by id.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn station_by_id(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        let id = self.station_lookup.get(name.trim())?;
        self.station_by_id(*id)
    }

    /// Deletes a station that is not used by any line.
    /// Returns `false` if no station had that id.
    pub fn delete_station(&mut self, id: StationId) -> Result<bool, self::Error> {
        let Some(station) = self.stations.get(&id) else {
            return Ok(false);
        };
        let in_use = self
            .sections
            .values()
            .flat_map(|segments| segments.iter())
            .any(|segment| segment.has_station(station));
        if in_use {
            return Err(self::Error::StationInUse(id));
        }
        if let Some(station) = self.stations.remove(&id) {
            self.station_lookup.remove(&station.name);
            debug!(%id, "Deleted station");
        }
        Ok(true)
    }

    /// Creates a line running from `up_station_id` to `down_station_id`.
    pub fn create_line(
        &mut self,
        name: &str,
        color: &str,
        up_station_id: StationId,
        down_station_id: StationId,
        distance: u32,
    ) -> Result<&Line, self::Error> {
        let name = normalize(name)?;
        if self.line_lookup.contains_key(name) {
            return Err(self::Error::DuplicateLine(name.to_string()));
        }
        let distance = Distance::try_from(distance)?;
        let up_station = self.require_station(up_station_id)?.clone();
        let down_station = self.require_station(down_station_id)?.clone();
        let topology = LineTopology::single(up_station, down_station, distance)?;

        self.next_line_id += 1;
        let line = Line::new(LineId(self.next_line_id), name, color.trim());
        debug!(
            id = %line.id,
            name,
            %up_station_id,
            %down_station_id,
            %distance,
            "Created line"
        );
        Ok(self.insert_line(line, topology))
    }

    /// All lines ordered by id.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn line_by_id(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn update_line(
        &mut self,
        id: LineId,
        name: &str,
        color: &str,
    ) -> Result<&Line, self::Error> {
        let name = normalize(name)?;
        if self.line_lookup.get(name).is_some_and(|existing| *existing != id) {
            return Err(self::Error::DuplicateLine(name.to_string()));
        }
        let line = self.lines.get_mut(&id).ok_or(self::Error::LineNotFound(id))?;
        self.line_lookup.remove(&line.name);
        line.name = name.into();
        line.color = color.trim().into();
        self.line_lookup.insert(line.name.clone(), id);
        debug!(%id, name, "Updated line");
        Ok(line)
    }

    /// Deletes a line together with its sections.
    /// Returns `false` if no line had that id.
    pub fn delete_line(&mut self, id: LineId) -> bool {
        let Some(line) = self.lines.remove(&id) else {
            return false;
        };
        self.line_lookup.remove(&line.name);
        self.sections.remove(&id);
        debug!(%id, "Deleted line");
        true
    }

    /// Ordered sections of a line as last stored.
    pub fn sections(&self, id: LineId) -> Option<&[Segment]> {
        self.sections.get(&id).map(|segments| segments.as_ref())
    }

    /// Loads the working topology of a line.
    pub fn topology(&self, id: LineId) -> Result<LineTopology, self::Error> {
        let segments = self.sections(id).ok_or(self::Error::LineNotFound(id))?;
        Ok(LineTopology::new(segments.to_vec())?)
    }

    /// Stations of a line from head to tail.
    pub fn line_stations(&self, id: LineId) -> Result<Vec<Station>, self::Error> {
        Ok(self.topology(id)?.stations())
    }

    /// Registers a new station on a line through the section `up_station_id -> down_station_id`.
    pub fn add_section(
        &mut self,
        line_id: LineId,
        up_station_id: StationId,
        down_station_id: StationId,
        distance: u32,
    ) -> Result<(), self::Error> {
        let distance = Distance::try_from(distance)?;
        let up_station = self.require_station(up_station_id)?.clone();
        let down_station = self.require_station(down_station_id)?.clone();

        let mut topology = self.topology(line_id)?;
        topology.insert(up_station, down_station, distance)?;
        debug!(
            %line_id,
            %up_station_id,
            %down_station_id,
            %distance,
            sections = topology.len(),
            "Added section"
        );
        self.store(line_id, topology);
        Ok(())
    }

    /// Takes a station off a line, merging or dropping the sections around it.
    /// A line is never left without sections.
    pub fn remove_section(
        &mut self,
        line_id: LineId,
        station_id: StationId,
    ) -> Result<(), self::Error> {
        let station = self.require_station(station_id)?.clone();
        let mut topology = self.topology(line_id)?;
        if !topology.is_removable() {
            return Err(self::Error::LastSection(line_id));
        }
        topology.remove(&station)?;
        debug!(%line_id, %station_id, sections = topology.len(), "Removed section");
        self.store(line_id, topology);
        Ok(())
    }

    pub(crate) fn insert_station(&mut self, station: Station) -> &Station {
        self.next_station_id = self.next_station_id.max(station.id.0);
        let id = station.id;
        self.station_lookup.insert(station.name.clone(), id);
        self.stations.insert(id, station);
        &self.stations[&id]
    }

    pub(crate) fn insert_line(&mut self, line: Line, topology: LineTopology) -> &Line {
        let id = line.id;
        self.next_line_id = self.next_line_id.max(id.0);
        self.line_lookup.insert(line.name.clone(), id);
        self.store(id, topology);
        self.lines.insert(id, line);
        &self.lines[&id]
    }

    /// Replaces every stored section of the line.
    fn store(&mut self, id: LineId, topology: LineTopology) {
        self.sections
            .insert(id, topology.into_segments().into_boxed_slice());
    }

    fn require_station(&self, id: StationId) -> Result<&Station, self::Error> {
        self.station_by_id(id).ok_or(self::Error::StationNotFound(id))
    }
}

fn normalize(name: &str) -> Result<&str, self::Error> {
    let name = name.trim();
    if name.is_empty() {
        Err(self::Error::BlankName)
    } else {
        Ok(name)
    }
}
