use crate::{
    repository::{Line, Repository, Station},
    shared::{Distance, LineId, StationId},
    snapshot::{
        self, SnapshotReader,
        models::{LineRow, SectionRow, StationRow},
    },
    topology::{LineTopology, Segment},
};
use rayon::prelude::*;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    time::Instant,
};
use tracing::debug;

impl From<&Station> for StationRow {
    fn from(value: &Station) -> Self {
        Self {
            station_id: value.id.0,
            station_name: value.name.to_string(),
            created_at: value.created_at,
        }
    }
}

impl From<StationRow> for Station {
    fn from(value: StationRow) -> Self {
        Self {
            id: StationId(value.station_id),
            name: value.station_name.into(),
            created_at: value.created_at,
        }
    }
}

impl From<&Line> for LineRow {
    fn from(value: &Line) -> Self {
        Self {
            line_id: value.id.0,
            line_name: value.name.to_string(),
            line_color: value.color.to_string(),
            created_at: value.created_at,
        }
    }
}

impl From<LineRow> for Line {
    fn from(value: LineRow) -> Self {
        Self {
            id: LineId(value.line_id),
            name: value.line_name.into(),
            color: value.line_color.into(),
            created_at: value.created_at,
        }
    }
}

impl Repository {
    /// Fills the repository from a snapshot.
    ///
    /// Unlike section edits, stored layouts are not trusted: every line is
    /// checked to be a single unbroken path before it is accepted.
    pub fn load_snapshot(mut self, snapshot: SnapshotReader) -> Result<Self, snapshot::Error> {
        let SnapshotReader {
            stations,
            lines,
            sections,
            ..
        } = snapshot;
        self.load_stations(stations)?;
        self.load_lines(lines, sections)?;
        Ok(self)
    }

    fn load_stations(&mut self, rows: Vec<StationRow>) -> Result<(), snapshot::Error> {
        debug!("Loading stations...");
        let now = Instant::now();
        for row in rows {
            let station: Station = row.into();
            if self.station_by_id(station.id).is_some() {
                return Err(snapshot::Error::DuplicateStation(station.id));
            }
            if self.station_lookup.contains_key(&station.name) {
                return Err(snapshot::Error::DuplicateStationName(
                    station.name.to_string(),
                ));
            }
            self.insert_station(station);
        }
        debug!("Loading stations took {:?}", now.elapsed());
        Ok(())
    }

    fn load_lines(
        &mut self,
        lines: Vec<LineRow>,
        sections: Vec<SectionRow>,
    ) -> Result<(), snapshot::Error> {
        debug!("Loading lines...");
        let now = Instant::now();
        let mut line_to_sections: BTreeMap<LineId, Vec<SectionRow>> = BTreeMap::new();
        let mut names: HashSet<&str> = HashSet::new();
        for row in lines.iter() {
            let id = LineId(row.line_id);
            if line_to_sections.insert(id, Vec::new()).is_some() {
                return Err(snapshot::Error::DuplicateLine(id));
            }
            let name = row.line_name.as_str();
            if !names.insert(name) || self.line_lookup.contains_key(name) {
                return Err(snapshot::Error::DuplicateLineName(row.line_name.clone()));
            }
        }
        for row in sections {
            let id = LineId(row.line_id);
            line_to_sections
                .get_mut(&id)
                .ok_or(snapshot::Error::UnknownLine(id))?
                .push(row);
        }

        let mut topologies: HashMap<LineId, LineTopology> = HashMap::new();
        for (id, mut rows) in line_to_sections {
            rows.sort_by_key(|row| row.section_sequence);
            let segments = rows
                .into_iter()
                .map(|row| self.segment_from_row(id, row))
                .collect::<Result<Vec<_>, _>>()?;
            let topology = LineTopology::new(segments)
                .map_err(|source| snapshot::Error::Topology { line: id, source })?;
            topologies.insert(id, topology);
        }
        debug!("Loading lines took {:?}", now.elapsed());

        debug!("Validating line layouts...");
        let now = Instant::now();
        topologies
            .par_iter()
            .try_for_each(|(id, topology)| {
                topology
                    .validate()
                    .map_err(|source| snapshot::Error::Topology { line: *id, source })
            })?;
        debug!("Validating line layouts took {:?}", now.elapsed());

        for row in lines {
            let line: Line = row.into();
            if let Some(topology) = topologies.remove(&line.id) {
                self.insert_line(line, topology);
            }
        }
        Ok(())
    }

    fn segment_from_row(
        &self,
        line: LineId,
        row: SectionRow,
    ) -> Result<Segment, snapshot::Error> {
        let station = |id: u64| {
            self.station_by_id(StationId(id))
                .cloned()
                .ok_or(snapshot::Error::UnknownStation {
                    line,
                    station: StationId(id),
                })
        };
        let up_station = station(row.up_station_id)?;
        let down_station = station(row.down_station_id)?;
        let distance = Distance::try_from(row.distance)
            .map_err(|source| snapshot::Error::InvalidDistance { line, source })?;
        Segment::new(up_station, down_station, distance)
            .map_err(|source| snapshot::Error::Topology { line, source })
    }
}
