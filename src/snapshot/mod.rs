use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
    time::Instant,
};
use thiserror::Error;
use tracing::{debug, warn};
use zip::{ZipArchive, ZipWriter, write::SimpleFileOptions};

mod config;
pub mod models;
pub use config::*;
use models::*;

use crate::{
    repository::Repository,
    shared::{InvalidDistance, LineId, StationId},
    topology,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Station {0} is stored more than once")]
    DuplicateStation(StationId),
    #[error("Line {0} is stored more than once")]
    DuplicateLine(LineId),
    #[error("Station name {0} is stored more than once")]
    DuplicateStationName(String),
    #[error("Line name {0} is stored more than once")]
    DuplicateLineName(String),
    #[error("Section of line {0} does not belong to any stored line")]
    UnknownLine(LineId),
    #[error("Line {line} references unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },
    #[error("Line {line} has an invalid section: {source}")]
    InvalidDistance {
        line: LineId,
        #[source]
        source: InvalidDistance,
    },
    #[error("Line {line} has a broken layout: {source}")]
    Topology {
        line: LineId,
        #[source]
        source: topology::Error,
    },
}

/// Tables read from a snapshot archive, ready to be loaded into a [`Repository`].
#[derive(Default)]
pub struct SnapshotReader {
    pub(crate) stations: Vec<StationRow>,
    pub(crate) lines: Vec<LineRow>,
    pub(crate) sections: Vec<SectionRow>,
    config: Config,
}

impl SnapshotReader {
    pub fn new(config: self::Config) -> Self {
        Self {
            stations: Default::default(),
            lines: Default::default(),
            sections: Default::default(),
            config,
        }
    }

    /// Reads every table of the archive. All three tables must be present.
    pub fn load_from_zip<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        let now = Instant::now();
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut found = [false; 3];
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();
            match name.as_str() {
                val if val == self.config.stations_file_name => {
                    parse_csv(&mut self.stations, &mut file)?;
                    found[0] = true;
                }
                val if val == self.config.lines_file_name => {
                    parse_csv(&mut self.lines, &mut file)?;
                    found[1] = true;
                }
                val if val == self.config.sections_file_name => {
                    parse_csv(&mut self.sections, &mut file)?;
                    found[2] = true;
                }
                _ => warn!("Skipping unknown snapshot file {name}"),
            };
        }

        let names = [
            &self.config.stations_file_name,
            &self.config.lines_file_name,
            &self.config.sections_file_name,
        ];
        if let Some((name, _)) = names.iter().zip(found).find(|(_, found)| !found) {
            return Err(self::Error::FileNotFound(name.to_string()));
        }
        debug!(
            stations = self.stations.len(),
            lines = self.lines.len(),
            sections = self.sections.len(),
            "Reading snapshot took {:?}",
            now.elapsed()
        );
        Ok(self)
    }

    pub fn stations(&self) -> &[StationRow] {
        &self.stations
    }

    pub fn lines(&self) -> &[LineRow] {
        &self.lines
    }

    pub fn sections(&self) -> &[SectionRow] {
        &self.sections
    }
}

/// Writes the whole repository as a snapshot archive at `path`, replacing any
/// existing file.
pub fn write_zip<P: AsRef<Path>>(
    repository: &Repository,
    config: &self::Config,
    path: P,
) -> Result<(), self::Error> {
    let now = Instant::now();
    let file = File::create(path)?;
    let mut archive = ZipWriter::new(file);

    archive.start_file(config.stations_file_name.as_str(), SimpleFileOptions::default())?;
    write_csv(&mut archive, repository.stations().map(StationRow::from))?;

    archive.start_file(config.lines_file_name.as_str(), SimpleFileOptions::default())?;
    write_csv(&mut archive, repository.lines().map(LineRow::from))?;

    archive.start_file(config.sections_file_name.as_str(), SimpleFileOptions::default())?;
    let sections = repository.lines().flat_map(|line| {
        repository
            .sections(line.id)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(move |(sequence, segment)| SectionRow {
                line_id: line.id.0,
                up_station_id: segment.up_station().id.0,
                down_station_id: segment.down_station().id.0,
                distance: segment.distance().as_u32(),
                section_sequence: sequence as u32,
            })
    });
    write_csv(&mut archive, sections)?;

    archive.finish()?;
    debug!("Writing snapshot took {:?}", now.elapsed());
    Ok(())
}

fn parse_csv<R, T>(buf: &mut Vec<T>, reader: &mut R) -> Result<(), self::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut rdr = csv::Reader::from_reader(reader);
    for result in rdr.deserialize() {
        let record: T = result?;
        buf.push(record);
    }
    Ok(())
}

fn write_csv<W, T, I>(writer: W, rows: I) -> Result<(), self::Error>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
