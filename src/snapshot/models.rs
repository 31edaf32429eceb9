use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StationRow {
    pub station_id: u64,
    pub station_name: String,
    pub created_at: DateTime<Local>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LineRow {
    pub line_id: u64,
    pub line_name: String,
    pub line_color: String,
    pub created_at: DateTime<Local>,
}

/// One stored section. `section_sequence` orders the sections of a line from
/// head to tail, starting at 0.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SectionRow {
    pub line_id: u64,
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
    pub section_sequence: u32,
}
