use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use subway::repository::{Line, Station};

use crate::dto::StationDto;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Local>,
    /// Stations from head to tail.
    pub stations: Vec<StationDto>,
}

impl LineDto {
    pub fn from(line: &Line, stations: &[Station]) -> Self {
        Self {
            id: line.id.0,
            name: line.name.to_string(),
            color: line.color.to_string(),
            created_at: line.created_at,
            stations: stations.iter().map(StationDto::from).collect(),
        }
    }
}
