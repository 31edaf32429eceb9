use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use subway::repository::Station;

#[derive(Debug, Clone, Deserialize)]
pub struct StationRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Local>,
}

impl StationDto {
    pub fn from(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.to_string(),
            created_at: station.created_at,
        }
    }
}
