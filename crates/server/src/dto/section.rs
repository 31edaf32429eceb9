use serde::{Deserialize, Serialize};
use subway::topology::Segment;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
}

impl SectionDto {
    pub fn from(segment: &Segment) -> Self {
        Self {
            up_station_id: segment.up_station().id.0,
            down_station_id: segment.down_station().id.0,
            distance: segment.distance().as_u32(),
        }
    }
}
