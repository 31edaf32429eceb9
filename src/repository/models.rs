use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

use chrono::{DateTime, Local};

use crate::shared::{LineId, StationId};

/// A named stop on the network.
///
/// Stations are compared by [`StationId`] only, so two values loaded at
/// different times still refer to the same station.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub name: Arc<str>,
    pub created_at: DateTime<Local>,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Local::now(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A named, colored line. Its track layout is stored separately as sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: Arc<str>,
    /// Display color, free form (e.g. "bg-green-600" or "#00a84d").
    pub color: Arc<str>,
    pub created_at: DateTime<Local>,
}

impl Line {
    pub fn new(id: LineId, name: impl Into<Arc<str>>, color: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            created_at: Local::now(),
        }
    }
}
