pub mod repository;
pub mod shared;
pub mod snapshot;
pub mod topology;

pub mod prelude {
    pub use crate::repository::{Line, Repository, Station};
    pub use crate::shared::{Distance, LineId, StationId};
    pub use crate::snapshot::SnapshotReader;
    pub use crate::topology::{LineTopology, Segment};
}
