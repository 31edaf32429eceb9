mod lines;
mod sections;
mod snapshot;
mod stations;

pub use lines::*;
pub use sections::*;
pub use snapshot::*;
pub use stations::*;

use axum::http::StatusCode;
use subway::repository;
use tracing::warn;

/// Maps a rejected request to its response status.
fn rejected(err: repository::Error) -> StatusCode {
    warn!("Rejected request: {err}");
    match err {
        repository::Error::StationNotFound(_) | repository::Error::LineNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        repository::Error::DuplicateStation(_) | repository::Error::DuplicateLine(_) => {
            StatusCode::CONFLICT
        }
        repository::Error::BlankName
        | repository::Error::StationInUse(_)
        | repository::Error::InvalidDistance(_)
        | repository::Error::LastSection(_)
        | repository::Error::Topology(_) => StatusCode::BAD_REQUEST,
    }
}
