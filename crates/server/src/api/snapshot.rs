use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subway::snapshot::{self, Config};
use tracing::{error, info, warn};

pub async fn save_snapshot(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let Some(path) = state.snapshot_path.clone() else {
        warn!("No snapshot path configured");
        return Err(StatusCode::BAD_REQUEST);
    };
    let repository = state.repository.read().await.clone();
    let written = tokio::task::spawn_blocking(move || {
        snapshot::write_zip(&repository, &Config::default(), &path).map(|_| path)
    })
    .await
    .map_err(|err| {
        error!("Snapshot task failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let path = written.map_err(|err| {
        error!("Failed to write snapshot: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    info!("Wrote snapshot to {}", path.display());
    Ok(().into_response())
}
