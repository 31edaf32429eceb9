use crate::{
    api::rejected,
    dto::{StationDto, StationRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subway::shared::StationId;

pub async fn create_station(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StationRequest>,
) -> Result<Response, StatusCode> {
    let mut repository = state.repository.write().await;
    let station = repository.create_station(&request.name).map_err(rejected)?;
    Ok((StatusCode::CREATED, Json(StationDto::from(station))).into_response())
}

pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let result: Vec<_> = repository.stations().map(StationDto::from).collect();
    Ok(Json(result).into_response())
}

pub async fn delete_station(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut repository = state.repository.write().await;
    if repository.delete_station(StationId(id)).map_err(rejected)? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
