use crate::{
    api::rejected,
    dto::{LineDto, LineRequest, LineUpdateRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subway::{
    repository::Repository,
    shared::{LineId, StationId},
};

pub async fn create_line(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LineRequest>,
) -> Result<Response, StatusCode> {
    let mut repository = state.repository.write().await;
    let id = repository
        .create_line(
            &request.name,
            &request.color,
            StationId(request.up_station_id),
            StationId(request.down_station_id),
            request.distance,
        )
        .map_err(rejected)?
        .id;
    let line = line_dto(&repository, id)?;
    Ok((StatusCode::CREATED, Json(line)).into_response())
}

pub async fn lines(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let result = repository
        .lines()
        .map(|line| line_dto(&repository, line.id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(result).into_response())
}

pub async fn line(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    Ok(Json(line_dto(&repository, LineId(id))?).into_response())
}

pub async fn update_line(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<LineUpdateRequest>,
) -> Result<Response, StatusCode> {
    let mut repository = state.repository.write().await;
    repository
        .update_line(LineId(id), &request.name, &request.color)
        .map_err(rejected)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub async fn delete_line(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut repository = state.repository.write().await;
    if repository.delete_line(LineId(id)) {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

fn line_dto(repository: &Repository, id: LineId) -> Result<LineDto, StatusCode> {
    let line = repository.line_by_id(id).ok_or(StatusCode::NOT_FOUND)?;
    let stations = repository.line_stations(id).map_err(rejected)?;
    Ok(LineDto::from(line, &stations))
}
