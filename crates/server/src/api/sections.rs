use crate::{
    api::rejected,
    dto::{SectionDto, SectionRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};
use subway::shared::{LineId, StationId};

pub async fn sections(
    Path(line_id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let repository = state.repository.read().await;
    let sections = repository
        .sections(LineId(line_id))
        .ok_or(StatusCode::NOT_FOUND)?;
    let result: Vec<_> = sections.iter().map(SectionDto::from).collect();
    Ok(Json(result).into_response())
}

pub async fn add_section(
    Path(line_id): Path<u64>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SectionRequest>,
) -> Result<Response, StatusCode> {
    let mut repository = state.repository.write().await;
    repository
        .add_section(
            LineId(line_id),
            StationId(request.up_station_id),
            StationId(request.down_station_id),
            request.distance,
        )
        .map_err(rejected)?;
    Ok(StatusCode::CREATED.into_response())
}

pub async fn remove_section(
    Path(line_id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let station_id: u64 = match params.get("stationId") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => return Err(StatusCode::BAD_REQUEST),
    };
    let mut repository = state.repository.write().await;
    repository
        .remove_section(LineId(line_id), StationId(station_id))
        .map_err(rejected)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
