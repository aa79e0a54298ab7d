use crate::app::STORMS_PATH;
use crate::error::Result;
use crate::model::{CreateStormRequest, SearchQuery, StormResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

fn to_responses(storms: Vec<stormtracker_core::Storm>) -> Vec<StormResponse> {
    storms.into_iter().map(StormResponse::from).collect()
}

pub async fn list_storms_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StormResponse>>> {
    let storms = state.store().get_all().await?;
    Ok(Json(to_responses(storms)))
}

pub async fn get_storm_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<StormResponse>> {
    let Path(id) = id?;
    let storm = state.store().get_by_id(id).await?;
    Ok(Json(storm.into()))
}

pub async fn search_storms_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<StormResponse>>> {
    let Query(query) = query?;
    let storms = state
        .store()
        .find_by_start_location(&query.start_location)
        .await?;
    Ok(Json(to_responses(storms)))
}

/// Stores a new storm and answers `201 Created` with its location and no body.
pub async fn create_storm_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<CreateStormRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = request?;
    let storm = state.store().add(request.into()).await?;
    info!(id = storm.id, start_location = %storm.start_location, "storm created");

    let location = format!("{STORMS_PATH}/{}", storm.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}
