//! Handlers for scientist endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::scientist::{
    CreateScientistRequest, ScientistDetailResponse, ScientistItem, UpdateScientistRequest,
};
use crate::domain::entities::{NewScientist, ScientistPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all scientists without their mission collections.
///
/// # Endpoint
///
/// `GET /scientists`
pub async fn scientist_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScientistItem>>, AppError> {
    let scientists = state.scientist_service.list_scientists().await?;

    Ok(Json(
        scientists.into_iter().map(ScientistItem::from).collect(),
    ))
}

/// Creates a new scientist.
///
/// # Endpoint
///
/// `POST /scientists`
///
/// # Errors
///
/// Returns 400 if `name` or `field_of_study` is missing or empty.
pub async fn create_scientist_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateScientistRequest>,
) -> Result<(StatusCode, Json<ScientistDetailResponse>), AppError> {
    payload.validate()?;

    let new_scientist = NewScientist {
        name: payload.name.unwrap_or_default(),
        field_of_study: payload.field_of_study.unwrap_or_default(),
    };

    let scientist = state
        .scientist_service
        .create_scientist(new_scientist)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ScientistDetailResponse::from_parts(scientist, vec![])),
    ))
}

/// Retrieves a scientist with its missions.
///
/// # Endpoint
///
/// `GET /scientists/{id}`
///
/// # Errors
///
/// Returns 404 if the scientist does not exist.
pub async fn scientist_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ScientistDetailResponse>, AppError> {
    let (scientist, missions) = state.scientist_service.get_scientist(id).await?;

    Ok(Json(ScientistDetailResponse::from_parts(
        scientist, missions,
    )))
}

/// Partially updates a scientist.
///
/// # Endpoint
///
/// `PATCH /scientists/{id}`
///
/// Only `name` and `field_of_study` are mutable; unknown fields in the body
/// are ignored. A provided field is validated on assignment.
///
/// # Errors
///
/// Returns 400 if a provided field is empty.
/// Returns 404 if the scientist does not exist.
pub async fn update_scientist_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateScientistRequest>,
) -> Result<(StatusCode, Json<ScientistDetailResponse>), AppError> {
    payload.validate()?;

    let patch = ScientistPatch {
        name: payload.name,
        field_of_study: payload.field_of_study,
    };

    let (scientist, missions) = state.scientist_service.update_scientist(id, patch).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ScientistDetailResponse::from_parts(scientist, missions)),
    ))
}

/// Deletes a scientist, cascading to its missions.
///
/// # Endpoint
///
/// `DELETE /scientists/{id}`
///
/// # Errors
///
/// Returns 404 if the scientist does not exist.
pub async fn delete_scientist_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.scientist_service.delete_scientist(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
