//! Handler for mission endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::mission::{CreateMissionRequest, MissionDetailResponse};
use crate::domain::entities::NewMission;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new mission referencing an existing scientist and planet.
///
/// # Endpoint
///
/// `POST /missions`
///
/// # Errors
///
/// Returns 400 if `name` is missing or empty, if either id is missing, or
/// if an id does not reference an existing row.
pub async fn create_mission_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMissionRequest>,
) -> Result<(StatusCode, Json<MissionDetailResponse>), AppError> {
    payload.validate()?;

    let new_mission = NewMission {
        name: payload.name.unwrap_or_default(),
        scientist_id: payload.scientist_id.unwrap_or_default(),
        planet_id: payload.planet_id.unwrap_or_default(),
    };

    let (mission, scientist, planet) = state.mission_service.create_mission(new_mission).await?;

    Ok((
        StatusCode::CREATED,
        Json(MissionDetailResponse::from_parts(
            mission, scientist, planet,
        )),
    ))
}
