//! Handler for planet endpoints.

use axum::{Json, extract::State};

use crate::api::dto::planet::PlanetItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all planets without their mission collections.
///
/// # Endpoint
///
/// `GET /planets`
pub async fn planet_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetItem>>, AppError> {
    let planets = state.planet_service.list_planets().await?;

    Ok(Json(planets.into_iter().map(PlanetItem::from).collect()))
}
