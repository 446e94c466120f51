//! API route configuration.

use crate::api::handlers::{
    create_mission_handler, create_scientist_handler, delete_scientist_handler,
    planet_list_handler, scientist_detail_handler, scientist_list_handler,
    update_scientist_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All resource routes.
///
/// # Endpoints
///
/// - `GET    /scientists`       - List scientists (no mission collections)
/// - `POST   /scientists`       - Create a scientist
/// - `GET    /scientists/{id}`  - Scientist detail with missions
/// - `PATCH  /scientists/{id}`  - Update name and/or field of study
/// - `DELETE /scientists/{id}`  - Delete a scientist and its missions
/// - `GET    /planets`          - List planets (no mission collections)
/// - `POST   /missions`         - Create a mission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/scientists",
            get(scientist_list_handler).post(create_scientist_handler),
        )
        .route(
            "/scientists/{id}",
            get(scientist_detail_handler)
                .patch(update_scientist_handler)
                .delete(delete_scientist_handler),
        )
        .route("/planets", get(planet_list_handler))
        .route("/missions", post(create_mission_handler))
}
