//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{MissionService, PlanetService, ScientistService};
use crate::infrastructure::persistence::{
    SqliteMissionRepository, SqlitePlanetRepository, SqliteScientistRepository,
};

/// Services wired against the SQLite repositories.
#[derive(Clone)]
pub struct AppState {
    pub scientist_service:
        Arc<ScientistService<SqliteScientistRepository, SqliteMissionRepository>>,
    pub planet_service: Arc<PlanetService<SqlitePlanetRepository>>,
    pub mission_service: Arc<
        MissionService<SqliteMissionRepository, SqliteScientistRepository, SqlitePlanetRepository>,
    >,
}

impl AppState {
    /// Builds the full repository/service graph on top of a connection pool.
    ///
    /// Used both by the server and by integration tests, which pass an
    /// in-memory pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        let scientist_repo = Arc::new(SqliteScientistRepository::new(pool.clone()));
        let planet_repo = Arc::new(SqlitePlanetRepository::new(pool.clone()));
        let mission_repo = Arc::new(SqliteMissionRepository::new(pool));

        Self {
            scientist_service: Arc::new(ScientistService::new(
                scientist_repo.clone(),
                mission_repo.clone(),
            )),
            planet_service: Arc::new(PlanetService::new(planet_repo.clone())),
            mission_service: Arc::new(MissionService::new(
                mission_repo,
                scientist_repo,
                planet_repo,
            )),
        }
    }
}
