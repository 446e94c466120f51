//! Mission creation service.

use crate::domain::entities::{Mission, NewMission, Planet, Scientist};
use crate::domain::repositories::{MissionRepository, PlanetRepository, ScientistRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Service for creating missions.
///
/// A mission must reference an existing scientist and planet. Both lookups
/// happen before insert so a dangling id is reported as a validation error
/// instead of surfacing as a constraint failure from the storage layer.
pub struct MissionService<M: MissionRepository, S: ScientistRepository, P: PlanetRepository> {
    missions: Arc<M>,
    scientists: Arc<S>,
    planets: Arc<P>,
}

impl<M: MissionRepository, S: ScientistRepository, P: PlanetRepository> MissionService<M, S, P> {
    /// Creates a new mission service.
    pub fn new(missions: Arc<M>, scientists: Arc<S>, planets: Arc<P>) -> Self {
        Self {
            missions,
            scientists,
            planets,
        }
    }

    /// Creates a mission after resolving both referenced entities.
    ///
    /// Returns the created mission together with its scientist and planet so
    /// the handler can build the nested response without extra queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either reference does not resolve.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_mission(
        &self,
        new_mission: NewMission,
    ) -> Result<(Mission, Scientist, Planet), AppError> {
        let scientist = self
            .scientists
            .find_by_id(new_mission.scientist_id)
            .await?
            .ok_or_else(|| {
                AppError::validation("scientist_id does not reference an existing scientist")
            })?;

        let planet = self
            .planets
            .find_by_id(new_mission.planet_id)
            .await?
            .ok_or_else(|| {
                AppError::validation("planet_id does not reference an existing planet")
            })?;

        let mission = self.missions.create(new_mission).await?;

        Ok((mission, scientist, planet))
    }
}
