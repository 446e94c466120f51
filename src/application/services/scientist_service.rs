//! Scientist management service.

use crate::domain::entities::{Mission, NewScientist, Scientist, ScientistPatch};
use crate::domain::repositories::{MissionRepository, ScientistRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Message used for every 404 on scientist routes.
const SCIENTIST_NOT_FOUND: &str = "Scientist not found";

/// Service for managing scientists and their mission assignments.
///
/// Field-level validation happens at the DTO boundary; this service resolves
/// entity lookups and pairs scientists with their missions for detail
/// responses.
pub struct ScientistService<S: ScientistRepository, M: MissionRepository> {
    scientists: Arc<S>,
    missions: Arc<M>,
}

impl<S: ScientistRepository, M: MissionRepository> ScientistService<S, M> {
    /// Creates a new scientist service.
    pub fn new(scientists: Arc<S>, missions: Arc<M>) -> Self {
        Self {
            scientists,
            missions,
        }
    }

    /// Lists all scientists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_scientists(&self) -> Result<Vec<Scientist>, AppError> {
        self.scientists.list().await
    }

    /// Creates a new scientist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_scientist(
        &self,
        new_scientist: NewScientist,
    ) -> Result<Scientist, AppError> {
        self.scientists.create(new_scientist).await
    }

    /// Retrieves a scientist together with its missions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the scientist does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_scientist(&self, id: i64) -> Result<(Scientist, Vec<Mission>), AppError> {
        let scientist = self
            .scientists
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(SCIENTIST_NOT_FOUND))?;

        let missions = self.missions.list_for_scientist(id).await?;

        Ok((scientist, missions))
    }

    /// Applies a partial update and returns the refreshed detail view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the scientist does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_scientist(
        &self,
        id: i64,
        patch: ScientistPatch,
    ) -> Result<(Scientist, Vec<Mission>), AppError> {
        let scientist = self
            .scientists
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(SCIENTIST_NOT_FOUND))?;

        let missions = self.missions.list_for_scientist(id).await?;

        Ok((scientist, missions))
    }

    /// Deletes a scientist, cascading to its missions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the scientist does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_scientist(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.scientists.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(SCIENTIST_NOT_FOUND));
        }

        Ok(())
    }
}
