//! Repository trait for mission storage.

use crate::domain::entities::{Mission, NewMission};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing missions.
///
/// Missions are the child side of two one-to-many relationships; deleting a
/// scientist removes its missions through
/// [`crate::domain::repositories::ScientistRepository::delete`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMissionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Creates a new mission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_mission: NewMission) -> Result<Mission, AppError>;

    /// Lists all missions assigned to a scientist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_scientist(&self, scientist_id: i64) -> Result<Vec<Mission>, AppError>;
}
