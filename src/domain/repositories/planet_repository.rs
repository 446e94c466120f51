//! Repository trait for the planet catalog.

use crate::domain::entities::Planet;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the planet catalog.
///
/// Planets are read-only through the API; rows are created by migrations
/// or external seeding.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlitePlanetRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Finds a planet by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError>;

    /// Lists all planets.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Planet>, AppError>;
}
