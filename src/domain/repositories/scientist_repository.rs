//! Repository trait for scientist storage.

use crate::domain::entities::{NewScientist, Scientist, ScientistPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing scientists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteScientistRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_scientist.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScientistRepository: Send + Sync {
    /// Creates a new scientist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_scientist: NewScientist) -> Result<Scientist, AppError>;

    /// Finds a scientist by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Scientist>, AppError>;

    /// Lists all scientists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Scientist>, AppError>;

    /// Applies a partial update to an existing scientist.
    ///
    /// Returns `None` if no scientist with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: ScientistPatch) -> Result<Option<Scientist>, AppError>;

    /// Deletes a scientist together with all missions referencing it.
    ///
    /// Returns `false` if no scientist with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
