//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ScientistRepository`] - Scientist CRUD operations with cascade delete
//! - [`PlanetRepository`] - Read access to the planet catalog
//! - [`MissionRepository`] - Mission creation and per-scientist lookup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mission_repository;
pub mod planet_repository;
pub mod scientist_repository;

pub use mission_repository::MissionRepository;
pub use planet_repository::PlanetRepository;
pub use scientist_repository::ScientistRepository;

#[cfg(test)]
pub use mission_repository::MockMissionRepository;
#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
#[cfg(test)]
pub use scientist_repository::MockScientistRepository;
