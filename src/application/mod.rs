//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::scientist_service::ScientistService`] - Scientist CRUD and cascade delete
//! - [`services::planet_service::PlanetService`] - Planet catalog listing
//! - [`services::mission_service::MissionService`] - Mission creation with referential checks

pub mod services;
