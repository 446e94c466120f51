//! # Cosmic Missions
//!
//! A small REST API for managing scientists, planets, and missions, built
//! with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers and DTOs
//!
//! ## Features
//!
//! - Scientist CRUD with an allow-list of mutable fields
//! - Mission creation with referential-integrity checks
//! - Cascade deletion of a scientist's missions
//! - Cycle-free nested serialization via dedicated response shapes
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to a local sqlite file
//! export DATABASE_URL="sqlite:app.db"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MissionService, PlanetService, ScientistService};
    pub use crate::domain::entities::{Mission, NewMission, NewScientist, Planet, Scientist};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
