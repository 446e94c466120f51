//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries against a local SQLite database.
//!
//! # Repositories
//!
//! - [`SqliteScientistRepository`] - Scientist storage with transactional cascade delete
//! - [`SqlitePlanetRepository`] - Planet catalog reads
//! - [`SqliteMissionRepository`] - Mission storage and per-scientist lookup

pub mod sqlite_mission_repository;
pub mod sqlite_planet_repository;
pub mod sqlite_scientist_repository;

pub use sqlite_mission_repository::SqliteMissionRepository;
pub use sqlite_planet_repository::SqlitePlanetRepository;
pub use sqlite_scientist_repository::SqliteScientistRepository;
