//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! concepts of the mission tracking service. Entities are plain data
//! structures without business logic.
//!
//! # Entity Types
//!
//! - [`Scientist`] - A scientist who can be assigned to missions
//! - [`Planet`] - A planet that missions can target
//! - [`Mission`] - A mission linking one scientist to one planet
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewScientist`, `NewMission` - For creating new records
//! - `ScientistPatch` - For partial updates

pub mod mission;
pub mod planet;
pub mod scientist;

pub use mission::{Mission, NewMission};
pub use planet::Planet;
pub use scientist::{NewScientist, Scientist, ScientistPatch};
