//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Every endpoint has a dedicated response shape;
//! there is no generic entity serializer, which is what guarantees the
//! absence of parent/child reference cycles in the output.

pub mod mission;
pub mod planet;
pub mod scientist;
