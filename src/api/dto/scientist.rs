//! DTOs for scientist endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::mission::MissionItem;
use crate::domain::entities::{Mission, Scientist};

/// Request to create a scientist.
///
/// Both fields are required and must be non-empty. They are declared as
/// `Option` so an absent field fails validation with a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScientistRequest {
    #[validate(required(message = "Scientist name must exist"))]
    #[validate(length(min = 1, message = "Scientist name must exist"))]
    pub name: Option<String>,

    #[validate(required(message = "Scientist field of study must exist"))]
    #[validate(length(min = 1, message = "Scientist field of study must exist"))]
    pub field_of_study: Option<String>,
}

/// Request to partially update a scientist.
///
/// Only the fields listed here are mutable; anything else in the body is
/// ignored. A provided field must be non-empty.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateScientistRequest {
    #[validate(length(min = 1, message = "Scientist name must exist"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Scientist field of study must exist"))]
    pub field_of_study: Option<String>,
}

/// Scientist as returned by the list endpoint: no mission collection.
#[derive(Debug, Serialize)]
pub struct ScientistItem {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
}

impl From<Scientist> for ScientistItem {
    fn from(s: Scientist) -> Self {
        Self {
            id: s.id,
            name: s.name,
            field_of_study: s.field_of_study,
        }
    }
}

/// Scientist detail including its missions.
///
/// Each mission carries only scalar fields, so the response never embeds
/// a parent's mission collection back into itself.
#[derive(Debug, Serialize)]
pub struct ScientistDetailResponse {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<MissionItem>,
}

impl ScientistDetailResponse {
    pub fn from_parts(scientist: Scientist, missions: Vec<Mission>) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            missions: missions.into_iter().map(MissionItem::from).collect(),
        }
    }
}
