//! DTOs for mission endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::planet::PlanetItem;
use crate::api::dto::scientist::ScientistItem;
use crate::domain::entities::{Mission, Planet, Scientist};

/// Request to create a mission.
///
/// All three fields are required; the ids must reference existing rows.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionRequest {
    #[validate(required(message = "Mission name must exist"))]
    #[validate(length(min = 1, message = "Mission name must exist"))]
    pub name: Option<String>,

    #[validate(required(message = "Missing scientist id"))]
    pub scientist_id: Option<i64>,

    #[validate(required(message = "Missing planet id"))]
    pub planet_id: Option<i64>,
}

/// Mission as nested inside a scientist detail: scalar fields only, no
/// back-reference into the parent's mission collection.
#[derive(Debug, Serialize)]
pub struct MissionItem {
    pub id: i64,
    pub name: String,
    pub planet_id: i64,
    pub scientist_id: i64,
}

impl From<Mission> for MissionItem {
    fn from(m: Mission) -> Self {
        Self {
            id: m.id,
            name: m.name,
            planet_id: m.planet_id,
            scientist_id: m.scientist_id,
        }
    }
}

/// Mission detail returned after creation, with both parents nested.
///
/// The nested scientist and planet deliberately omit their own mission
/// collections, which is what keeps the output cycle-free.
#[derive(Debug, Serialize)]
pub struct MissionDetailResponse {
    pub id: i64,
    pub name: String,
    pub planet_id: i64,
    pub scientist_id: i64,
    pub scientist: ScientistItem,
    pub planet: PlanetItem,
}

impl MissionDetailResponse {
    pub fn from_parts(mission: Mission, scientist: Scientist, planet: Planet) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            planet_id: mission.planet_id,
            scientist_id: mission.scientist_id,
            scientist: ScientistItem::from(scientist),
            planet: PlanetItem::from(planet),
        }
    }
}
