//! DTOs for planet endpoints.

use serde::Serialize;

use crate::domain::entities::Planet;

/// Planet as returned by the list endpoint and nested inside mission
/// responses: no mission collection.
#[derive(Debug, Serialize)]
pub struct PlanetItem {
    pub id: i64,
    pub name: String,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl From<Planet> for PlanetItem {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            distance_from_earth: p.distance_from_earth,
            nearest_star: p.nearest_star,
        }
    }
}
