//! Mission entity linking a scientist to a planet.

/// A mission sending one scientist to one planet.
#[derive(Debug, Clone)]
pub struct Mission {
    pub id: i64,
    pub name: String,
    pub planet_id: i64,
    pub scientist_id: i64,
}

impl Mission {
    /// Creates a new Mission instance.
    pub fn new(id: i64, name: String, planet_id: i64, scientist_id: i64) -> Self {
        Self {
            id,
            name,
            planet_id,
            scientist_id,
        }
    }
}

/// Input data for creating a new mission.
///
/// Both ids must reference existing rows; the mission service checks
/// this before insert.
#[derive(Debug, Clone)]
pub struct NewMission {
    pub name: String,
    pub planet_id: i64,
    pub scientist_id: i64,
}
