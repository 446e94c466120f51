//! SQLite implementation of the mission repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use crate::domain::entities::{Mission, NewMission};
use crate::domain::repositories::MissionRepository;
use crate::error::AppError;

/// Wrapper for converting database rows into domain [`Mission`].
struct Wrapper(Mission);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Mission {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            planet_id: row.try_get("planet_id")?,
            scientist_id: row.try_get("scientist_id")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO missions (name, planet_id, scientist_id) VALUES (?, ?, ?) \
                      RETURNING id, name, planet_id, scientist_id";
const SELECT_FOR_SCIENTIST: &str = "SELECT id, name, planet_id, scientist_id FROM missions \
                                    WHERE scientist_id = ? ORDER BY id";

/// SQLite repository for mission management.
pub struct SqliteMissionRepository {
    pool: SqlitePool,
}

impl SqliteMissionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionRepository for SqliteMissionRepository {
    async fn create(&self, new_mission: NewMission) -> Result<Mission, AppError> {
        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(&new_mission.name)
            .bind(new_mission.planet_id)
            .bind(new_mission.scientist_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    async fn list_for_scientist(&self, scientist_id: i64) -> Result<Vec<Mission>, AppError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_FOR_SCIENTIST)
            .bind(scientist_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
