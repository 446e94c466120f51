//! SQLite implementation of the planet repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use crate::domain::entities::Planet;
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;

/// Wrapper for converting database rows into domain [`Planet`].
struct Wrapper(Planet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Planet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Planet {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            distance_from_earth: row.try_get("distance_from_earth")?,
            nearest_star: row.try_get("nearest_star")?,
        }))
    }
}

const SELECT_BY_ID: &str =
    "SELECT id, name, distance_from_earth, nearest_star FROM planets WHERE id = ?";
const SELECT_ALL: &str =
    "SELECT id, name, distance_from_earth, nearest_star FROM planets ORDER BY id";

/// SQLite repository for the planet catalog.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetRepository for SqlitePlanetRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(Wrapper::maybe(row))
    }

    async fn list(&self) -> Result<Vec<Planet>, AppError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
