//! SQLite implementation of the scientist repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use crate::domain::entities::{NewScientist, Scientist, ScientistPatch};
use crate::domain::repositories::ScientistRepository;
use crate::error::AppError;

/// Wrapper for converting database rows into domain [`Scientist`].
struct Wrapper(Scientist);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Scientist> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Scientist {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            field_of_study: row.try_get("field_of_study")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO scientists (name, field_of_study) VALUES (?, ?) \
                      RETURNING id, name, field_of_study";
const SELECT_BY_ID: &str = "SELECT id, name, field_of_study FROM scientists WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, field_of_study FROM scientists ORDER BY id";
const UPDATE: &str = "UPDATE scientists SET \
                          name = COALESCE(?, name), \
                          field_of_study = COALESCE(?, field_of_study) \
                      WHERE id = ? \
                      RETURNING id, name, field_of_study";
const DELETE_MISSIONS: &str = "DELETE FROM missions WHERE scientist_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM scientists WHERE id = ?";

/// SQLite repository for scientist management.
///
/// Deletion is a hard delete and removes dependent missions in the same
/// transaction, mirroring the `ON DELETE CASCADE` constraint in the schema.
pub struct SqliteScientistRepository {
    pool: SqlitePool,
}

impl SqliteScientistRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScientistRepository for SqliteScientistRepository {
    async fn create(&self, new_scientist: NewScientist) -> Result<Scientist, AppError> {
        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(&new_scientist.name)
            .bind(&new_scientist.field_of_study)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Scientist>, AppError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(Wrapper::maybe(row))
    }

    async fn list(&self) -> Result<Vec<Scientist>, AppError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: i64, patch: ScientistPatch) -> Result<Option<Scientist>, AppError> {
        let row: Option<Wrapper> = sqlx::query_as(UPDATE)
            .bind(patch.name)
            .bind(patch.field_of_study)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(Wrapper::maybe(row))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(DELETE_MISSIONS)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(DELETE_BY_ID).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
