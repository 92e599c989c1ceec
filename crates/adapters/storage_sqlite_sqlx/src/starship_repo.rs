//! `SQLite` implementation of [`StarshipRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::StarshipRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::StarshipId;
use holocron_domain::starship::{NewStarship, Starship};

use crate::error::StorageError;
use crate::row::Wrapper;

impl<'r> FromRow<'r, SqliteRow> for Wrapper<Starship> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Starship {
            id: StarshipId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            model: row.try_get("model")?,
            manufacturer: row.try_get("manufacturer")?,
            starship_class: row.try_get("starship_class")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO starships (name, model, manufacturer, starship_class) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM starships WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM starships";
const UPDATE: &str =
    "UPDATE starships SET name = ?, model = ?, manufacturer = ?, starship_class = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM starships WHERE id = ?";

/// `SQLite`-backed starship repository.
pub struct SqliteStarshipRepository {
    pool: SqlitePool,
}

impl SqliteStarshipRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StarshipRepository for SqliteStarshipRepository {
    fn create(
        &self,
        starship: NewStarship,
    ) -> impl Future<Output = Result<Starship, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&starship.name)
                .bind(&starship.model)
                .bind(&starship.manufacturer)
                .bind(&starship.starship_class)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(starship.into_starship(StarshipId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: StarshipId,
    ) -> impl Future<Output = Result<Option<Starship>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper<Starship>> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Starship>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<Starship>> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(
        &self,
        starship: Starship,
    ) -> impl Future<Output = Result<Starship, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&starship.name)
                .bind(&starship.model)
                .bind(&starship.manufacturer)
                .bind(&starship.starship_class)
                .bind(starship.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(starship)
        }
    }

    fn delete(&self, id: StarshipId) -> impl Future<Output = Result<(), HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
