//! `SQLite` implementation of [`PlanetRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::PlanetRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet};

use crate::error::StorageError;
use crate::row::Wrapper;

impl<'r> FromRow<'r, SqliteRow> for Wrapper<Planet> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Planet {
            id: PlanetId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            weather: row.try_get("weather")?,
            terrain: row.try_get("terrain")?,
            population: row.try_get("population")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO planets (name, weather, terrain, population) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM planets WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM planets";
const UPDATE: &str =
    "UPDATE planets SET name = ?, weather = ?, terrain = ?, population = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM planets WHERE id = ?";

/// `SQLite`-backed planet repository.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlanetRepository for SqlitePlanetRepository {
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&planet.name)
                .bind(&planet.weather)
                .bind(&planet.terrain)
                .bind(&planet.population)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(planet.into_planet(PlanetId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper<Planet>> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<Planet>> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(&self, planet: Planet) -> impl Future<Output = Result<Planet, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&planet.name)
                .bind(&planet.weather)
                .bind(&planet.terrain)
                .bind(&planet.population)
                .bind(planet.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(planet)
        }
    }

    fn delete(&self, id: PlanetId) -> impl Future<Output = Result<(), HolocronError>> + Send {
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
