//! `SQLite` implementation of [`FavoriteRepository`].
//!
//! Each [`FavoriteKind`] maps to its own table. Selects alias the target
//! column to `target_id` and add the kind as a literal column so one row
//! mapper serves all three tables.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::FavoriteRepository;
use holocron_domain::error::HolocronError;
use holocron_domain::favorite::{Favorite, FavoriteKind};
use holocron_domain::id::{FavoriteId, UserId};

use crate::error::StorageError;
use crate::row::{Wrapper, decode_error};

impl<'r> FromRow<'r, SqliteRow> for Wrapper<Favorite> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("kind")?;
        let user_id: Option<i64> = row.try_get("user_id")?;

        Ok(Self(Favorite {
            id: FavoriteId::from_raw(row.try_get("id")?),
            kind: kind.parse().map_err(decode_error)?,
            target_id: row.try_get("target_id")?,
            user_id: user_id.map(UserId::from_raw),
        }))
    }
}

struct Queries {
    insert: &'static str,
    select_all: &'static str,
    select_first_by_target: &'static str,
    select_by_user: &'static str,
    delete_by_id: &'static str,
}

macro_rules! favorite_queries {
    ($table:literal, $column:literal, $kind:literal) => {
        Queries {
            insert: concat!("INSERT INTO ", $table, " (", $column, ") VALUES (?)"),
            select_all: concat!(
                "SELECT id, user_id, ", $column, " AS target_id, '", $kind, "' AS kind FROM ",
                $table
            ),
            select_first_by_target: concat!(
                "SELECT id, user_id, ", $column, " AS target_id, '", $kind, "' AS kind FROM ",
                $table, " WHERE ", $column, " = ? ORDER BY id LIMIT 1"
            ),
            select_by_user: concat!(
                "SELECT id, user_id, ", $column, " AS target_id, '", $kind, "' AS kind FROM ",
                $table, " WHERE user_id = ?"
            ),
            delete_by_id: concat!("DELETE FROM ", $table, " WHERE id = ?"),
        }
    };
}

static CHARACTER: Queries = favorite_queries!("favorite_characters", "character_id", "character");
static PLANET: Queries = favorite_queries!("favorite_planets", "planet_id", "planet");
static STARSHIP: Queries = favorite_queries!("favorite_starships", "starship_id", "starship");

fn queries(kind: FavoriteKind) -> &'static Queries {
    match kind {
        FavoriteKind::Character => &CHARACTER,
        FavoriteKind::Planet => &PLANET,
        FavoriteKind::Starship => &STARSHIP,
    }
}

/// `SQLite`-backed favorite repository covering all three favorite tables.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    fn create(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> impl Future<Output = Result<Favorite, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(queries(kind).insert)
                .bind(target_id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Favorite {
                id: FavoriteId::from_raw(result.last_insert_rowid()),
                kind,
                target_id,
                user_id: None,
            })
        }
    }

    fn get_all(
        &self,
        kind: FavoriteKind,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<Favorite>> = sqlx::query_as(queries(kind).select_all)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn find_first_by_target(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper<Favorite>> =
                sqlx::query_as(queries(kind).select_first_by_target)
                    .bind(target_id)
                    .fetch_optional(&pool)
                    .await
                    .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_user(
        &self,
        kind: FavoriteKind,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<Favorite>> = sqlx::query_as(queries(kind).select_by_user)
                .bind(user_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn delete(
        &self,
        kind: FavoriteKind,
        id: FavoriteId,
    ) -> impl Future<Output = Result<(), HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(queries(kind).delete_by_id)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
