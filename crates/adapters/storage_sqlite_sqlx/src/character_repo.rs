//! `SQLite` implementation of [`CharacterRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::CharacterRepository;
use holocron_domain::character::{Character, NewCharacter};
use holocron_domain::error::HolocronError;
use holocron_domain::id::CharacterId;

use crate::error::StorageError;
use crate::row::Wrapper;

impl<'r> FromRow<'r, SqliteRow> for Wrapper<Character> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Character {
            id: CharacterId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            gender: row.try_get("gender")?,
            height: row.try_get("height")?,
            hair_color: row.try_get("hair_color")?,
            eye_color: row.try_get("eye_color")?,
            birth_year: row.try_get("birth_year")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO characters (name, gender, height, hair_color, eye_color, birth_year)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM characters WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM characters";
const UPDATE: &str = r"
    UPDATE characters
    SET name = ?, gender = ?, height = ?, hair_color = ?, eye_color = ?, birth_year = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM characters WHERE id = ?";

/// `SQLite`-backed character repository.
pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

impl SqliteCharacterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CharacterRepository for SqliteCharacterRepository {
    fn create(
        &self,
        character: NewCharacter,
    ) -> impl Future<Output = Result<Character, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&character.name)
                .bind(&character.gender)
                .bind(&character.height)
                .bind(&character.hair_color)
                .bind(&character.eye_color)
                .bind(&character.birth_year)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(character.into_character(CharacterId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: CharacterId,
    ) -> impl Future<Output = Result<Option<Character>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper<Character>> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Character>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<Character>> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(
        &self,
        character: Character,
    ) -> impl Future<Output = Result<Character, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&character.name)
                .bind(&character.gender)
                .bind(&character.height)
                .bind(&character.hair_color)
                .bind(&character.eye_color)
                .bind(&character.birth_year)
                .bind(character.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(character)
        }
    }

    fn delete(&self, id: CharacterId) -> impl Future<Output = Result<(), HolocronError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteCharacterRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteCharacterRepository::new(db.pool().clone())
    }

    fn obi_wan() -> NewCharacter {
        NewCharacter {
            name: "Obi-Wan Kenobi".to_string(),
            gender: "male".to_string(),
            height: "182".to_string(),
            hair_color: Some("auburn, white".to_string()),
            eye_color: Some("blue-gray".to_string()),
            birth_year: Some("57BBY".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_character_with_all_columns() {
        let repo = setup().await;

        let created = repo.create(obi_wan()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.birth_year.as_deref(), Some("57BBY"));
    }

    #[tokio::test]
    async fn should_return_none_when_character_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(CharacterId::from_raw(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_persist_update() {
        let repo = setup().await;
        let mut character = repo.create(obi_wan()).await.unwrap();

        character.name = "Ben Kenobi".to_string();
        repo.update(character.clone()).await.unwrap();

        let fetched = repo.get_by_id(character.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ben Kenobi");
        assert_eq!(fetched.height, "182");
    }

    #[tokio::test]
    async fn should_delete_character_when_exists() {
        let repo = setup().await;
        let created = repo.create(obi_wan()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
