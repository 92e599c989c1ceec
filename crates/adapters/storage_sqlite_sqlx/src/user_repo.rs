//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use holocron_app::ports::UserRepository;
use holocron_domain::error::{HolocronError, ValidationError};
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use crate::error::StorageError;
use crate::row::Wrapper;

impl<'r> FromRow<'r, SqliteRow> for Wrapper<User> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: UserId::from_raw(row.try_get("id")?),
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            is_active: row.try_get("is_active")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO users (email, password, first_name, last_name, is_active)
    VALUES (?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_BY_EMAIL: &str = "SELECT * FROM users WHERE email = ?";
const SELECT_ALL: &str = "SELECT * FROM users";
const UPDATE: &str = r"
    UPDATE users
    SET email = ?, password = ?, first_name = ?, last_name = ?, is_active = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// A UNIQUE hit on `users.email` is the only constraint a write can trip.
fn map_write_error(err: sqlx::Error) -> HolocronError {
    if let sqlx::Error::Database(db) = &err
        && db.is_unique_violation()
    {
        return ValidationError::EmailAlreadyExists.into();
    }
    StorageError::from(err).into()
}

/// `SQLite`-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.is_active)
                .execute(&pool)
                .await
                .map_err(map_write_error)?;

            Ok(user.into_user(UserId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper<User>> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_owned();
        async move {
            let row: Option<Wrapper<User>> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<User>> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HolocronError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.is_active)
                .bind(user.id.as_i64())
                .execute(&pool)
                .await
                .map_err(map_write_error)?;

            Ok(user)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HolocronError>> + Send {
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
