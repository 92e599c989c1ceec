//! User service — registration, lookup, removal, and the per-user favorites view.

use holocron_domain::error::{HolocronError, NotFoundError, ValidationError};
use holocron_domain::favorite::{Favorite, FavoriteKind};
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use crate::ports::{FavoriteRepository, UserRepository};

/// Application service for user operations.
pub struct UserService<U, F> {
    repo: U,
    favorites: F,
}

impl<U, F> UserService<U, F>
where
    U: UserRepository,
    F: FavoriteRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: U, favorites: F) -> Self {
        Self { repo, favorites }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmailAlreadyExists`] when the email is
    /// taken, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, HolocronError> {
        if self.repo.find_by_email(&user.email).await?.is_some() {
            return Err(ValidationError::EmailAlreadyExists.into());
        }
        let created = self.repo.create(user).await?;
        tracing::info!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, HolocronError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("User", id).into())
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HolocronError> {
        self.repo.get_all().await
    }

    /// Delete a user. Their favorites, if any, are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HolocronError> {
        let user = self.get_user(id).await?;
        self.repo.delete(user.id).await
    }

    /// List the favorite characters attributed to a user.
    ///
    /// Favorites are created without a user, so this is empty unless rows
    /// were attributed by other means.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_favorite_characters(
        &self,
        id: UserId,
    ) -> Result<Vec<Favorite>, HolocronError> {
        let user = self.get_user(id).await?;
        self.favorites
            .find_by_user(FavoriteKind::Character, user.id)
            .await
    }
}
