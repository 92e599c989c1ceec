//! Starship service — use-cases for catalog starships.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::StarshipId;
use holocron_domain::starship::{NewStarship, Starship, StarshipChanges};

use crate::ports::StarshipRepository;

/// Application service for starship operations.
pub struct StarshipService<R> {
    repo: R,
}

impl<R: StarshipRepository> StarshipService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new starship.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, starship), fields(name = %starship.name))]
    pub async fn create_starship(&self, starship: NewStarship) -> Result<Starship, HolocronError> {
        self.repo.create(starship).await
    }

    /// Look up a starship by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no starship with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_starship(&self, id: StarshipId) -> Result<Starship, HolocronError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Starship", id).into())
    }

    /// List all starships.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_starships(&self) -> Result<Vec<Starship>, HolocronError> {
        self.repo.get_all().await
    }

    /// Merge `changes` into a stored starship and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no starship with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_starship(
        &self,
        id: StarshipId,
        changes: StarshipChanges,
    ) -> Result<Starship, HolocronError> {
        let mut starship = self.get_starship(id).await?;
        starship.apply(changes);
        self.repo.update(starship).await
    }
}
