//! Favorite service — add, remove, and list favorites of each kind.
//!
//! Neither adding nor removing is guarded against concurrent calls: two
//! simultaneous adds for the same target both insert a row.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::favorite::{Favorite, FavoriteKind};
use holocron_domain::id::{CharacterId, PlanetId, StarshipId};

use crate::ports::{CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository};

/// Application service for favorite operations.
///
/// Holds the catalog repositories so it can check that a target exists
/// before pointing a favorite at it.
pub struct FavoriteService<F, C, P, S> {
    repo: F,
    characters: C,
    planets: P,
    starships: S,
}

impl<F, C, P, S> FavoriteService<F, C, P, S>
where
    F: FavoriteRepository,
    C: CharacterRepository,
    P: PlanetRepository,
    S: StarshipRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: F, characters: C, planets: P, starships: S) -> Self {
        Self {
            repo,
            characters,
            planets,
            starships,
        }
    }

    /// List every favorite row of one kind.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_favorites(&self, kind: FavoriteKind) -> Result<Vec<Favorite>, HolocronError> {
        self.repo.get_all(kind).await
    }

    /// Record `target_id` as a favorite. Repeated calls add repeated rows.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] naming the resource when the
    /// target does not exist, or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_favorite(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> Result<Favorite, HolocronError> {
        if !self.target_exists(kind, target_id).await? {
            return Err(NotFoundError::new(kind.label(), target_id).into());
        }
        let favorite = self.repo.create(kind, target_id).await?;
        tracing::debug!(favorite_id = %favorite.id, "favorite added");
        Ok(favorite)
    }

    /// Remove the oldest favorite row pointing at `target_id`.
    ///
    /// Only one row is removed per call, even when duplicates exist.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no row points at the target,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_favorite(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> Result<Favorite, HolocronError> {
        let favorite = self
            .repo
            .find_first_by_target(kind, target_id)
            .await?
            .ok_or_else(|| NotFoundError::new(kind.favorite_label(), target_id))?;
        self.repo.delete(kind, favorite.id).await?;
        Ok(favorite)
    }

    async fn target_exists(&self, kind: FavoriteKind, target_id: i64) -> Result<bool, HolocronError> {
        let found = match kind {
            FavoriteKind::Character => self
                .characters
                .get_by_id(CharacterId::from_raw(target_id))
                .await?
                .is_some(),
            FavoriteKind::Planet => self
                .planets
                .get_by_id(PlanetId::from_raw(target_id))
                .await?
                .is_some(),
            FavoriteKind::Starship => self
                .starships
                .get_by_id(StarshipId::from_raw(target_id))
                .await?
                .is_some(),
        };
        Ok(found)
    }
}
