//! Planet service — use-cases for catalog planets.

use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{NewPlanet, Planet, PlanetChanges};

use crate::ports::PlanetRepository;

/// Application service for planet operations.
pub struct PlanetService<R> {
    repo: R,
}

impl<R: PlanetRepository> PlanetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new planet.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, planet), fields(name = %planet.name))]
    pub async fn create_planet(&self, planet: NewPlanet) -> Result<Planet, HolocronError> {
        self.repo.create(planet).await
    }

    /// Look up a planet by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_planet(&self, id: PlanetId) -> Result<Planet, HolocronError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Planet", id).into())
    }

    /// List all planets.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, HolocronError> {
        self.repo.get_all().await
    }

    /// Merge `changes` into a stored planet and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no planet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_planet(
        &self,
        id: PlanetId,
        changes: PlanetChanges,
    ) -> Result<Planet, HolocronError> {
        let mut planet = self.get_planet(id).await?;
        planet.apply(changes);
        self.repo.update(planet).await
    }
}
