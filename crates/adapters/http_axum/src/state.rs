//! Shared application state for axum handlers.

use std::sync::Arc;

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_app::services::character_service::CharacterService;
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::starship_service::StarshipService;
use holocron_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, CR, PR, SR, FR> {
    /// User service, also serving the per-user favorites view.
    pub user_service: Arc<UserService<UR, FR>>,
    /// Character service.
    pub character_service: Arc<CharacterService<CR>>,
    /// Planet service.
    pub planet_service: Arc<PlanetService<PR>>,
    /// Starship service.
    pub starship_service: Arc<StarshipService<SR>>,
    /// Favorite service, checking targets against the catalog repositories.
    pub favorite_service: Arc<FavoriteService<FR, CR, PR, SR>>,
}

impl<UR, CR, PR, SR, FR> Clone for AppState<UR, CR, PR, SR, FR> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            character_service: Arc::clone(&self.character_service),
            planet_service: Arc::clone(&self.planet_service),
            starship_service: Arc::clone(&self.starship_service),
            favorite_service: Arc::clone(&self.favorite_service),
        }
    }
}

impl<UR, CR, PR, SR, FR> AppState<UR, CR, PR, SR, FR>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        user_service: UserService<UR, FR>,
        character_service: CharacterService<CR>,
        planet_service: PlanetService<PR>,
        starship_service: StarshipService<SR>,
        favorite_service: FavoriteService<FR, CR, PR, SR>,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            character_service: Arc::new(character_service),
            planet_service: Arc::new(planet_service),
            starship_service: Arc::new(starship_service),
            favorite_service: Arc::new(favorite_service),
        }
    }
}
