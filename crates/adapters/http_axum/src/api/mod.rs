//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod characters;
#[allow(clippy::missing_errors_doc)]
pub mod favorites;
#[allow(clippy::missing_errors_doc)]
pub mod planets;
#[allow(clippy::missing_errors_doc)]
pub mod starships;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::error::NotFoundError;

use crate::error::ApiError;
use crate::state::AppState;

/// `{data: ...}` envelope used by list and get endpoints.
#[derive(Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

/// `{message: ...}` body used by delete and favorite endpoints.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Parse a path segment as an integer id.
///
/// A segment that is not an integer is reported as a missing `entity`.
pub(crate) fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| ApiError::from(NotFoundError::new(entity, raw)))
}

/// Build the API sub-router.
pub fn routes<UR, CR, PR, SR, FR>() -> Router<AppState<UR, CR, PR, SR, FR>>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    Router::new()
        // Users
        .route(
            "/user",
            get(users::list::<UR, CR, PR, SR, FR>).post(users::create::<UR, CR, PR, SR, FR>),
        )
        .route(
            "/user/{id}",
            get(users::get::<UR, CR, PR, SR, FR>).delete(users::delete::<UR, CR, PR, SR, FR>),
        )
        .route(
            "/user/favorites/{user_id}",
            get(users::favorites::<UR, CR, PR, SR, FR>),
        )
        // Characters
        .route("/character", get(characters::list::<UR, CR, PR, SR, FR>))
        .route(
            "/character/{id}",
            get(characters::get::<UR, CR, PR, SR, FR>)
                .put(characters::update::<UR, CR, PR, SR, FR>),
        )
        // Planets
        .route("/planet", get(planets::list::<UR, CR, PR, SR, FR>))
        .route(
            "/planet/{id}",
            get(planets::get::<UR, CR, PR, SR, FR>).put(planets::update::<UR, CR, PR, SR, FR>),
        )
        // Starships
        .route("/starship", get(starships::list::<UR, CR, PR, SR, FR>))
        .route(
            "/starship/{id}",
            get(starships::get::<UR, CR, PR, SR, FR>)
                .put(starships::update::<UR, CR, PR, SR, FR>),
        )
        // Favorites
        .route(
            "/favoritecharacter",
            get(favorites::list_characters::<UR, CR, PR, SR, FR>),
        )
        .route(
            "/favoriteplanet",
            get(favorites::list_planets::<UR, CR, PR, SR, FR>),
        )
        .route(
            "/favoritestarship",
            get(favorites::list_starships::<UR, CR, PR, SR, FR>),
        )
        .route(
            "/favorite/{kind}/{id}",
            post(favorites::add::<UR, CR, PR, SR, FR>)
                .delete(favorites::remove::<UR, CR, PR, SR, FR>),
        )
}
