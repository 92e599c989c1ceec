//! JSON REST handlers for the favorite join tables.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::error::NotFoundError;
use holocron_domain::favorite::{Favorite, FavoriteKind};

use super::{DataBody, MessageBody, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<Favorite>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the add endpoint.
pub enum AddResponse {
    Created(Json<MessageBody>),
}

impl IntoResponse for AddResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the remove endpoint.
pub enum RemoveResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for RemoveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_target(kind: &str, id: &str) -> Result<(FavoriteKind, i64), ApiError> {
    let kind: FavoriteKind = kind
        .parse()
        .map_err(|_| NotFoundError::new("Favorite type", kind))?;
    let target_id = parse_id(id, kind.label())?;
    Ok((kind, target_id))
}

async fn list<UR, CR, PR, SR, FR>(
    state: &AppState<UR, CR, PR, SR, FR>,
    kind: FavoriteKind,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let favorites = state.favorite_service.list_favorites(kind).await?;
    Ok(ListResponse::Ok(Json(DataBody { data: favorites })))
}

/// `GET /favoritecharacter`
pub async fn list_characters<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    list(&state, FavoriteKind::Character).await
}

/// `GET /favoriteplanet`
pub async fn list_planets<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    list(&state, FavoriteKind::Planet).await
}

/// `GET /favoritestarship`
pub async fn list_starships<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    list(&state, FavoriteKind::Starship).await
}

/// `POST /favorite/{kind}/{id}`
pub async fn add<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<AddResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let (kind, target_id) = parse_target(&kind, &id)?;
    state.favorite_service.add_favorite(kind, target_id).await?;
    Ok(AddResponse::Created(Json(MessageBody {
        message: format!("{} {target_id} added to favorites", kind.label()),
    })))
}

/// `DELETE /favorite/{kind}/{id}`
///
/// Removes a single row even when the target was favorited several times.
pub async fn remove<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<RemoveResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let (kind, target_id) = parse_target(&kind, &id)?;
    state.favorite_service.remove_favorite(kind, target_id).await?;
    Ok(RemoveResponse::Ok(Json(MessageBody {
        message: format!("{} {target_id} removed from favorites", kind.label()),
    })))
}
