//! JSON REST handlers for characters.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::character::{Character, CharacterChanges};
use holocron_domain::id::CharacterId;

use super::{DataBody, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UpdatedBody {
    pub message: String,
    pub character: Character,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<Character>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DataBody<Character>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<UpdatedBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /character`
pub async fn list<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let characters = state.character_service.list_characters().await?;
    Ok(ListResponse::Ok(Json(DataBody { data: characters })))
}

/// `GET /character/{id}`
pub async fn get<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let character_id: CharacterId = parse_id(&id, "Character")?;
    let character = state.character_service.get_character(character_id).await?;
    Ok(GetResponse::Ok(Json(DataBody { data: character })))
}

/// `PUT /character/{id}`
///
/// Only `name`, `gender` and `height` are taken from the body.
pub async fn update<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path(id): Path<String>,
    body: Result<Json<CharacterChanges>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let character_id: CharacterId = parse_id(&id, "Character")?;
    // A missing row wins over a bad body.
    state.character_service.get_character(character_id).await?;
    let Json(changes) = body?;
    let character = state
        .character_service
        .update_character(character_id, changes)
        .await?;
    Ok(UpdateResponse::Ok(Json(UpdatedBody {
        message: format!("Character {character_id} updated successfully"),
        character,
    })))
}
