//! JSON REST handlers for starships.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::id::StarshipId;
use holocron_domain::starship::{Starship, StarshipChanges};

use super::{DataBody, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UpdatedBody {
    pub message: String,
    pub starship: Starship,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<Starship>>>),
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
    Ok(Json<DataBody<Starship>>),
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

/// `GET /starship`
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
    let starships = state.starship_service.list_starships().await?;
    Ok(ListResponse::Ok(Json(DataBody { data: starships })))
}

/// `GET /starship/{id}`
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
    let starship_id: StarshipId = parse_id(&id, "Starship")?;
    let starship = state.starship_service.get_starship(starship_id).await?;
    Ok(GetResponse::Ok(Json(DataBody { data: starship })))
}

/// `PUT /starship/{id}`
///
/// Only `name` and `model` are taken from the body.
pub async fn update<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path(id): Path<String>,
    body: Result<Json<StarshipChanges>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let starship_id: StarshipId = parse_id(&id, "Starship")?;
    // A missing row wins over a bad body.
    state.starship_service.get_starship(starship_id).await?;
    let Json(changes) = body?;
    let starship = state
        .starship_service
        .update_starship(starship_id, changes)
        .await?;
    Ok(UpdateResponse::Ok(Json(UpdatedBody {
        message: format!("Starship {starship_id} updated successfully"),
        starship,
    })))
}
