//! JSON REST handlers for planets.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::id::PlanetId;
use holocron_domain::planet::{Planet, PlanetChanges};

use super::{DataBody, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UpdatedBody {
    pub message: String,
    pub planet: Planet,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<Planet>>>),
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
    Ok(Json<DataBody<Planet>>),
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

/// `GET /planet`
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
    let planets = state.planet_service.list_planets().await?;
    Ok(ListResponse::Ok(Json(DataBody { data: planets })))
}

/// `GET /planet/{id}`
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
    let planet_id: PlanetId = parse_id(&id, "Planet")?;
    let planet = state.planet_service.get_planet(planet_id).await?;
    Ok(GetResponse::Ok(Json(DataBody { data: planet })))
}

/// `PUT /planet/{id}`
///
/// Only `name` and `weather` are taken from the body.
pub async fn update<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path(id): Path<String>,
    body: Result<Json<PlanetChanges>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let planet_id: PlanetId = parse_id(&id, "Planet")?;
    // A missing row wins over a bad body.
    state.planet_service.get_planet(planet_id).await?;
    let Json(changes) = body?;
    let planet = state
        .planet_service
        .update_planet(planet_id, changes)
        .await?;
    Ok(UpdateResponse::Ok(Json(UpdatedBody {
        message: format!("Planet {planet_id} updated successfully"),
        planet,
    })))
}
