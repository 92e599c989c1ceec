//! JSON REST handlers for users.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::error::ValidationError;
use holocron_domain::favorite::Favorite;
use holocron_domain::id::UserId;
use holocron_domain::user::{NewUser, User};

use super::{DataBody, MessageBody, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a user.
///
/// Every field is optional here so a missing key surfaces as
/// `Missing required fields` instead of a deserialization failure. A
/// `null` body is treated the same way.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    fn into_new_user(self) -> Result<NewUser, ApiError> {
        let mut builder = NewUser::builder();
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(password) = self.password {
            builder = builder.password(password);
        }
        if let Some(first_name) = self.first_name {
            builder = builder.first_name(first_name);
        }
        if let Some(last_name) = self.last_name {
            builder = builder.last_name(last_name);
        }
        Ok(builder.build()?)
    }
}

#[derive(Serialize)]
pub struct CreatedBody {
    pub message: &'static str,
    pub user: User,
}

#[derive(Serialize)]
pub struct FavoritesBody {
    pub msg: &'static str,
    pub favoritos: Vec<Favorite>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<User>>>),
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
    Ok(Json<DataBody<User>>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the favorites endpoint.
pub enum FavoritesResponse {
    Ok(Json<FavoritesBody>),
}

impl IntoResponse for FavoritesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /user`
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
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(DataBody { data: users })))
}

/// `GET /user/{id}`
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
    let user_id: UserId = parse_id(&id, "User")?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(DataBody { data: user })))
}

/// `POST /user`
pub async fn create<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    body: Result<Json<Option<CreateUserRequest>>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let new_user = req
        .ok_or(ValidationError::MissingRequiredFields)?
        .into_new_user()?;
    let user = state.user_service.create_user(new_user).await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        message: "User created successfully",
        user,
    })))
}

/// `DELETE /user/{id}`
pub async fn delete<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&id, "User")?;
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody {
        message: format!("User {user_id} deleted successfully"),
    })))
}

/// `GET /user/favorites/{user_id}`
pub async fn favorites<UR, CR, PR, SR, FR>(
    State(state): State<AppState<UR, CR, PR, SR, FR>>,
    Path(id): Path<String>,
) -> Result<FavoritesResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let user_id: UserId = parse_id(&id, "User")?;
    let favoritos = state.user_service.list_favorite_characters(user_id).await?;
    Ok(FavoritesResponse::Ok(Json(FavoritesBody {
        msg: "ok",
        favoritos,
    })))
}
