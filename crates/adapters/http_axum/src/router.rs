//! Axum router assembly.

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use holocron_app::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};
use holocron_domain::error::NotFoundError;

use crate::error::ApiError;
use crate::state::AppState;

/// The served application: the router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Build the top-level axum [`Router`], wrapped so `/user/` is served as
/// `/user`.
///
/// Serves the sitemap at `/`, a liveness check at `/health` and merges the
/// resource routes. Unmatched paths get a JSON 404. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
///
/// The path is trimmed outside the router since routing happens before any
/// layer added with [`Router::layer`] sees the request.
pub fn build<UR, CR, PR, SR, FR>(state: AppState<UR, CR, PR, SR, FR>) -> App
where
    UR: UserRepository + Send + Sync + 'static,
    CR: CharacterRepository + Send + Sync + 'static,
    PR: PlanetRepository + Send + Sync + 'static,
    SR: StarshipRepository + Send + Sync + 'static,
    FR: FavoriteRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", get(crate::sitemap::index))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> ApiError {
    NotFoundError::new("Route", uri.path()).into()
}
