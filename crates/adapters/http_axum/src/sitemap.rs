//! Machine-readable sitemap served at `/`.
//!
//! The table is written out by hand next to the router. The router tests
//! walk it and fail if an entry is not routed.

use axum::Json;
use serde::Serialize;

/// One routed method and path.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn route(method: &'static str, path: &'static str, description: &'static str) -> RouteInfo {
    RouteInfo {
        method,
        path,
        description,
    }
}

/// Every route served by [`crate::router::build`].
pub const ROUTES: &[RouteInfo] = &[
    route("GET", "/", "this sitemap"),
    route("GET", "/health", "liveness check"),
    route("GET", "/user", "list users"),
    route("POST", "/user", "register a user"),
    route("GET", "/user/{id}", "get a user"),
    route("DELETE", "/user/{id}", "delete a user"),
    route("GET", "/user/favorites/{user_id}", "list a user's favorite characters"),
    route("GET", "/character", "list characters"),
    route("GET", "/character/{id}", "get a character"),
    route("PUT", "/character/{id}", "update name, gender, height"),
    route("GET", "/planet", "list planets"),
    route("GET", "/planet/{id}", "get a planet"),
    route("PUT", "/planet/{id}", "update name, weather"),
    route("GET", "/starship", "list starships"),
    route("GET", "/starship/{id}", "get a starship"),
    route("PUT", "/starship/{id}", "update name, model"),
    route("GET", "/favoritecharacter", "list favorite characters"),
    route("GET", "/favoriteplanet", "list favorite planets"),
    route("GET", "/favoritestarship", "list favorite starships"),
    route("POST", "/favorite/character/{id}", "add a favorite character"),
    route("DELETE", "/favorite/character/{id}", "remove a favorite character"),
    route("POST", "/favorite/planet/{id}", "add a favorite planet"),
    route("DELETE", "/favorite/planet/{id}", "remove a favorite planet"),
    route("POST", "/favorite/starship/{id}", "add a favorite starship"),
    route("DELETE", "/favorite/starship/{id}", "remove a favorite starship"),
];

#[derive(Serialize)]
pub struct SitemapBody {
    pub routes: &'static [RouteInfo],
}

/// `GET /`
pub async fn index() -> Json<SitemapBody> {
    Json(SitemapBody { routes: ROUTES })
}
