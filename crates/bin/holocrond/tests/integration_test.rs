//! End-to-end tests for the full holocrond stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use holocron_adapter_http_axum::router;
use holocron_adapter_http_axum::state::AppState;
use holocron_adapter_storage_sqlite_sqlx::{
    Config, SqliteCharacterRepository, SqliteFavoriteRepository, SqlitePlanetRepository,
    SqliteStarshipRepository, SqliteUserRepository,
};
use holocron_app::ports::{CharacterRepository, PlanetRepository, StarshipRepository};
use holocron_app::services::character_service::CharacterService;
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::starship_service::StarshipService;
use holocron_app::services::user_service::UserService;
use holocron_domain::character::NewCharacter;
use holocron_domain::planet::NewPlanet;
use holocron_domain::starship::NewStarship;
use serde_json::{Value, json};
use tower::ServiceExt;

/// A fully-wired router backed by an in-memory `SQLite` database, plus the
/// ids of the seeded catalog rows.
struct TestApp {
    router: router::App,
    character_id: i64,
    planet_id: i64,
    starship_id: i64,
}

impl TestApp {
    async fn new() -> Self {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .expect("in-memory database should initialise");
        let pool = db.pool().clone();

        let character = SqliteCharacterRepository::new(pool.clone())
            .create(NewCharacter {
                name: "Luke Skywalker".to_string(),
                gender: "male".to_string(),
                height: "172".to_string(),
                hair_color: Some("blond".to_string()),
                eye_color: Some("blue".to_string()),
                birth_year: Some("19BBY".to_string()),
            })
            .await
            .unwrap();
        let planet = SqlitePlanetRepository::new(pool.clone())
            .create(NewPlanet {
                name: "Tatooine".to_string(),
                weather: "arid".to_string(),
                terrain: Some("desert".to_string()),
                population: Some("200000".to_string()),
            })
            .await
            .unwrap();
        let starship = SqliteStarshipRepository::new(pool.clone())
            .create(NewStarship {
                name: "Millennium Falcon".to_string(),
                model: "YT-1300".to_string(),
                manufacturer: Some("Corellian Engineering Corporation".to_string()),
                starship_class: Some("Light freighter".to_string()),
            })
            .await
            .unwrap();

        let state = AppState::new(
            UserService::new(
                SqliteUserRepository::new(pool.clone()),
                SqliteFavoriteRepository::new(pool.clone()),
            ),
            CharacterService::new(SqliteCharacterRepository::new(pool.clone())),
            PlanetService::new(SqlitePlanetRepository::new(pool.clone())),
            StarshipService::new(SqliteStarshipRepository::new(pool.clone())),
            FavoriteService::new(
                SqliteFavoriteRepository::new(pool.clone()),
                SqliteCharacterRepository::new(pool.clone()),
                SqlitePlanetRepository::new(pool.clone()),
                SqliteStarshipRepository::new(pool),
            ),
        );

        Self {
            router: router::build(state),
            character_id: character.id.as_i64(),
            planet_id: planet.id.as_i64(),
            starship_id: starship.id.as_i64(),
        }
    }

    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = self.router.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    async fn create_leia(&self) -> (StatusCode, Value) {
        self.call(
            "POST",
            "/user",
            Some(json!({
                "email": "leia@alderaan.gov",
                "password": "help-me-obi-wan",
                "firstName": "Leia",
                "lastName": "Organa"
            })),
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// Health and sitemap
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = TestApp::new().await;

    let (status, body) = app.call("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn should_serve_sitemap_at_root() {
    let app = TestApp::new().await;

    let (status, body) = app.call("GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths: Vec<&str> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["path"].as_str())
        .collect();
    assert!(paths.contains(&"/user/favorites/{user_id}"));
    assert!(paths.contains(&"/favoritestarship"));
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_get_and_delete_user() {
    let app = TestApp::new().await;

    let (status, created) = app.create_leia().await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "User created successfully");
    assert_eq!(created["user"]["is_active"], true);
    assert!(created["user"].get("password").is_none());
    let id = created["user"]["id"].as_i64().unwrap();

    let (status, fetched) = app.call("GET", &format!("/user/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["user"]);

    let (status, deleted) = app.call("DELETE", &format!("/user/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], format!("User {id} deleted successfully"));

    let (status, missing) = app.call("GET", &format!("/user/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], "User not found");
}

#[tokio::test]
async fn should_reject_duplicate_email_without_creating_row() {
    let app = TestApp::new().await;
    app.create_leia().await;

    let (status, body) = app.create_leia().await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already exists");
    let (_, list) = app.call("GET", "/user", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_user_with_missing_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .call(
            "POST",
            "/user",
            Some(json!({ "email": "han@falcon.com", "password": "x", "firstName": "Han" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");
    let (_, list) = app.call("GET", "/user", None).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_user_when_body_is_null() {
    let app = TestApp::new().await;

    let (status, body) = app.call("POST", "/user", Some(Value::Null)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn should_list_users_when_path_has_trailing_slash() {
    let app = TestApp::new().await;
    app.create_leia().await;

    let (status, body) = app.call("GET", "/user/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["email"], "leia@alderaan.gov");
}

#[tokio::test]
async fn should_answer_json_not_found_for_unknown_route() {
    let app = TestApp::new().await;

    let (status, body) = app.call("GET", "/vehicle/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_user() {
    let app = TestApp::new().await;

    let (status, _) = app.call("DELETE", "/user/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_empty_favoritos_when_user_has_no_favorites() {
    let app = TestApp::new().await;
    let (_, created) = app.create_leia().await;
    let id = created["user"]["id"].as_i64().unwrap();
    app.call("POST", &format!("/favorite/character/{}", app.character_id), None)
        .await;

    let (status, body) = app.call("GET", &format!("/user/favorites/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "ok", "favoritos": [] }));
}

#[tokio::test]
async fn should_return_not_found_for_favorites_of_missing_user() {
    let app = TestApp::new().await;

    let (status, body) = app.call("GET", "/user/favorites/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_and_get_seeded_catalog() {
    let app = TestApp::new().await;

    let (status, planets) = app.call("GET", "/planet", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(planets["data"][0]["name"], "Tatooine");

    let (status, starship) = app
        .call("GET", &format!("/starship/{}", app.starship_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(starship["data"]["model"], "YT-1300");
    assert_eq!(starship["data"]["starship_class"], "Light freighter");
}

#[tokio::test]
async fn should_keep_unlisted_fields_when_character_updated() {
    let app = TestApp::new().await;
    let uri = format!("/character/{}", app.character_id);

    let (status, body) = app
        .call(
            "PUT",
            &uri,
            Some(json!({ "name": "Luke", "hair_color": "black", "eye_color": null })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Character {} updated successfully", app.character_id)
    );

    let (_, fetched) = app.call("GET", &uri, None).await;
    assert_eq!(fetched["data"]["name"], "Luke");
    assert_eq!(fetched["data"]["gender"], "male");
    assert_eq!(fetched["data"]["height"], "172");
    assert_eq!(fetched["data"]["hair_color"], "blond");
    assert_eq!(fetched["data"]["eye_color"], "blue");
}

#[tokio::test]
async fn should_update_planet_weather_only() {
    let app = TestApp::new().await;

    let (status, body) = app
        .call(
            "PUT",
            &format!("/planet/{}", app.planet_id),
            Some(json!({ "weather": "scorching", "terrain": "ocean" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["planet"]["name"], "Tatooine");
    assert_eq!(body["planet"]["weather"], "scorching");
    assert_eq!(body["planet"]["terrain"], "desert");
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_starship() {
    let app = TestApp::new().await;

    let (status, body) = app
        .call("PUT", "/starship/999", Some(json!({ "name": "Slave I" })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Starship not found");
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_starship_without_body() {
    let app = TestApp::new().await;

    let (status, body) = app.call("PUT", "/starship/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Starship not found");
}

#[tokio::test]
async fn should_not_route_user_updates() {
    let app = TestApp::new().await;

    let (status, _) = app.call("PUT", "/user/1", Some(json!({}))).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_not_create_favorite_for_missing_planet() {
    let app = TestApp::new().await;

    let (status, body) = app.call("POST", "/favorite/planet/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Planet not found");
    let (_, list) = app.call("GET", "/favoriteplanet", None).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_allow_duplicate_favorites_and_remove_one_per_call() {
    let app = TestApp::new().await;
    let uri = format!("/favorite/planet/{}", app.planet_id);

    for _ in 0..2 {
        let (status, body) = app.call("POST", &uri, None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body["message"],
            format!("Planet {} added to favorites", app.planet_id)
        );
    }
    let (_, list) = app.call("GET", "/favoriteplanet", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
    assert_eq!(list["data"][0]["planet_id"], app.planet_id);
    assert_eq!(list["data"][0]["user_id"], Value::Null);

    let (status, body) = app.call("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Planet {} removed from favorites", app.planet_id)
    );
    let (_, list) = app.call("GET", "/favoriteplanet", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    app.call("DELETE", &uri, None).await;
    let (status, body) = app.call("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite planet not found");
}

#[tokio::test]
async fn should_keep_favorite_tables_separate() {
    let app = TestApp::new().await;

    app.call("POST", &format!("/favorite/starship/{}", app.starship_id), None)
        .await;
    app.call("POST", &format!("/favorite/character/{}", app.character_id), None)
        .await;

    let (_, starships) = app.call("GET", "/favoritestarship", None).await;
    let (_, characters) = app.call("GET", "/favoritecharacter", None).await;
    let (_, planets) = app.call("GET", "/favoriteplanet", None).await;
    assert_eq!(starships["data"][0]["starship_id"], app.starship_id);
    assert_eq!(characters["data"][0]["character_id"], app.character_id);
    assert!(planets["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_favorite_kind() {
    let app = TestApp::new().await;

    let (status, _) = app.call("POST", "/favorite/vehicle/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
