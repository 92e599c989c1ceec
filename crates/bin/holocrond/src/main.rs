//! # holocrond — holocron daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`holocron.toml` plus env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Seed empty catalog tables from the configured catalog file
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod seed;

use axum::ServiceExt;
use axum::extract::Request;
use holocron_adapter_http_axum::state::AppState;
use holocron_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteCharacterRepository, SqliteFavoriteRepository,
    SqlitePlanetRepository, SqliteStarshipRepository, SqliteUserRepository,
};
use holocron_app::services::character_service::CharacterService;
use holocron_app::services::favorite_service::FavoriteService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::starship_service::StarshipService;
use holocron_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::seed::CatalogSeed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services. Favorites check targets through their own catalog repositories.
    let user_service = UserService::new(
        SqliteUserRepository::new(pool.clone()),
        SqliteFavoriteRepository::new(pool.clone()),
    );
    let character_service = CharacterService::new(SqliteCharacterRepository::new(pool.clone()));
    let planet_service = PlanetService::new(SqlitePlanetRepository::new(pool.clone()));
    let starship_service = StarshipService::new(SqliteStarshipRepository::new(pool.clone()));
    let favorite_service = FavoriteService::new(
        SqliteFavoriteRepository::new(pool.clone()),
        SqliteCharacterRepository::new(pool.clone()),
        SqlitePlanetRepository::new(pool.clone()),
        SqliteStarshipRepository::new(pool),
    );

    if let Some(path) = &config.seed.catalog {
        let report = CatalogSeed::from_file(path)?
            .apply(&character_service, &planet_service, &starship_service)
            .await?;
        tracing::info!(
            catalog = %path,
            characters = report.characters,
            planets = report.planets,
            starships = report.starships,
            "catalog seeded"
        );
    }

    // HTTP
    let state = AppState::new(
        user_service,
        character_service,
        planet_service,
        starship_service,
        favorite_service,
    );
    let app = holocron_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "holocrond listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("holocrond stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
