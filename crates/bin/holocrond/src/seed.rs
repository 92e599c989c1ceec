//! Catalog seeding from a TOML file.
//!
//! The HTTP API never creates characters, planets or starships, so a fresh
//! database is populated here. Each table is seeded only while it is empty,
//! which makes restarting with the same file a no-op.
//!
//! ```toml
//! [[characters]]
//! name = "Luke Skywalker"
//! gender = "male"
//! height = "172"
//!
//! [[planets]]
//! name = "Tatooine"
//! weather = "arid"
//! ```

use serde::Deserialize;

use holocron_app::ports::{CharacterRepository, PlanetRepository, StarshipRepository};
use holocron_app::services::character_service::CharacterService;
use holocron_app::services::planet_service::PlanetService;
use holocron_app::services::starship_service::StarshipService;
use holocron_domain::character::NewCharacter;
use holocron_domain::error::HolocronError;
use holocron_domain::planet::NewPlanet;
use holocron_domain::starship::NewStarship;

/// Catalog rows to insert at startup.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSeed {
    pub characters: Vec<NewCharacter>,
    pub planets: Vec<NewPlanet>,
    pub starships: Vec<NewStarship>,
}

/// Number of rows inserted per table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub characters: usize,
    pub planets: usize,
    pub starships: usize,
}

impl CatalogSeed {
    /// Read a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Insert the rows of every table that is still empty.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Storage`] when a list or insert fails.
    pub async fn apply<C, P, S>(
        self,
        characters: &CharacterService<C>,
        planets: &PlanetService<P>,
        starships: &StarshipService<S>,
    ) -> Result<SeedReport, SeedError>
    where
        C: CharacterRepository,
        P: PlanetRepository,
        S: StarshipRepository,
    {
        let mut report = SeedReport::default();

        if characters.list_characters().await?.is_empty() {
            for character in self.characters {
                characters.create_character(character).await?;
                report.characters += 1;
            }
        }
        if planets.list_planets().await?.is_empty() {
            for planet in self.planets {
                planets.create_planet(planet).await?;
                report.planets += 1;
            }
        }
        if starships.list_starships().await?.is_empty() {
            for starship in self.starships {
                starships.create_starship(starship).await?;
                report.starships += 1;
            }
        }

        Ok(report)
    }
}

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// File I/O failure.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),
    /// TOML parse failure.
    #[error("failed to parse catalog file")]
    Parse(#[from] toml::de::Error),
    /// Insert or lookup failure.
    #[error("failed to seed catalog")]
    Storage(#[from] HolocronError),
}
