//! Planet — a world in the catalog.

use serde::{Deserialize, Serialize};

use crate::id::PlanetId;

/// A catalog planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub weather: String,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

/// A planet that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub weather: String,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

impl NewPlanet {
    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_planet(self, id: PlanetId) -> Planet {
        Planet {
            id,
            name: self.name,
            weather: self.weather,
            terrain: self.terrain,
            population: self.population,
        }
    }
}

/// Fields a planet update may overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub weather: Option<String>,
}

impl Planet {
    /// Overwrite each field present in `changes`, keep the others.
    pub fn apply(&mut self, changes: PlanetChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(weather) = changes.weather {
            self.weather = weather;
        }
    }
}
