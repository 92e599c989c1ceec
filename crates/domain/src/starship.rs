//! Starship — a vessel in the catalog.

use serde::{Deserialize, Serialize};

use crate::id::StarshipId;

/// A catalog starship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Starship {
    pub id: StarshipId,
    pub name: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub starship_class: Option<String>,
}

/// A starship that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewStarship {
    pub name: String,
    pub model: String,
    pub manufacturer: Option<String>,
    pub starship_class: Option<String>,
}

impl NewStarship {
    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_starship(self, id: StarshipId) -> Starship {
        Starship {
            id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            starship_class: self.starship_class,
        }
    }
}

/// Fields a starship update may overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StarshipChanges {
    pub name: Option<String>,
    pub model: Option<String>,
}

impl Starship {
    /// Overwrite each field present in `changes`, keep the others.
    pub fn apply(&mut self, changes: StarshipChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(model) = changes.model {
            self.model = model;
        }
    }
}
