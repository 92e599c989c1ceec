//! Character — a person or droid in the catalog.

use serde::{Deserialize, Serialize};

use crate::id::CharacterId;

/// A catalog character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
}

/// A character that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub gender: String,
    pub height: String,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
}

impl NewCharacter {
    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_character(self, id: CharacterId) -> Character {
        Character {
            id,
            name: self.name,
            gender: self.gender,
            height: self.height,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
        }
    }
}

/// Fields a character update may overwrite. Anything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
}

impl Character {
    /// Overwrite each field present in `changes`, keep the others.
    pub fn apply(&mut self, changes: CharacterChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(gender) = changes.gender {
            self.gender = gender;
        }
        if let Some(height) = changes.height {
            self.height = height;
        }
    }
}
