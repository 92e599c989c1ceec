//! Favorite — a join row marking a catalog resource as liked.
//!
//! Rows are written without a user reference, so each kind behaves as one
//! global list. `user_id` exists on the row and is what the per-user query
//! filters on, but nothing ever sets it.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::id::{FavoriteId, UserId};

/// The kind of resource a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
    Starship,
}

impl FavoriteKind {
    pub const ALL: [Self; 3] = [Self::Character, Self::Planet, Self::Starship];

    /// Lower-case path segment, e.g. `planet`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Starship => "starship",
        }
    }

    /// Capitalised resource name used in response messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Starship => "Starship",
        }
    }

    /// Resource name used when no favorite row matches.
    #[must_use]
    pub const fn favorite_label(self) -> &'static str {
        match self {
            Self::Character => "Favorite character",
            Self::Planet => "Favorite planet",
            Self::Starship => "Favorite starship",
        }
    }

    /// Serialized key of the target id, e.g. `planet_id`.
    #[must_use]
    pub const fn target_key(self) -> &'static str {
        match self {
            Self::Character => "character_id",
            Self::Planet => "planet_id",
            Self::Starship => "starship_id",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a path segment names no known favorite kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown favorite kind {0:?}")]
pub struct UnknownFavoriteKind(pub String);

impl FromStr for FavoriteKind {
    type Err = UnknownFavoriteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFavoriteKind(s.to_string()))
    }
}

/// A persisted favorite row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub kind: FavoriteKind,
    /// Raw id of the targeted character, planet, or starship.
    pub target_id: i64,
    pub user_id: Option<UserId>,
}

impl Serialize for Favorite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Favorite", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field(self.kind.target_key(), &self.target_id)?;
        state.end()
    }
}
