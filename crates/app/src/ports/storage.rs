//! Storage port — one repository trait per catalog resource.
//!
//! Ids are assigned by the store, so `create` takes an id-less draft and
//! returns the persisted value.

use std::future::Future;

use holocron_domain::character::{Character, NewCharacter};
use holocron_domain::error::HolocronError;
use holocron_domain::id::{CharacterId, PlanetId, StarshipId, UserId};
use holocron_domain::planet::{NewPlanet, Planet};
use holocron_domain::starship::{NewStarship, Starship};
use holocron_domain::user::{NewUser, User};

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user.
    ///
    /// Implementations report a taken email as
    /// [`ValidationError::EmailAlreadyExists`](holocron_domain::error::ValidationError).
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolocronError>> + Send;

    /// Get a user by id.
    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send;

    /// Get a user by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send;

    /// Get all users in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolocronError>> + Send;

    /// Overwrite every column of an existing user.
    fn update(&self, user: User) -> impl Future<Output = Result<User, HolocronError>> + Send;

    /// Delete a user by id.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HolocronError>> + Send;
}

/// Repository for persisting and querying [`Character`]s.
pub trait CharacterRepository {
    fn create(
        &self,
        character: NewCharacter,
    ) -> impl Future<Output = Result<Character, HolocronError>> + Send;

    fn get_by_id(
        &self,
        id: CharacterId,
    ) -> impl Future<Output = Result<Option<Character>, HolocronError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Character>, HolocronError>> + Send;

    fn update(
        &self,
        character: Character,
    ) -> impl Future<Output = Result<Character, HolocronError>> + Send;

    fn delete(&self, id: CharacterId) -> impl Future<Output = Result<(), HolocronError>> + Send;
}

/// Repository for persisting and querying [`Planet`]s.
pub trait PlanetRepository {
    fn create(&self, planet: NewPlanet)
    -> impl Future<Output = Result<Planet, HolocronError>> + Send;

    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send;

    fn update(&self, planet: Planet) -> impl Future<Output = Result<Planet, HolocronError>> + Send;

    fn delete(&self, id: PlanetId) -> impl Future<Output = Result<(), HolocronError>> + Send;
}

/// Repository for persisting and querying [`Starship`]s.
pub trait StarshipRepository {
    fn create(
        &self,
        starship: NewStarship,
    ) -> impl Future<Output = Result<Starship, HolocronError>> + Send;

    fn get_by_id(
        &self,
        id: StarshipId,
    ) -> impl Future<Output = Result<Option<Starship>, HolocronError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Starship>, HolocronError>> + Send;

    fn update(
        &self,
        starship: Starship,
    ) -> impl Future<Output = Result<Starship, HolocronError>> + Send;

    fn delete(&self, id: StarshipId) -> impl Future<Output = Result<(), HolocronError>> + Send;
}
