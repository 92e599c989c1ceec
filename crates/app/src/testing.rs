//! In-memory repository implementations shared by the service tests.

use std::future::Future;
use std::sync::Mutex;

use holocron_domain::character::{Character, NewCharacter};
use holocron_domain::error::{HolocronError, ValidationError};
use holocron_domain::favorite::{Favorite, FavoriteKind};
use holocron_domain::id::{CharacterId, FavoriteId, PlanetId, StarshipId, UserId};
use holocron_domain::planet::{NewPlanet, Planet};
use holocron_domain::starship::{NewStarship, Starship};
use holocron_domain::user::{NewUser, User};

use crate::ports::{
    CharacterRepository, FavoriteRepository, PlanetRepository, StarshipRepository, UserRepository,
};

/// Rows in insertion order plus the last id handed out.
struct Table<T> {
    inner: Mutex<(i64, Vec<T>)>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new((0, Vec::new())),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut guard = self.inner.lock().unwrap();
        guard.0 += 1;
        let row = build(guard.0);
        guard.1.push(row.clone());
        row
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.inner.lock().unwrap().1.iter().find(|&r| pred(r)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .lock()
            .unwrap()
            .1
            .iter()
            .filter(|&r| pred(r))
            .cloned()
            .collect()
    }

    fn replace(&self, row: T, same: impl Fn(&T) -> bool) -> T {
        let mut guard = self.inner.lock().unwrap();
        if let Some(slot) = guard.1.iter_mut().find(|r| same(&**r)) {
            *slot = row.clone();
        }
        row
    }

    fn remove(&self, pred: impl Fn(&T) -> bool) {
        self.inner.lock().unwrap().1.retain(|r| !pred(r));
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo(Table<User>);

impl UserRepository for InMemoryUserRepo {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, HolocronError>> + Send {
        let result = if self.0.find(|u| u.email == user.email).is_some() {
            Err(ValidationError::EmailAlreadyExists.into())
        } else {
            Ok(self.0.insert(|id| user.into_user(UserId::from_raw(id))))
        };
        async { result }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send {
        let result = self.0.find(|u| u.id == id);
        async { Ok(result) }
    }

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, HolocronError>> + Send {
        let result = self.0.find(|u| u.email == email);
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HolocronError>> + Send {
        let result = self.0.filter(|_| true);
        async { Ok(result) }
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HolocronError>> + Send {
        let id = user.id;
        let result = self.0.replace(user, |u| u.id == id);
        async { Ok(result) }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HolocronError>> + Send {
        self.0.remove(|u| u.id == id);
        async { Ok(()) }
    }
}

#[derive(Default)]
pub struct InMemoryCharacterRepo(Table<Character>);

impl CharacterRepository for InMemoryCharacterRepo {
    fn create(
        &self,
        character: NewCharacter,
    ) -> impl Future<Output = Result<Character, HolocronError>> + Send {
        let result = self
            .0
            .insert(|id| character.into_character(CharacterId::from_raw(id)));
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: CharacterId,
    ) -> impl Future<Output = Result<Option<Character>, HolocronError>> + Send {
        let result = self.0.find(|c| c.id == id);
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Character>, HolocronError>> + Send {
        let result = self.0.filter(|_| true);
        async { Ok(result) }
    }

    fn update(
        &self,
        character: Character,
    ) -> impl Future<Output = Result<Character, HolocronError>> + Send {
        let id = character.id;
        let result = self.0.replace(character, |c| c.id == id);
        async { Ok(result) }
    }

    fn delete(&self, id: CharacterId) -> impl Future<Output = Result<(), HolocronError>> + Send {
        self.0.remove(|c| c.id == id);
        async { Ok(()) }
    }
}

#[derive(Default)]
pub struct InMemoryPlanetRepo(Table<Planet>);

impl PlanetRepository for InMemoryPlanetRepo {
    fn create(
        &self,
        planet: NewPlanet,
    ) -> impl Future<Output = Result<Planet, HolocronError>> + Send {
        let result = self.0.insert(|id| planet.into_planet(PlanetId::from_raw(id)));
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: PlanetId,
    ) -> impl Future<Output = Result<Option<Planet>, HolocronError>> + Send {
        let result = self.0.find(|p| p.id == id);
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Planet>, HolocronError>> + Send {
        let result = self.0.filter(|_| true);
        async { Ok(result) }
    }

    fn update(&self, planet: Planet) -> impl Future<Output = Result<Planet, HolocronError>> + Send {
        let id = planet.id;
        let result = self.0.replace(planet, |p| p.id == id);
        async { Ok(result) }
    }

    fn delete(&self, id: PlanetId) -> impl Future<Output = Result<(), HolocronError>> + Send {
        self.0.remove(|p| p.id == id);
        async { Ok(()) }
    }
}

#[derive(Default)]
pub struct InMemoryStarshipRepo(Table<Starship>);

impl StarshipRepository for InMemoryStarshipRepo {
    fn create(
        &self,
        starship: NewStarship,
    ) -> impl Future<Output = Result<Starship, HolocronError>> + Send {
        let result = self
            .0
            .insert(|id| starship.into_starship(StarshipId::from_raw(id)));
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: StarshipId,
    ) -> impl Future<Output = Result<Option<Starship>, HolocronError>> + Send {
        let result = self.0.find(|s| s.id == id);
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Starship>, HolocronError>> + Send {
        let result = self.0.filter(|_| true);
        async { Ok(result) }
    }

    fn update(
        &self,
        starship: Starship,
    ) -> impl Future<Output = Result<Starship, HolocronError>> + Send {
        let id = starship.id;
        let result = self.0.replace(starship, |s| s.id == id);
        async { Ok(result) }
    }

    fn delete(&self, id: StarshipId) -> impl Future<Output = Result<(), HolocronError>> + Send {
        self.0.remove(|s| s.id == id);
        async { Ok(()) }
    }
}

/// All three favorite kinds share one id sequence here; the service never
/// relies on ids being per-kind.
#[derive(Default)]
pub struct InMemoryFavoriteRepo(Table<Favorite>);

impl FavoriteRepository for InMemoryFavoriteRepo {
    fn create(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> impl Future<Output = Result<Favorite, HolocronError>> + Send {
        let result = self.0.insert(|id| Favorite {
            id: FavoriteId::from_raw(id),
            kind,
            target_id,
            user_id: None,
        });
        async { Ok(result) }
    }

    fn get_all(
        &self,
        kind: FavoriteKind,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send {
        let result = self.0.filter(|f| f.kind == kind);
        async { Ok(result) }
    }

    fn find_first_by_target(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send {
        let result = self.0.find(|f| f.kind == kind && f.target_id == target_id);
        async { Ok(result) }
    }

    fn find_by_user(
        &self,
        kind: FavoriteKind,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send {
        let result = self
            .0
            .filter(|f| f.kind == kind && f.user_id == Some(user_id));
        async { Ok(result) }
    }

    fn delete(
        &self,
        kind: FavoriteKind,
        id: FavoriteId,
    ) -> impl Future<Output = Result<(), HolocronError>> + Send {
        self.0.remove(|f| f.kind == kind && f.id == id);
        async { Ok(()) }
    }
}
