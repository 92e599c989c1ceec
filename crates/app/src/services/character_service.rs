//! Character service — use-cases for catalog characters.

use holocron_domain::character::{Character, CharacterChanges, NewCharacter};
use holocron_domain::error::{HolocronError, NotFoundError};
use holocron_domain::id::CharacterId;

use crate::ports::CharacterRepository;

/// Application service for character operations.
pub struct CharacterService<R> {
    repo: R,
}

impl<R: CharacterRepository> CharacterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new character.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, character), fields(name = %character.name))]
    pub async fn create_character(
        &self,
        character: NewCharacter,
    ) -> Result<Character, HolocronError> {
        self.repo.create(character).await
    }

    /// Look up a character by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no character with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_character(&self, id: CharacterId) -> Result<Character, HolocronError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Character", id).into())
    }

    /// List all characters.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_characters(&self) -> Result<Vec<Character>, HolocronError> {
        self.repo.get_all().await
    }

    /// Merge `changes` into a stored character and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::NotFound`] when no character with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_character(
        &self,
        id: CharacterId,
        changes: CharacterChanges,
    ) -> Result<Character, HolocronError> {
        let mut character = self.get_character(id).await?;
        character.apply(changes);
        self.repo.update(character).await
    }
}
