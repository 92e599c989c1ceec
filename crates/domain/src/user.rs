//! User — an account that can hold favorites.

use serde::Serialize;

use crate::error::{HolocronError, ValidationError};
use crate::id::UserId;

/// A registered user.
///
/// The password is stored but never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub is_active: bool,
}

/// A user that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl NewUser {
    /// Create a builder for constructing a [`NewUser`].
    #[must_use]
    pub fn builder() -> NewUserBuilder {
        NewUserBuilder::default()
    }

    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            is_active: self.is_active,
        }
    }
}

/// Step-by-step builder for [`NewUser`].
///
/// Every field is required. Presence is what counts, an empty string is
/// accepted as a value.
#[derive(Debug, Default)]
pub struct NewUserBuilder {
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl NewUserBuilder {
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Consume the builder and return an active [`NewUser`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredFields`] if any field was
    /// never set.
    pub fn build(self) -> Result<NewUser, HolocronError> {
        match (self.email, self.password, self.first_name, self.last_name) {
            (Some(email), Some(password), Some(first_name), Some(last_name)) => Ok(NewUser {
                email,
                password,
                first_name,
                last_name,
                is_active: true,
            }),
            _ => Err(ValidationError::MissingRequiredFields.into()),
        }
    }
}
