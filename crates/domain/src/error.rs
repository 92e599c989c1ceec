//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HolocronError`] via `#[from]`.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HolocronError {
    /// The request did not satisfy an input or uniqueness rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested row does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before or while writing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One of the keys required for creation is absent.
    #[error("Missing required fields")]
    MissingRequiredFields,

    /// A user with the same email is already registered.
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// The request body could not be read as the expected JSON object.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// No row matches the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable resource name, e.g. `"Planet"` or `"Favorite planet"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}
