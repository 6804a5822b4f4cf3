//! Domain-level error types.

use thiserror::Error;

use crate::domain::EntityId;

/// Domain errors - business logic failures.
///
/// Store operations report "not found" as `false` / `None`; callers that need
/// an error (the HTTP layer) lift those outcomes into [`DomainError::NotFound`].
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: EntityId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: EntityId) -> Self {
        Self::NotFound { entity_type, id }
    }
}

/// Repository-level errors.
///
/// Only backend failures are reported here; a missing entity is a normal
/// outcome and never an error.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage backend unavailable: {0}")]
    Backend(String),
}
