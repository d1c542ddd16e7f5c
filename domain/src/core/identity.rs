//! Unique entity identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::DomainError;

/// Unique identifier for a domain entity.
///
/// Wraps a v4 UUID. Identifiers compare by value; entity equality is defined
/// on top of this, so two entities are the same exactly when their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueEntityId(Uuid);

impl UniqueEntityId {
    /// Creates an identifier from an existing UUID.
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    /// Generates a new process-wide-unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses the canonical hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("{s}: {e}")))
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(value: Uuid) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
