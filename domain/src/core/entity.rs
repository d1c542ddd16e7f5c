//! Entity contract.

use crate::core::identity::UniqueEntityId;

/// An identity-bearing domain object.
///
/// Entities are distinguished by their identifier, not by their attribute
/// values: two instances with the same id refer to the same entity even if
/// every other field differs.
pub trait Entity {
    /// The entity's unique identifier, assigned at construction.
    fn id(&self) -> &UniqueEntityId;

    /// Whether `other` refers to the same entity.
    fn same_entity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
