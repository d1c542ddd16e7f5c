//! Question repository trait

use async_trait::async_trait;

use crate::core::identity::UniqueEntityId;

use super::entities::Question;
use super::value_objects::Slug;

/// Repository trait for questions
///
/// This is a domain-level abstraction that defines how questions are stored
/// and looked up. Implementations live in an outer persistence layer and map
/// the entity's fields to storage.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a question, inserting or replacing by id
    async fn save(&self, question: &Question) -> Result<(), Self::Error>;

    /// Look up a question by id
    async fn find_by_id(&self, id: &UniqueEntityId) -> Result<Option<Question>, Self::Error>;

    /// Look up a question by its current slug
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Question>, Self::Error>;

    /// Remove a question by id
    async fn delete(&self, id: &UniqueEntityId) -> Result<(), Self::Error>;
}
