//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid entity id: {0}")]
    InvalidId(String),

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_display() {
        let error = DomainError::InvalidId("not-a-uuid".to_string());
        assert_eq!(error.to_string(), "Invalid entity id: not-a-uuid");
    }

    #[test]
    fn test_invalid_slug_display() {
        let error = DomainError::InvalidSlug("Not A Slug".to_string());
        assert_eq!(error.to_string(), "Invalid slug: \"Not A Slug\"");
    }
}
