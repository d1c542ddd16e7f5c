//! Forum value objects.

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// URL-safe token standing in for a raw identifier in links (Value Object).
///
/// A slug is lowercase, hyphen-separated ASCII. Slugs compare by value and
/// are never mutated in place; a question gets a new slug by deriving one
/// from its new title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Wraps an already-formed token, validating it.
    ///
    /// Accepts only non-empty strings of lowercase ASCII alphanumerics and
    /// hyphens. This is the hydration path for tokens produced elsewhere;
    /// use [`Slug::from_text`] to derive a slug from free text.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::InvalidSlug(raw));
        }
        let valid = raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(DomainError::InvalidSlug(raw));
        }
        Ok(Self(raw))
    }

    /// Derives a slug from arbitrary text.
    ///
    /// Deterministic, pure, and total: lowercases the input, keeps ASCII
    /// alphanumerics, and collapses every other run of characters into a
    /// single hyphen, with no leading or trailing separator. Equal inputs
    /// always yield equal tokens.
    pub fn from_text(text: &str) -> Self {
        let mut token = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() {
                token.push(ch.to_ascii_lowercase());
            } else if !token.is_empty() && !token.ends_with('-') {
                token.push('-');
            }
        }
        if token.ends_with('-') {
            token.pop();
        }
        Self(token)
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the slug and returns the inner token.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
