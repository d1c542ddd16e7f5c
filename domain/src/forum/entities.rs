//! Forum domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::clock::Clock;
use crate::core::entity::Entity;
use crate::core::identity::UniqueEntityId;
use crate::core::string;

use super::value_objects::Slug;

/// Whole elapsed days up to which a question still counts as new.
const NEW_WINDOW_DAYS: i64 = 3;

/// Characters of content shown in an excerpt.
const EXCERPT_CHARS: usize = 120;

/// Construction input for [`Question::create`].
///
/// Optional fields are filled in by the factory: a missing slug is derived
/// from the title, a missing creation time is read from the clock.
#[derive(Debug, Clone)]
pub struct QuestionProps {
    pub author_id: UniqueEntityId,
    pub best_answer_id: Option<UniqueEntityId>,
    pub title: String,
    pub content: String,
    pub slug: Option<Slug>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Effects applied by [`Question::rename_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleChanged {
    /// Slug recomputed from the new title.
    pub slug: Slug,
    /// Timestamp written by the touch.
    pub updated_at: DateTime<Utc>,
}

/// A question post (Entity).
///
/// Equality compares ids only: two instances with the same id are the same
/// question regardless of their other fields. All mutation goes through
/// explicit update methods that report the touch they performed, and every
/// time read comes from an injected [`Clock`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: UniqueEntityId,
    author_id: UniqueEntityId,
    best_answer_id: Option<UniqueEntityId>,
    title: String,
    content: String,
    slug: Slug,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Creates a question, filling in the optional fields.
    ///
    /// A missing slug is derived from the title with the same algorithm used
    /// on rename, a missing creation time is read from `clock`, and a missing
    /// id is freshly generated. No validation is performed: empty titles and
    /// contents are accepted as-is (an empty title derives an empty slug).
    pub fn create(props: QuestionProps, id: Option<UniqueEntityId>, clock: &dyn Clock) -> Self {
        let slug = props
            .slug
            .unwrap_or_else(|| Slug::from_text(&props.title));
        Self {
            id: id.unwrap_or_else(UniqueEntityId::generate),
            author_id: props.author_id,
            best_answer_id: props.best_answer_id,
            title: props.title,
            content: props.content,
            slug,
            created_at: props.created_at.unwrap_or_else(|| clock.now()),
            updated_at: None,
        }
    }

    pub fn author_id(&self) -> &UniqueEntityId {
        &self.author_id
    }

    pub fn best_answer_id(&self) -> Option<&UniqueEntityId> {
        self.best_answer_id.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last mutation time. `None` until the first mutation.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces the title, recomputes the slug from it, and touches the
    /// question. Returns the applied effects.
    pub fn rename_title(&mut self, title: impl Into<String>, clock: &dyn Clock) -> TitleChanged {
        self.title = title.into();
        self.slug = Slug::from_text(&self.title);
        let updated_at = self.touch(clock);
        TitleChanged {
            slug: self.slug.clone(),
            updated_at,
        }
    }

    /// Replaces the content and touches the question, returning the new
    /// `updated_at`.
    ///
    /// The touch fires on every call, including a write of the current value.
    pub fn edit_content(&mut self, content: impl Into<String>, clock: &dyn Clock) -> DateTime<Utc> {
        self.content = content.into();
        self.touch(clock)
    }

    /// Sets or clears the accepted answer and touches the question,
    /// returning the new `updated_at`.
    pub fn set_best_answer(
        &mut self,
        best_answer_id: Option<UniqueEntityId>,
        clock: &dyn Clock,
    ) -> DateTime<Utc> {
        self.best_answer_id = best_answer_id;
        self.touch(clock)
    }

    /// Whether the question was created within the last three whole days.
    ///
    /// The elapsed duration is truncated to whole days: exactly three days
    /// ago still counts as new, four whole days no longer does.
    pub fn is_new(&self, clock: &dyn Clock) -> bool {
        (clock.now() - self.created_at).num_days() <= NEW_WINDOW_DAYS
    }

    /// First 120 characters of the content, trailing whitespace removed,
    /// with an ellipsis appended unconditionally.
    pub fn excerpt(&self) -> String {
        string::excerpt(&self.content, EXCERPT_CHARS)
    }

    fn touch(&mut self, clock: &dyn Clock) -> DateTime<Utc> {
        let now = clock.now();
        self.updated_at = Some(now);
        now
    }
}

impl Entity for Question {
    fn id(&self) -> &UniqueEntityId {
        &self.id
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}
