//! Post domain model.
//!
//! # Responsibility
//! - Hold one post record and guard every field assignment.
//! - Define the closed `Category` set.
//!
//! # Invariants
//! - `title` is never empty.
//! - `content`, when set, has at least 250 characters.
//! - `summary`, when set, has at most 250 characters.
//! - Every post carries a `Category`; a missing category is rejected.
//! - A rejected assignment leaves the record unchanged.

use crate::model::validation::{
    normalize_optional, validate_category, validate_content, validate_summary, validate_title,
    ValidationError,
};
use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    /// Canonical text form, also used as the stored column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }

    /// Exact, case-sensitive match against the canonical names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fiction" => Some(Self::Fiction),
            "Non-Fiction" => Some(Self::NonFiction),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated post input, as submitted by a form or request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// One blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostFields")]
pub struct Post {
    id: Option<RecordId>,
    title: String,
    content: Option<String>,
    summary: Option<String>,
    category: Category,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

#[derive(Deserialize)]
struct PostFields {
    #[serde(default)]
    id: Option<RecordId>,
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    updated_at: Option<i64>,
}

impl TryFrom<PostFields> for Post {
    type Error = ValidationError;

    fn try_from(value: PostFields) -> Result<Self, Self::Error> {
        Self::from_parts(
            value.id,
            value.title,
            value.content,
            value.summary,
            value.category.as_deref(),
            value.created_at,
            value.updated_at,
        )
    }
}

impl Post {
    /// Creates an unsaved post with no content or summary.
    pub fn new(title: impl Into<String>, category: &str) -> Result<Self, ValidationError> {
        Self::from_parts(None, title.into(), None, None, Some(category), None, None)
    }

    /// Creates an unsaved post from caller input, validating every field.
    ///
    /// The first failing field is reported, checked in the order
    /// title, content, summary, category.
    pub fn from_draft(draft: &PostDraft) -> Result<Self, ValidationError> {
        Self::from_parts(
            None,
            draft.title.clone(),
            draft.content.clone(),
            draft.summary.clone(),
            draft.category.as_deref(),
            None,
            None,
        )
    }

    pub(crate) fn from_parts(
        id: Option<RecordId>,
        title: String,
        content: Option<String>,
        summary: Option<String>,
        category: Option<&str>,
        created_at: Option<i64>,
        updated_at: Option<i64>,
    ) -> Result<Self, ValidationError> {
        validate_title(&title)?;
        let content = normalize_optional(content);
        validate_content(content.as_deref())?;
        let summary = normalize_optional(summary);
        validate_summary(summary.as_deref())?;
        let category = validate_category(category)?;

        Ok(Self {
            id,
            title,
            content,
            summary,
            category,
            created_at,
            updated_at,
        })
    }

    /// Replaces every caller-editable field from `draft`.
    ///
    /// All fields are validated before any is assigned, so a failure leaves
    /// the post untouched.
    pub fn apply_draft(&mut self, draft: &PostDraft) -> Result<(), ValidationError> {
        let replacement = Self::from_parts(
            self.id,
            draft.title.clone(),
            draft.content.clone(),
            draft.summary.clone(),
            draft.category.as_deref(),
            self.created_at,
            self.updated_at,
        )?;
        *self = replacement;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Assigns or clears the content. An empty string clears it.
    pub fn set_content(&mut self, content: Option<String>) -> Result<(), ValidationError> {
        let content = normalize_optional(content);
        validate_content(content.as_deref())?;
        self.content = content;
        Ok(())
    }

    /// Assigns or clears the summary. An empty string clears it.
    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        let summary = normalize_optional(summary);
        validate_summary(summary.as_deref())?;
        self.summary = summary;
        Ok(())
    }

    /// Assigns the category from its text form; `None` is rejected.
    pub fn set_category(&mut self, category: Option<&str>) -> Result<(), ValidationError> {
        self.category = validate_category(category)?;
        Ok(())
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
