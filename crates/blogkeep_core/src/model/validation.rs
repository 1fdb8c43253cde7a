//! Field validators shared by `Author` and `Post`.
//!
//! # Responsibility
//! - Check one candidate field value before it is accepted into a record.
//! - Report failures as typed `ValidationError` values with stable messages.
//!
//! # Invariants
//! - Validators are pure: no I/O and no mutation of their input.
//! - Lengths are measured in Unicode scalar values, not bytes.
//! - Empty optional text is treated as absent (see `normalize_optional`).

use crate::model::post::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Exact length of a stored author phone number.
pub const PHONE_NUMBER_LEN: usize = 10;
/// Minimum length of post content when content is present.
pub const CONTENT_MIN_CHARS: usize = 250;
/// Maximum length of a post summary when a summary is present.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// Rejection reason for a field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `Author.name` was empty.
    EmptyName,
    /// `Author.phone_number` was set with the wrong length.
    InvalidPhoneNumber { length: usize },
    /// Another author already uses this name.
    DuplicateName(String),
    /// `Post.title` was empty.
    EmptyTitle,
    /// `Post.content` was set but shorter than `CONTENT_MIN_CHARS`.
    ContentTooShort { length: usize },
    /// `Post.summary` was set but longer than `SUMMARY_MAX_CHARS`.
    SummaryTooLong { length: usize },
    /// `Post.category` is not one of the known categories.
    InvalidCategory(String),
    /// `Post.category` was not provided.
    MissingCategory,
    /// A text field contains a NUL character, which storage truncates.
    ContainsNul { field: &'static str },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Author must have a name"),
            Self::InvalidPhoneNumber { length } => write!(
                f,
                "Author phone number must be exactly ten digits (got {length} characters)"
            ),
            Self::DuplicateName(name) => {
                write!(f, "Author name must be unique: `{name}` is taken")
            }
            Self::EmptyTitle => write!(f, "Post must have a title"),
            Self::ContentTooShort { length } => write!(
                f,
                "Post content must be at least {CONTENT_MIN_CHARS} characters long (got {length})"
            ),
            Self::SummaryTooLong { length } => write!(
                f,
                "Post summary must be a maximum of {SUMMARY_MAX_CHARS} characters (got {length})"
            ),
            Self::InvalidCategory(value) => write!(
                f,
                "Invalid post category `{value}`; expected Fiction or Non-Fiction"
            ),
            Self::MissingCategory => write!(f, "Post must have a category"),
            Self::ContainsNul { field } => {
                write!(f, "`{field}` must not contain NUL characters")
            }
        }
    }
}

impl Error for ValidationError {}

impl ValidationError {
    /// Stable machine-readable code, safe to log (carries no field values).
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::InvalidPhoneNumber { .. } => "invalid_phone_number",
            Self::DuplicateName(_) => "duplicate_name",
            Self::EmptyTitle => "empty_title",
            Self::ContentTooShort { .. } => "content_too_short",
            Self::SummaryTooLong { .. } => "summary_too_long",
            Self::InvalidCategory(_) => "invalid_category",
            Self::MissingCategory => "missing_category",
            Self::ContainsNul { .. } => "contains_nul",
        }
    }
}

/// Rejects an empty author name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    reject_nul("name", name)
}

/// Rejects a phone number whose length is not exactly `PHONE_NUMBER_LEN`.
///
/// `None` is accepted: the field is optional.
pub fn validate_phone_number(phone_number: Option<&str>) -> Result<(), ValidationError> {
    if let Some(value) = phone_number {
        reject_nul("phone_number", value)?;
        let length = char_len(value);
        if length != PHONE_NUMBER_LEN {
            return Err(ValidationError::InvalidPhoneNumber { length });
        }
    }
    Ok(())
}

/// Rejects an empty post title.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    reject_nul("title", title)
}

/// Rejects post content shorter than `CONTENT_MIN_CHARS`.
pub fn validate_content(content: Option<&str>) -> Result<(), ValidationError> {
    if let Some(value) = content {
        reject_nul("content", value)?;
        let length = char_len(value);
        if length < CONTENT_MIN_CHARS {
            return Err(ValidationError::ContentTooShort { length });
        }
    }
    Ok(())
}

/// Rejects a post summary longer than `SUMMARY_MAX_CHARS`.
pub fn validate_summary(summary: Option<&str>) -> Result<(), ValidationError> {
    if let Some(value) = summary {
        reject_nul("summary", value)?;
        let length = char_len(value);
        if length > SUMMARY_MAX_CHARS {
            return Err(ValidationError::SummaryTooLong { length });
        }
    }
    Ok(())
}

/// Parses a post category.
///
/// A missing category is rejected with `MissingCategory`, not accepted as
/// "uncategorized". Callers that want an optional category must say so at
/// their own boundary.
pub fn validate_category(category: Option<&str>) -> Result<Category, ValidationError> {
    let value = category.ok_or(ValidationError::MissingCategory)?;
    Category::parse(value).ok_or_else(|| ValidationError::InvalidCategory(value.to_string()))
}

/// Maps an empty optional string to `None`.
///
/// Optional text fields treat `Some("")` the same as "not provided".
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// SQLite's `length()` stops at the first NUL, so such text would pass the
/// checks here and fail the table `CHECK` constraints.
fn reject_nul(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::ContainsNul { field });
    }
    Ok(())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
