//! Author domain model.
//!
//! # Responsibility
//! - Hold one author record and guard every field assignment.
//!
//! # Invariants
//! - `name` is never empty.
//! - `phone_number`, when set, is exactly ten characters long.
//! - A rejected assignment leaves the record unchanged.
//! - Name uniqueness needs storage access and is checked by the repository.

use crate::model::validation::{
    normalize_optional, validate_name, validate_phone_number, ValidationError,
};
use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// One blog author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorFields")]
pub struct Author {
    id: Option<RecordId>,
    name: String,
    phone_number: Option<String>,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

/// Unchecked wire shape; converted through `Author::from_parts`.
#[derive(Deserialize)]
struct AuthorFields {
    #[serde(default)]
    id: Option<RecordId>,
    name: String,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    updated_at: Option<i64>,
}

impl TryFrom<AuthorFields> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorFields) -> Result<Self, Self::Error> {
        Self::from_parts(
            value.id,
            value.name,
            value.phone_number,
            value.created_at,
            value.updated_at,
        )
    }
}

impl Author {
    /// Creates an unsaved author.
    ///
    /// # Errors
    /// - `ValidationError::EmptyName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::from_parts(None, name.into(), None, None, None)
    }

    /// Builder-style variant of `set_phone_number`.
    pub fn with_phone_number(
        mut self,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.set_phone_number(Some(phone_number.into()))?;
        Ok(self)
    }

    /// Rebuilds an author from stored or deserialized values, re-running every
    /// field validator.
    pub(crate) fn from_parts(
        id: Option<RecordId>,
        name: String,
        phone_number: Option<String>,
        created_at: Option<i64>,
        updated_at: Option<i64>,
    ) -> Result<Self, ValidationError> {
        validate_name(&name)?;
        let phone_number = normalize_optional(phone_number);
        validate_phone_number(phone_number.as_deref())?;

        Ok(Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        })
    }

    /// Assigns a new name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Assigns or clears the phone number. An empty string clears it.
    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> Result<(), ValidationError> {
        let phone_number = normalize_optional(phone_number);
        validate_phone_number(phone_number.as_deref())?;
        self.phone_number = phone_number;
        Ok(())
    }

    /// Storage identity; `None` until the author has been created.
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Insert time in epoch milliseconds, assigned by storage.
    pub fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    /// Last write time in epoch milliseconds, assigned by storage.
    pub fn updated_at(&self) -> Option<i64> {
        self.updated_at
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
