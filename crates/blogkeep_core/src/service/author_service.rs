//! Author use-case service.
//!
//! # Responsibility
//! - Create authors and apply single-field edits by id.
//! - Return the stored record so callers see storage-assigned fields.
//!
//! # Invariants
//! - Field validation happens before any repository call.
//! - Name uniqueness is always checked through the repository.

use crate::model::author::Author;
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::author_repo::{AuthorListQuery, AuthorRepository};
use crate::repo::{RecordKind, RepoResult};
use crate::service::{log_write_outcome, ServiceError, ServiceResult};

/// Author service facade over repository implementations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one author.
    ///
    /// # Errors
    /// - `ServiceError::Validation` for an empty name, a bad phone number or a
    ///   name already in use.
    pub fn create_author(
        &self,
        name: impl Into<String>,
        phone_number: Option<String>,
    ) -> ServiceResult<Author> {
        let result = self.create_author_inner(name.into(), phone_number);
        log_write_outcome("author_create", &result, Author::id);
        result
    }

    /// Renames an existing author. Renaming to the current name is a no-op
    /// write that still refreshes `updated_at`.
    pub fn rename_author(&self, id: RecordId, name: impl Into<String>) -> ServiceResult<Author> {
        let name = name.into();
        let result = self.edit_author(id, |author| author.set_name(name));
        log_write_outcome("author_rename", &result, Author::id);
        result
    }

    /// Sets or clears (`None` or empty) an author's phone number.
    pub fn set_phone_number(
        &self,
        id: RecordId,
        phone_number: Option<String>,
    ) -> ServiceResult<Author> {
        let result = self.edit_author(id, |author| author.set_phone_number(phone_number));
        log_write_outcome("author_set_phone", &result, Author::id);
        result
    }

    pub fn get_author(&self, id: RecordId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        self.repo.find_author_by_name(name)
    }

    pub fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        self.repo.list_authors(query)
    }

    fn create_author_inner(
        &self,
        name: String,
        phone_number: Option<String>,
    ) -> ServiceResult<Author> {
        let mut author = Author::new(name)?;
        author.set_phone_number(phone_number)?;

        let id = self.repo.create_author(&author)?;
        self.repo
            .get_author(id)?
            .ok_or(ServiceError::InconsistentState(
                "created author not found in read-back",
            ))
    }

    fn edit_author(
        &self,
        id: RecordId,
        edit: impl FnOnce(&mut Author) -> Result<(), ValidationError>,
    ) -> ServiceResult<Author> {
        let mut author = self.repo.get_author(id)?.ok_or(ServiceError::NotFound {
            kind: RecordKind::Author,
            id,
        })?;
        edit(&mut author)?;
        self.repo.update_author(&author)?;

        self.repo
            .get_author(id)?
            .ok_or(ServiceError::InconsistentState(
                "updated author not found in read-back",
            ))
    }
}
