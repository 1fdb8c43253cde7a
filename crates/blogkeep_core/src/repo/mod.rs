//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for authors and posts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Records reaching a repository are already field-valid by construction.
//! - Author writes run the name uniqueness pre-check before SQL mutations.
//! - Read paths re-validate rows and reject invalid persisted state.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to DB transport errors.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod post_repo;

/// SQL expression for "now" in epoch milliseconds.
pub(crate) const NOW_EPOCH_MS_SQL: &str =
    "CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)";

pub type RepoResult<T> = Result<T, RepoError>;

/// Record family named in repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Author,
    Post,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author => f.write_str("author"),
            Self::Post => f.write_str("post"),
        }
    }
}

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { kind: RecordKind, id: RecordId },
    /// Update requested for a record that was never created.
    NotPersisted(RecordKind),
    /// Create requested for a record that already has an id.
    AlreadyPersisted { kind: RecordKind, id: RecordId },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::NotPersisted(kind) => write!(f, "{kind} has not been created yet"),
            Self::AlreadyPersisted { kind, id } => {
                write!(f, "{kind} already exists with id {id}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl RepoError {
    /// Stable code without record field values, for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.code(),
            Self::Db(_) => "db_error",
            Self::NotFound { .. } => "not_found",
            Self::NotPersisted(_) => "not_persisted",
            Self::AlreadyPersisted { .. } => "already_persisted",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Returns whether `err` is a SQLite `UNIQUE` constraint violation.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Appends `LIMIT`/`OFFSET` clauses and their bind values.
pub(crate) fn push_pagination(
    sql: &mut String,
    bind_values: &mut Vec<Value>,
    limit: Option<u32>,
    offset: u32,
) {
    if let Some(limit) = limit {
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
        if offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(offset)));
        }
    } else if offset > 0 {
        sql.push_str(" LIMIT -1 OFFSET ?");
        bind_values.push(Value::Integer(i64::from(offset)));
    }
}

/// Wraps a validation failure found on a stored row.
pub(crate) fn invalid_row(kind: RecordKind, id: RecordId, err: ValidationError) -> RepoError {
    RepoError::InvalidData(format!("{kind} {id} violates field rules: {err}"))
}
