//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/update/read APIs over the `authors` table.
//! - Own the author name uniqueness check.
//!
//! # Invariants
//! - `create_author` and `update_author` call `validate_unique_name` first.
//! - A `UNIQUE` violation raised by storage is reported as
//!   `ValidationError::DuplicateName`, same as the pre-check.
//! - List order is `created_at ASC, id ASC`.

use crate::model::author::Author;
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::{
    invalid_row, is_unique_violation, push_pagination, RecordKind, RepoError, RepoResult,
    NOW_EPOCH_MS_SQL,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    created_at,
    updated_at
FROM authors";

/// Query options for listing authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for author operations.
pub trait AuthorRepository {
    /// Inserts an unsaved author and returns its new id.
    fn create_author(&self, author: &Author) -> RepoResult<RecordId>;
    /// Overwrites name and phone number of a saved author.
    fn update_author(&self, author: &Author) -> RepoResult<()>;
    fn get_author(&self, id: RecordId) -> RepoResult<Option<Author>>;
    /// Exact, case-sensitive name lookup.
    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>>;
    /// Fails with `DuplicateName` when another author (not `exclude_id`)
    /// already uses `name`.
    fn validate_unique_name(&self, name: &str, exclude_id: Option<RecordId>) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &Author) -> RepoResult<RecordId> {
        if let Some(id) = author.id() {
            return Err(RepoError::AlreadyPersisted {
                kind: RecordKind::Author,
                id,
            });
        }
        self.validate_unique_name(author.name(), None)?;

        self.conn
            .execute(
                "INSERT INTO authors (name, phone_number) VALUES (?1, ?2);",
                params![author.name(), author.phone_number()],
            )
            .map_err(|err| map_write_error(err, author.name()))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_author(&self, author: &Author) -> RepoResult<()> {
        let id = author
            .id()
            .ok_or(RepoError::NotPersisted(RecordKind::Author))?;
        self.validate_unique_name(author.name(), Some(id))?;

        let changed = self
            .conn
            .execute(
                &format!(
                    "UPDATE authors
                     SET
                        name = ?1,
                        phone_number = ?2,
                        updated_at = ({NOW_EPOCH_MS_SQL})
                     WHERE id = ?3;"
                ),
                params![author.name(), author.phone_number(), id],
            )
            .map_err(|err| map_write_error(err, author.name()))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: RecordKind::Author,
                id,
            });
        }

        Ok(())
    }

    fn get_author(&self, id: RecordId) -> RepoResult<Option<Author>> {
        self.query_one(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"), Value::Integer(id))
    }

    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        self.query_one(
            &format!("{AUTHOR_SELECT_SQL} WHERE name = ?1;"),
            Value::Text(name.to_string()),
        )
    }

    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        let mut sql = format!("{AUTHOR_SELECT_SQL} ORDER BY created_at ASC, id ASC");
        let mut bind_values: Vec<Value> = Vec::new();
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn validate_unique_name(&self, name: &str, exclude_id: Option<RecordId>) -> RepoResult<()> {
        let existing: Option<RecordId> = self
            .conn
            .query_row(
                "SELECT id FROM authors WHERE name = ?1 LIMIT 1;",
                [name],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(existing_id) if Some(existing_id) != exclude_id => Err(
                RepoError::Validation(ValidationError::DuplicateName(name.to_string())),
            ),
            _ => Ok(()),
        }
    }
}

impl SqliteAuthorRepository<'_> {
    fn query_one(&self, sql: &str, key: Value) -> RepoResult<Option<Author>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }
        Ok(None)
    }
}

fn map_write_error(err: rusqlite::Error, name: &str) -> RepoError {
    if is_unique_violation(&err) {
        return RepoError::Validation(ValidationError::DuplicateName(name.to_string()));
    }
    err.into()
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id: RecordId = row.get("id")?;
    Author::from_parts(
        Some(id),
        row.get("name")?,
        row.get("phone_number")?,
        Some(row.get("created_at")?),
        Some(row.get("updated_at")?),
    )
    .map_err(|err| invalid_row(RecordKind::Author, id, err))
}
