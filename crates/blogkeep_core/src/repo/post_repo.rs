//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/update/read APIs over the `posts` table.
//!
//! # Invariants
//! - Category is stored as its canonical text (`Fiction` / `Non-Fiction`).
//! - List order is `created_at ASC, id ASC`.

use crate::model::post::{Category, Post};
use crate::model::RecordId;
use crate::repo::{
    invalid_row, push_pagination, RecordKind, RepoError, RepoResult, NOW_EPOCH_MS_SQL,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    summary,
    category,
    created_at,
    updated_at
FROM posts";

/// Query options for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    pub category: Option<Category>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for post operations.
pub trait PostRepository {
    fn create_post(&self, post: &Post) -> RepoResult<RecordId>;
    /// Overwrites every caller-editable column of a saved post.
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn get_post(&self, id: RecordId) -> RepoResult<Option<Post>>;
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &Post) -> RepoResult<RecordId> {
        if let Some(id) = post.id() {
            return Err(RepoError::AlreadyPersisted {
                kind: RecordKind::Post,
                id,
            });
        }

        self.conn.execute(
            "INSERT INTO posts (title, content, summary, category)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        let id = post.id().ok_or(RepoError::NotPersisted(RecordKind::Post))?;

        let changed = self.conn.execute(
            &format!(
                "UPDATE posts
                 SET
                    title = ?1,
                    content = ?2,
                    summary = ?3,
                    category = ?4,
                    updated_at = ({NOW_EPOCH_MS_SQL})
                 WHERE id = ?5;"
            ),
            params![
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: RecordKind::Post,
                id,
            });
        }

        Ok(())
    }

    fn get_post(&self, id: RecordId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_row(row)?));
        }
        Ok(None)
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.as_str().to_string()));
        }

        sql.push_str(" ORDER BY created_at ASC, id ASC");
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();

        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }

        Ok(posts)
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id: RecordId = row.get("id")?;
    let category: Option<String> = row.get("category")?;
    Post::from_parts(
        Some(id),
        row.get("title")?,
        row.get("content")?,
        row.get("summary")?,
        category.as_deref(),
        Some(row.get("created_at")?),
        Some(row.get("updated_at")?),
    )
    .map_err(|err| invalid_row(RecordKind::Post, id, err))
}
