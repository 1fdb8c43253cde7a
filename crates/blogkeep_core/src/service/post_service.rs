//! Post use-case service.
//!
//! # Responsibility
//! - Create posts from caller drafts and replace them by id.
//!
//! # Invariants
//! - `update_post` uses full replacement semantics: fields missing from the
//!   draft are cleared, not kept.
//! - A rejected draft never reaches storage.

use crate::model::post::{Post, PostDraft};
use crate::model::RecordId;
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::{RecordKind, RepoResult};
use crate::service::{log_write_outcome, ServiceError, ServiceResult};

/// Post service facade over repository implementations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates `draft` and stores it as a new post.
    pub fn create_post(&self, draft: &PostDraft) -> ServiceResult<Post> {
        let result = self.create_post_inner(draft);
        log_write_outcome("post_create", &result, Post::id);
        result
    }

    /// Replaces title, content, summary and category of an existing post.
    pub fn update_post(&self, id: RecordId, draft: &PostDraft) -> ServiceResult<Post> {
        let result = self.update_post_inner(id, draft);
        log_write_outcome("post_update", &result, Post::id);
        result
    }

    pub fn get_post(&self, id: RecordId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        self.repo.list_posts(query)
    }

    fn create_post_inner(&self, draft: &PostDraft) -> ServiceResult<Post> {
        let post = Post::from_draft(draft)?;
        let id = self.repo.create_post(&post)?;
        self.repo
            .get_post(id)?
            .ok_or(ServiceError::InconsistentState(
                "created post not found in read-back",
            ))
    }

    fn update_post_inner(&self, id: RecordId, draft: &PostDraft) -> ServiceResult<Post> {
        let mut post = self.repo.get_post(id)?.ok_or(ServiceError::NotFound {
            kind: RecordKind::Post,
            id,
        })?;
        post.apply_draft(draft)?;
        self.repo.update_post(&post)?;

        self.repo
            .get_post(id)?
            .ok_or(ServiceError::InconsistentState(
                "updated post not found in read-back",
            ))
    }
}
