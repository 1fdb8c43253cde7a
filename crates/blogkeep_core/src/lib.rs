//! Core domain logic for blogkeep.
//! This crate is the single source of truth for author/post field rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::author::Author;
pub use model::post::{Category, Post, PostDraft};
pub use model::validation::{
    validate_category, validate_content, validate_name, validate_phone_number, validate_summary,
    validate_title, ValidationError, CONTENT_MIN_CHARS, PHONE_NUMBER_LEN, SUMMARY_MAX_CHARS,
};
pub use model::RecordId;
pub use repo::author_repo::{AuthorListQuery, AuthorRepository, SqliteAuthorRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::{RecordKind, RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::post_service::PostService;
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
