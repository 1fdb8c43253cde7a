//! Domain records for the blog: authors and posts.
//!
//! # Responsibility
//! - Define the canonical `Author` and `Post` shapes used by core logic.
//! - Run field validation at assignment time, before anything is persisted.
//!
//! # Invariants
//! - Record fields are private; every write goes through a validating
//!   constructor or setter.
//! - `id`, `created_at` and `updated_at` are owned by storage and are `None`
//!   on records that have not been saved yet.

pub mod author;
pub mod post;
pub mod validation;

/// Storage-assigned integer identity shared by all records.
pub type RecordId = i64;
